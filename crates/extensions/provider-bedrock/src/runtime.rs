//! Transport to the Bedrock runtime service.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::debug;

use visioncam_protocols::error::ProviderError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// One `InvokeModel` call.
#[derive(Debug, Clone)]
pub struct InvokeRequest {
    pub region: String,
    pub model_id: String,
    pub body: Vec<u8>,
}

/// Sends serialized model payloads to Bedrock and returns the raw response body.
#[async_trait]
pub trait BedrockRuntime: Send + Sync {
    async fn invoke_model(&self, request: InvokeRequest) -> Result<Vec<u8>, ProviderError>;
}

/// Runtime backed by the AWS SDK.
///
/// Credentials come from the default provider chain (environment, shared
/// profile, instance role). A client is built per call for the requested region.
#[derive(Debug, Default, Clone)]
pub struct AwsBedrockRuntime;

impl AwsBedrockRuntime {
    pub fn new() -> Self {
        Self
    }

    async fn client(region: &str) -> aws_sdk_bedrockruntime::Client {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        aws_sdk_bedrockruntime::Client::new(&sdk_config)
    }
}

#[async_trait]
impl BedrockRuntime for AwsBedrockRuntime {
    async fn invoke_model(&self, request: InvokeRequest) -> Result<Vec<u8>, ProviderError> {
        let client = Self::client(&request.region).await;
        debug!(region = %request.region, model_id = %request.model_id, "Invoking Bedrock model");

        let output = client
            .invoke_model()
            .model_id(&request.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(request.body))
            .send()
            .await
            .map_err(|err| match err.raw_response() {
                Some(raw) => ProviderError::ApiError {
                    status: raw.status().as_u16(),
                    message: err
                        .as_service_error()
                        .and_then(|service| service.message())
                        .map(str::to_string)
                        .unwrap_or_else(|| DisplayErrorContext(&err).to_string()),
                },
                None => ProviderError::Network(DisplayErrorContext(&err).to_string()),
            })?;

        Ok(output.body().as_ref().to_vec())
    }
}
