//! Bedrock provider implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use visioncam_protocols::error::ProviderError;
use visioncam_protocols::provider::{ConfigStatus, ProviderKind, VisionProvider};

use crate::api::{ApiMessage, ApiRequest, ContentBlock, ImageSource};
use crate::parser::parse_response;
use crate::runtime::{BedrockRuntime, InvokeRequest};

pub const DEFAULT_REGION: &str = "ap-southeast-2";
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-haiku-20240307-v1:0";

const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
const MAX_TOKENS: u32 = 300;

/// AWS Bedrock vision provider.
pub struct BedrockProvider {
    region: String,
    model_id: String,
    runtime: Arc<dyn BedrockRuntime>,
}

impl BedrockProvider {
    /// Create provider over a transport, usually [`crate::AwsBedrockRuntime`].
    pub fn with_runtime(
        region: impl Into<String>,
        model_id: impl Into<String>,
        runtime: Arc<dyn BedrockRuntime>,
    ) -> Self {
        Self {
            region: region.into(),
            model_id: model_id.into(),
            runtime,
        }
    }

    fn build_request(&self, image_base64: &str, mime_type: &str, prompt: &str) -> ApiRequest {
        ApiRequest {
            anthropic_version: ANTHROPIC_VERSION.to_string(),
            max_tokens: MAX_TOKENS,
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: vec![
                    ContentBlock::Image {
                        source: ImageSource::base64(mime_type, image_base64),
                    },
                    ContentBlock::Text { text: prompt.to_string() },
                ],
            }],
        }
    }

    fn check_settings(&self) -> Result<(), String> {
        if self.region.trim().is_empty() {
            return Err("AWS region is not set".to_string());
        }
        if !is_region_name(&self.region) {
            return Err(format!("Invalid AWS region: {}", self.region));
        }
        if self.model_id.trim().is_empty() {
            return Err("Bedrock model id is not set".to_string());
        }
        Ok(())
    }
}

/// Region names look like `ap-southeast-2` or `us-gov-west-1`.
fn is_region_name(region: &str) -> bool {
    region.contains('-')
        && !region.starts_with('-')
        && !region.ends_with('-')
        && region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[async_trait]
impl VisionProvider for BedrockProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Bedrock
    }

    async fn analyze_image(
        &self,
        image_base64: &str,
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        self.check_settings().map_err(ProviderError::Configuration)?;

        let api_request = self.build_request(image_base64, mime_type, prompt);
        let body = serde_json::to_vec(&api_request)
            .map_err(|e| ProviderError::Configuration(format!("Failed to encode request: {}", e)))?;
        debug!(model_id = %self.model_id, mime_type, "Sending Bedrock vision request");

        let response = self
            .runtime
            .invoke_model(InvokeRequest {
                region: self.region.clone(),
                model_id: self.model_id.clone(),
                body,
            })
            .await?;

        parse_response(&response)
    }

    async fn validate_config(&self) -> ConfigStatus {
        match self.check_settings() {
            Ok(()) => ConfigStatus::ok(format!(
                "Bedrock initialized successfully in region {} with model {}",
                self.region, self.model_id
            )),
            Err(reason) => ConfigStatus::failed(format!("Bedrock initialization failed: {}", reason)),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
