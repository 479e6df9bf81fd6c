//! Provider factory.

use std::sync::Arc;

use tracing::debug;

use visioncam_config::ProvidersConfig;
use visioncam_protocols::error::ProviderError;
use visioncam_protocols::provider::{CredentialSource, ProviderKind, VisionProvider};
use visioncam_provider_bedrock::{AwsBedrockRuntime, BedrockProvider, BedrockRuntime};
use visioncam_provider_openai::OpenAIProvider;

/// Builds a fresh provider for every request.
///
/// Holds only settings and the Bedrock transport; no remote client is reused
/// across requests.
pub struct ProviderFactory {
    settings: ProvidersConfig,
    bedrock_runtime: Arc<dyn BedrockRuntime>,
}

impl ProviderFactory {
    pub fn new(settings: ProvidersConfig) -> Self {
        Self {
            settings,
            bedrock_runtime: Arc::new(AwsBedrockRuntime::new()),
        }
    }

    /// Replace the transport used by Bedrock providers.
    pub fn with_bedrock_runtime(mut self, runtime: Arc<dyn BedrockRuntime>) -> Self {
        self.bedrock_runtime = runtime;
        self
    }

    pub fn settings(&self) -> &ProvidersConfig {
        &self.settings
    }

    /// Build the provider for `kind`.
    ///
    /// The credential is only passed to variants that read it from the
    /// request; ambient variants ignore it.
    pub fn create_provider(
        &self,
        kind: ProviderKind,
        credential: Option<String>,
    ) -> Box<dyn VisionProvider> {
        let credential = match kind.credential_source() {
            CredentialSource::RequestHeader => credential,
            CredentialSource::Ambient => None,
        };
        debug!(provider = %kind, has_credential = credential.is_some(), "Creating provider");

        match kind {
            ProviderKind::OpenAI => {
                let openai = &self.settings.openai;
                Box::new(
                    OpenAIProvider::with_url(credential, openai.api_url.clone())
                        .with_model(openai.model.clone()),
                )
            }
            ProviderKind::Bedrock => {
                let bedrock = &self.settings.bedrock;
                Box::new(BedrockProvider::with_runtime(
                    bedrock.region.clone(),
                    bedrock.model_id.clone(),
                    self.bedrock_runtime.clone(),
                ))
            }
        }
    }

    /// Build a provider from an untrusted name.
    pub fn create(
        &self,
        name: &str,
        credential: Option<String>,
    ) -> Result<Box<dyn VisionProvider>, ProviderError> {
        let kind = name.parse::<ProviderKind>()?;
        Ok(self.create_provider(kind, credential))
    }

    pub fn supported_providers(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL.to_vec()
    }

    /// Pure membership check against the supported provider names.
    pub fn is_valid_provider(&self, name: &str) -> bool {
        name.parse::<ProviderKind>().is_ok()
    }
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod tests;
