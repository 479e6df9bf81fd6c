//! OpenAI provider implementation.

use async_trait::async_trait;
use tracing::debug;

use visioncam_protocols::error::ProviderError;
use visioncam_protocols::provider::{ConfigStatus, ProviderKind, VisionProvider};

use crate::api::{ApiErrorBody, ApiMessage, ApiRequest, ApiResponse, ContentPart, ImageUrl};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const MISSING_KEY_MESSAGE: &str = "OpenAI API key required. Provide it via X-Api-Key header.";

const MAX_TOKENS: u32 = 300;
const IMAGE_DETAIL: &str = "low";

/// OpenAI vision provider.
///
/// The API key comes from the caller. A provider built without one still
/// constructs; calls fail with [`ProviderError::CredentialMissing`] before any
/// network activity.
pub struct OpenAIProvider {
    api_key: Option<String>,
    api_url: String,
    model: String,
    client: reqwest::Client,
}

impl OpenAIProvider {
    /// Create provider against `api_url` (the public endpoint or an OpenAI-compatible one).
    pub fn with_url(api_key: Option<String>, api_url: String) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            api_url,
            model: DEFAULT_MODEL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(&self, image_base64: &str, mime_type: &str, prompt: &str) -> ApiRequest {
        ApiRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text { text: prompt.to_string() },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl::data_uri(mime_type, image_base64, IMAGE_DETAIL),
                    },
                ],
            }],
            max_tokens: MAX_TOKENS,
        }
    }

    async fn send_request(
        &self,
        api_key: &str,
        api_request: &ApiRequest,
    ) -> Result<reqwest::Response, ProviderError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(ProviderError::ApiError { status, message });
        }

        Ok(response)
    }
}

#[async_trait]
impl VisionProvider for OpenAIProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAI
    }

    async fn analyze_image(
        &self,
        image_base64: &str,
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::CredentialMissing(MISSING_KEY_MESSAGE.to_string()))?;

        let api_request = self.build_request(image_base64, mime_type, prompt);
        debug!(model = %self.model, mime_type, "Sending OpenAI vision request");

        let response = self.send_request(api_key, &api_request).await?;
        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        api_response
            .first_content()
            .map(str::to_string)
            .ok_or_else(|| ProviderError::EmptyResponse("No response from OpenAI".to_string()))
    }

    async fn validate_config(&self) -> ConfigStatus {
        match self.api_key {
            Some(_) => ConfigStatus::ok("OpenAI provider initialized successfully"),
            None => ConfigStatus::failed(MISSING_KEY_MESSAGE),
        }
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
