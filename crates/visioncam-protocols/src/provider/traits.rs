//! Vision provider trait definition.

use async_trait::async_trait;

use super::{ConfigStatus, ProviderKind};
use crate::error::ProviderError;

/// Core trait for vision providers.
///
/// Every call is one-shot: a single image and a single text prompt, with no
/// memory carried between calls.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Which backend this is.
    fn kind(&self) -> ProviderKind;

    /// Returns the stable provider identifier.
    fn name(&self) -> &str {
        self.kind().as_str()
    }

    /// Send the image and prompt to the remote model and return its first
    /// textual completion.
    async fn analyze_image(
        &self,
        image_base64: &str,
        mime_type: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;

    /// Answer a question about the image. Same call shape as
    /// [`analyze_image`](Self::analyze_image) with the question as prompt.
    async fn ask_question(
        &self,
        image_base64: &str,
        mime_type: &str,
        question: &str,
    ) -> Result<String, ProviderError> {
        self.analyze_image(image_base64, mime_type, question).await
    }

    /// Cheap local check of credential/region presence.
    ///
    /// Must never invoke the paid model endpoint.
    async fn validate_config(&self) -> ConfigStatus;
}
