//! Vision provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("{0}")]
    CredentialMissing(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    EmptyResponse(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Whether the caller failed to supply a credential the provider needs.
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Self::CredentialMissing(_))
    }

    /// Whether the failure came from talking to (or decoding) the remote model.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. }
                | Self::Network(_)
                | Self::EmptyResponse(_)
                | Self::InvalidResponse(_)
        )
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
