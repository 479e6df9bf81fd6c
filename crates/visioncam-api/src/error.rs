//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use visioncam_core::SessionError;
use visioncam_protocols::error::ProviderError;

pub const MISSING_IMAGE_MESSAGE: &str =
    "Missing image. Please provide an image in the \"frame\" field.";
pub const INVALID_PROVIDER_MESSAGE: &str = "Invalid provider. Must be \"openai\" or \"bedrock\".";
pub const INVALID_QUESTION_MESSAGE: &str =
    "Missing or invalid question. Please provide a question string.";
pub const NOT_AN_IMAGE_MESSAGE: &str = "Only image files are allowed";

/// Errors surfaced by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),

    /// Provider name outside the supported set.
    #[error("{0}")]
    UnknownProvider(String),

    /// `ask` before any image was stored.
    #[error(transparent)]
    EmptySession(#[from] SessionError),

    /// Provider needs a credential the caller did not send.
    #[error("{0}")]
    CredentialMissing(String),

    /// Upload exceeded the configured body limit.
    #[error("{0}")]
    PayloadTooLarge(String),

    /// Remote call failed or returned nothing usable.
    #[error("{0}")]
    Provider(String),
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: &'static str,
}

impl ApiError {
    /// Map a provider failure. With `expose_details` off, remote failures are
    /// reported as `fallback` only.
    pub fn from_provider(err: ProviderError, fallback: &str, expose_details: bool) -> Self {
        if err.is_credential_error() {
            return Self::CredentialMissing(err.to_string());
        }
        if let ProviderError::UnknownProvider(_) = err {
            return Self::UnknownProvider(INVALID_PROVIDER_MESSAGE.to_string());
        }
        if expose_details {
            Self::Provider(err.to_string())
        } else {
            Self::Provider(fallback.to_string())
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::UnknownProvider(_) => StatusCode::BAD_REQUEST,
            Self::EmptySession(_) => StatusCode::CONFLICT,
            Self::CredentialMissing(_) => StatusCode::UNAUTHORIZED,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::UnknownProvider(_) => "unknown_provider",
            Self::EmptySession(_) => "empty_session",
            Self::CredentialMissing(_) => "credential_missing",
            Self::PayloadTooLarge(_) => "payload_too_large",
            Self::Provider(_) => "provider",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
            kind: self.kind(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
