//! Analyze and ask handlers.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{Multipart, MultipartError, MultipartRejection},
        rejection::JsonRejection,
        State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use visioncam_core::prompts::{question_prompt, ANALYZE_PROMPT};
use visioncam_protocols::error::ProviderError;
use visioncam_protocols::provider::{ProviderKind, ProviderResult};

use crate::error::{
    ApiError, INVALID_PROVIDER_MESSAGE, INVALID_QUESTION_MESSAGE, MISSING_IMAGE_MESSAGE,
    NOT_AN_IMAGE_MESSAGE,
};
use crate::http::api_key;
use crate::state::AppState;

/// Multipart field carrying the image.
pub const FRAME_FIELD: &str = "frame";
/// Multipart field naming the provider.
pub const PROVIDER_FIELD: &str = "provider";

const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze image";
const ASK_FAILED_MESSAGE: &str = "Failed to process question";

/// Response from `POST /analyze`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub provider: ProviderKind,
    pub caption: String,
}

impl From<ProviderResult> for AnalyzeResponse {
    fn from(result: ProviderResult) -> Self {
        Self {
            provider: result.provider,
            caption: result.text,
        }
    }
}

/// Body of `POST /ask`.
///
/// Fields are loose JSON values so that type errors surface as the
/// matching validation message instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub provider: Option<serde_json::Value>,
    #[serde(default)]
    pub question: Option<serde_json::Value>,
}

/// Response from `POST /ask`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub provider: ProviderKind,
    pub answer: String,
}

impl From<ProviderResult> for AskResponse {
    fn from(result: ProviderResult) -> Self {
        Self {
            provider: result.provider,
            answer: result.text,
        }
    }
}

/// Uploaded image extracted from the multipart form.
struct Frame {
    bytes: Vec<u8>,
    mime_type: String,
}

/// Store the uploaded frame and caption it.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let mut multipart =
        multipart.map_err(|_| ApiError::Validation(MISSING_IMAGE_MESSAGE.to_string()))?;

    let mut frame: Option<Frame> = None;
    let mut provider_name: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FRAME_FIELD) => {
                let mime_type = field.content_type().unwrap_or_default().to_string();
                if !mime_type.starts_with("image/") {
                    warn!(mime_type = %mime_type, "Rejected non-image upload");
                    return Err(ApiError::Validation(NOT_AN_IMAGE_MESSAGE.to_string()));
                }
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if bytes.len() > state.max_upload_bytes {
                    warn!(
                        size = bytes.len(),
                        limit = state.max_upload_bytes,
                        "Rejected oversized frame"
                    );
                    return Err(ApiError::PayloadTooLarge(format!(
                        "Image exceeds the {} byte upload limit",
                        state.max_upload_bytes
                    )));
                }
                frame = Some(Frame {
                    bytes: bytes.to_vec(),
                    mime_type,
                });
            }
            Some(PROVIDER_FIELD) => {
                provider_name = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let frame = frame
        .filter(|frame| !frame.bytes.is_empty())
        .ok_or_else(|| ApiError::Validation(MISSING_IMAGE_MESSAGE.to_string()))?;

    let provider_name = provider_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| ProviderKind::Bedrock.as_str().to_string());
    if !state.factory.is_valid_provider(&provider_name) {
        return Err(ApiError::UnknownProvider(INVALID_PROVIDER_MESSAGE.to_string()));
    }

    // Stored before the provider call so a failed caption can still be followed by `ask`.
    let image = state.session.store(&frame.bytes, frame.mime_type);
    info!(
        provider = %provider_name,
        mime_type = %image.mime_type,
        size = frame.bytes.len(),
        "Analyzing frame"
    );

    let provider = state
        .factory
        .create(&provider_name, api_key(&headers))
        .map_err(|e| provider_failure(&state, &provider_name, e, ANALYZE_FAILED_MESSAGE))?;

    let caption = provider
        .analyze_image(&image.payload, &image.mime_type, ANALYZE_PROMPT)
        .await
        .map_err(|e| provider_failure(&state, &provider_name, e, ANALYZE_FAILED_MESSAGE))?;

    Ok(Json(ProviderResult::new(provider.kind(), caption).into()))
}

/// Answer a question about the stored frame.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<AskResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(ApiError::PayloadTooLarge(rejection.body_text()));
        }
        // Malformed bodies fall through to the field validation messages.
        Err(_) => AskRequest::default(),
    };

    let question = request
        .question
        .as_ref()
        .and_then(|value| value.as_str())
        .filter(|question| !question.trim().is_empty())
        .ok_or_else(|| ApiError::Validation(INVALID_QUESTION_MESSAGE.to_string()))?;

    let kind = request
        .provider
        .as_ref()
        .and_then(|value| value.as_str())
        .filter(|name| state.factory.is_valid_provider(name))
        .and_then(|name| name.parse::<ProviderKind>().ok())
        .ok_or_else(|| ApiError::UnknownProvider(INVALID_PROVIDER_MESSAGE.to_string()))?;

    let image = state.session.fetch()?;
    info!(provider = %kind, question_len = question.len(), "Answering question");

    let provider = state.factory.create_provider(kind, api_key(&headers));
    let answer = provider
        .ask_question(&image.payload, &image.mime_type, &question_prompt(question))
        .await
        .map_err(|e| provider_failure(&state, kind.as_str(), e, ASK_FAILED_MESSAGE))?;

    Ok(Json(ProviderResult::new(kind, answer).into()))
}

fn provider_failure(
    state: &AppState,
    provider: &str,
    err: ProviderError,
    fallback: &str,
) -> ApiError {
    if err.is_remote() {
        error!(provider, error = %err, "Provider call failed");
    } else {
        warn!(provider, error = %err, "Provider refused the request");
    }
    ApiError::from_provider(err, fallback, state.expose_error_details)
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::Validation(err.body_text())
    }
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
