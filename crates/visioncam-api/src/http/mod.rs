//! HTTP interface module.
//!
//! Provides REST API endpoints for:
//! - Frame analysis and follow-up questions
//! - Health and provider status checks

pub mod handlers;
pub mod routes;

pub(crate) mod monitoring;

use axum::http::HeaderMap;

/// Header carrying the caller's provider API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Caller-supplied API key, if present and non-blank.
pub(crate) fn api_key(headers: &HeaderMap) -> Option<String> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
