//! Health and provider status handlers.

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, Json};
use serde::{Deserialize, Serialize};

use visioncam_protocols::provider::{ConfigStatus, ProviderKind};

use crate::http::api_key;
use crate::state::AppState;

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Supported providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderKind>,
    /// Used by `/analyze` when no provider is named.
    pub default: ProviderKind,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Local Bedrock settings check. Never invokes the model.
pub async fn bedrock_status(State(state): State<Arc<AppState>>) -> Json<ConfigStatus> {
    let provider = state.factory.create_provider(ProviderKind::Bedrock, None);
    Json(provider.validate_config().await)
}

/// Reports whether the caller sent an OpenAI key. No network call.
pub async fn openai_status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Json<ConfigStatus> {
    let provider = state
        .factory
        .create_provider(ProviderKind::OpenAI, api_key(&headers));
    Json(provider.validate_config().await)
}

pub async fn providers(State(state): State<Arc<AppState>>) -> Json<ProvidersResponse> {
    Json(ProvidersResponse {
        providers: state.factory.supported_providers(),
        default: ProviderKind::Bedrock,
    })
}

#[cfg(test)]
#[path = "monitoring_tests.rs"]
mod tests;
