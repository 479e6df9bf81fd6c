//! HTTP route definitions.
//!
//! ```text
//! POST /analyze          - Store a frame (multipart `frame`) and caption it
//! POST /ask              - Question about the stored frame (JSON)
//! GET  /health           - Liveness
//! GET  /bedrock/status   - Bedrock settings check
//! GET  /openai/status    - OpenAI key presence check
//! GET  /providers        - Supported providers
//! ```

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::http::handlers::{analyze, ask};
use crate::http::monitoring;
use crate::state::AppState;

/// Room for multipart boundaries, part headers and the `provider` field on top
/// of the frame itself. The frame size is checked in the analyze handler.
pub const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main router.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.max_upload_bytes.saturating_add(MULTIPART_OVERHEAD_BYTES);

    let vision_routes = Router::new()
        .route("/analyze", post(analyze))
        .route("/ask", post(ask))
        .with_state(state.clone());

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health))
        .route("/bedrock/status", get(monitoring::bedrock_status))
        .route("/openai/status", get(monitoring::openai_status))
        .route("/providers", get(monitoring::providers))
        .with_state(state);

    Router::new()
        .merge(vision_routes)
        .merge(monitoring_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
