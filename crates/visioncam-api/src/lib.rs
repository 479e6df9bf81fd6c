//! # VisionCam API
//!
//! HTTP surface of the VisionCam service.
//!
//! - `POST /analyze` stores an uploaded frame and captions it
//! - `POST /ask` answers a question about the stored frame
//! - `GET /health`, `GET /bedrock/status`, `GET /openai/status`, `GET /providers`

pub mod error;
pub mod http;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use http::handlers::{AnalyzeResponse, AskRequest, AskResponse};
pub use http::routes::create_router;
pub use server::ApiServer;
pub use state::AppState;
