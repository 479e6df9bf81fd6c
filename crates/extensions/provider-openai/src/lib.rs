//! OpenAI vision provider for VisionCam.

mod api;
mod provider;

pub use provider::{OpenAIProvider, DEFAULT_API_URL, DEFAULT_MODEL, MISSING_KEY_MESSAGE};
