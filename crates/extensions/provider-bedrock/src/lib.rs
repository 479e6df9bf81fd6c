//! AWS Bedrock vision provider for VisionCam.
//!
//! Talks to Anthropic Claude models through Bedrock's `InvokeModel` API using
//! the ambient AWS credential chain.

mod api;
mod parser;
mod provider;
mod runtime;

pub use provider::{BedrockProvider, DEFAULT_MODEL_ID, DEFAULT_REGION};
pub use runtime::{AwsBedrockRuntime, BedrockRuntime, InvokeRequest};
