//! Anthropic-on-Bedrock message types.
#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// `InvokeModel` request body for Anthropic models.
#[derive(Debug, Serialize)]
pub struct ApiRequest {
    pub anthropic_version: String,
    pub max_tokens: u32,
    pub messages: Vec<ApiMessage>,
}

/// API message format.
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub role: String,
    pub content: Vec<ContentBlock>,
}

/// Content block.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Image { source: ImageSource },
    Text { text: String },
}

/// Inline image payload.
#[derive(Debug, Serialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub media_type: String,
    pub data: String,
}

impl ImageSource {
    pub fn base64(media_type: &str, data: &str) -> Self {
        Self {
            source_type: "base64".to_string(),
            media_type: media_type.to_string(),
            data: data.to_string(),
        }
    }
}

/// API response.
#[derive(Debug, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub content: Vec<ResponseBlock>,
    #[serde(default)]
    pub stop_reason: Option<String>,
}

/// Response content block. Only `text` is read.
#[derive(Debug, Deserialize)]
pub struct ResponseBlock {
    #[serde(rename = "type", default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
