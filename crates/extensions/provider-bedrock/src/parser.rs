//! Response parsing utilities.

use visioncam_protocols::error::ProviderError;

use crate::api::ApiResponse;

pub const EMPTY_BODY_MESSAGE: &str = "No response body from Bedrock";
pub const NO_TEXT_MESSAGE: &str = "No text content in Bedrock response";

/// Extract the text of the first content block from a raw `InvokeModel` body.
pub fn parse_response(body: &[u8]) -> Result<String, ProviderError> {
    if body.is_empty() {
        return Err(ProviderError::EmptyResponse(EMPTY_BODY_MESSAGE.to_string()));
    }

    let text = std::str::from_utf8(body)
        .map_err(|e| ProviderError::InvalidResponse(format!("Body is not UTF-8: {}", e)))?;
    let response: ApiResponse = serde_json::from_str(text)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

    response
        .content
        .into_iter()
        .next()
        .and_then(|block| block.text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ProviderError::EmptyResponse(NO_TEXT_MESSAGE.to_string()))
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
