use super::*;

#[test]
fn test_api_request_serialization() {
    let request = ApiRequest {
        model: "gpt-4o-mini".to_string(),
        messages: vec![ApiMessage {
            role: "user".to_string(),
            content: vec![
                ContentPart::Text { text: "Describe this".to_string() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl::data_uri("image/jpeg", "AAAA", "low"),
                },
            ],
        }],
        max_tokens: 300,
    };

    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["model"], "gpt-4o-mini");
    assert_eq!(json["max_tokens"], 300);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["content"][0]["type"], "text");
    assert_eq!(json["messages"][0]["content"][0]["text"], "Describe this");
    assert_eq!(json["messages"][0]["content"][1]["type"], "image_url");
    assert_eq!(
        json["messages"][0]["content"][1]["image_url"]["url"],
        "data:image/jpeg;base64,AAAA"
    );
    assert_eq!(json["messages"][0]["content"][1]["image_url"]["detail"], "low");
}

#[test]
fn test_image_url_without_detail_skips_field() {
    let part = ImageUrl {
        url: "https://example.com/image.png".to_string(),
        detail: None,
    };
    let json = serde_json::to_value(&part).unwrap();
    assert!(json.get("detail").is_none());
}

#[test]
fn test_api_response_first_content() {
    let json = serde_json::json!({
        "id": "chatcmpl-123",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "A red mug."},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    });

    let response: ApiResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.id.as_deref(), Some("chatcmpl-123"));
    assert_eq!(response.first_content(), Some("A red mug."));
}

#[test]
fn test_api_response_null_content() {
    let json = serde_json::json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": null}}]
    });
    let response: ApiResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.first_content(), None);
}

#[test]
fn test_api_response_empty_content() {
    let json = serde_json::json!({
        "choices": [{"index": 0, "message": {"role": "assistant", "content": ""}}]
    });
    let response: ApiResponse = serde_json::from_value(json).unwrap();
    assert_eq!(response.first_content(), None);
}

#[test]
fn test_api_response_no_choices() {
    let response: ApiResponse = serde_json::from_value(serde_json::json!({"choices": []})).unwrap();
    assert_eq!(response.first_content(), None);
}

#[test]
fn test_error_body_deserialization() {
    let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.error.message, "Incorrect API key provided");
    assert_eq!(parsed.error.error_type.as_deref(), Some("invalid_request_error"));
}
