use super::*;

#[test]
fn test_provider_error_unknown_provider() {
    let err = ProviderError::UnknownProvider("gemini".to_string());
    assert!(err.to_string().contains("Unknown provider"));
    assert!(err.to_string().contains("gemini"));
}

#[test]
fn test_provider_error_credential_missing_is_bare_message() {
    let err = ProviderError::CredentialMissing("OpenAI API key required".to_string());
    assert_eq!(err.to_string(), "OpenAI API key required");
}

#[test]
fn test_provider_error_api_error() {
    let err = ProviderError::ApiError {
        status: 500,
        message: "Internal Server Error".to_string(),
    };
    assert!(err.to_string().contains("500"));
    assert!(err.to_string().contains("Internal Server Error"));
}

#[test]
fn test_provider_error_network() {
    let err = ProviderError::Network("Connection refused".to_string());
    assert!(err.to_string().contains("Network error"));
}

#[test]
fn test_provider_error_empty_response() {
    let err = ProviderError::EmptyResponse("No response from OpenAI".to_string());
    assert_eq!(err.to_string(), "No response from OpenAI");
}

#[test]
fn test_is_credential_error() {
    assert!(ProviderError::CredentialMissing("x".to_string()).is_credential_error());
    assert!(!ProviderError::Network("x".to_string()).is_credential_error());
    assert!(!ProviderError::UnknownProvider("x".to_string()).is_credential_error());
}

#[test]
fn test_is_remote() {
    assert!(ProviderError::ApiError { status: 429, message: "slow down".to_string() }.is_remote());
    assert!(ProviderError::Network("err".to_string()).is_remote());
    assert!(ProviderError::EmptyResponse("err".to_string()).is_remote());
    assert!(ProviderError::InvalidResponse("err".to_string()).is_remote());
    assert!(!ProviderError::CredentialMissing("err".to_string()).is_remote());
    assert!(!ProviderError::Configuration("err".to_string()).is_remote());
    assert!(!ProviderError::UnknownProvider("err".to_string()).is_remote());
}

#[test]
fn test_provider_error_debug() {
    let err = ProviderError::UnknownProvider("test".to_string());
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("UnknownProvider"));
}
