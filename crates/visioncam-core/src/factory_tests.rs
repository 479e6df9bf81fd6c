use super::*;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use visioncam_provider_bedrock::InvokeRequest;

struct CountingRuntime {
    calls: AtomicUsize,
}

#[async_trait]
impl BedrockRuntime for CountingRuntime {
    async fn invoke_model(&self, _request: InvokeRequest) -> Result<Vec<u8>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(br#"{"content": [{"type": "text", "text": "A red mug on a table."}]}"#.to_vec())
    }
}

fn factory() -> ProviderFactory {
    ProviderFactory::new(ProvidersConfig::default())
}

#[test]
fn test_create_provider_names_match() {
    let factory = factory();
    for kind in ProviderKind::ALL {
        let provider = factory.create(kind.as_str(), None).unwrap();
        assert_eq!(provider.name(), kind.as_str());
        assert_eq!(provider.kind(), kind);
    }
}

#[test]
fn test_create_unknown_provider() {
    let result = factory().create("gemini", Some("key".to_string()));
    match result {
        Err(ProviderError::UnknownProvider(name)) => assert_eq!(name, "gemini"),
        Err(other) => panic!("Expected UnknownProvider, got {:?}", other),
        Ok(_) => panic!("Expected UnknownProvider, got a provider"),
    }
}

#[test]
fn test_supported_providers() {
    let supported = factory().supported_providers();
    assert_eq!(supported, vec![ProviderKind::OpenAI, ProviderKind::Bedrock]);
}

#[test]
fn test_is_valid_provider() {
    let factory = factory();
    assert!(factory.is_valid_provider("openai"));
    assert!(factory.is_valid_provider("bedrock"));
    assert!(!factory.is_valid_provider("gemini"));
    assert!(!factory.is_valid_provider(""));
    assert!(!factory.is_valid_provider("OpenAI"));
}

#[tokio::test]
async fn test_openai_without_credential_defers_failure() {
    let provider = factory().create_provider(ProviderKind::OpenAI, None);
    let status = provider.validate_config().await;
    assert!(!status.ok);

    let result = provider.analyze_image("QUJD", "image/jpeg", "Describe").await;
    assert!(matches!(result, Err(ProviderError::CredentialMissing(_))));
}

#[tokio::test]
async fn test_openai_receives_credential() {
    let provider = factory().create_provider(ProviderKind::OpenAI, Some("sk-test".to_string()));
    assert!(provider.validate_config().await.ok);
}

#[tokio::test]
async fn test_bedrock_uses_injected_runtime() {
    let runtime = Arc::new(CountingRuntime { calls: AtomicUsize::new(0) });
    let factory = factory().with_bedrock_runtime(runtime.clone());

    let provider = factory.create_provider(ProviderKind::Bedrock, Some("ignored".to_string()));
    let caption = provider
        .analyze_image("QUJD", "image/jpeg", "Describe")
        .await
        .unwrap();
    assert_eq!(caption, "A red mug on a table.");
    assert_eq!(runtime.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_bedrock_status_uses_configured_region() {
    let mut settings = ProvidersConfig::default();
    settings.bedrock.region = "us-east-1".to_string();
    let runtime = Arc::new(CountingRuntime { calls: AtomicUsize::new(0) });
    let factory = ProviderFactory::new(settings).with_bedrock_runtime(runtime.clone());

    let provider = factory.create_provider(ProviderKind::Bedrock, None);
    let first = provider.validate_config().await;
    let second = provider.validate_config().await;
    assert!(first.ok && second.ok);
    assert!(first.message.contains("us-east-1"));
    assert_eq!(runtime.calls.load(Ordering::SeqCst), 0);
}
