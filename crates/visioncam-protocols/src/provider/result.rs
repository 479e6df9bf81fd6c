//! Provider outcome types.

use serde::{Deserialize, Serialize};

use super::ProviderKind;

/// Text returned by a provider for one analyze or ask call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResult {
    pub provider: ProviderKind,
    pub text: String,
}

impl ProviderResult {
    pub fn new(provider: ProviderKind, text: impl Into<String>) -> Self {
        Self {
            provider,
            text: text.into(),
        }
    }
}

/// Outcome of a local, non-billing configuration check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigStatus {
    pub ok: bool,
    pub message: String,
}

impl ConfigStatus {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_status_constructors() {
        let ok = ConfigStatus::ok("ready");
        assert!(ok.ok);
        assert_eq!(ok.message, "ready");

        let failed = ConfigStatus::failed("missing key");
        assert!(!failed.ok);
    }

    #[test]
    fn test_config_status_serialize() {
        let json = serde_json::to_value(ConfigStatus::ok("fine")).unwrap();
        assert_eq!(json, serde_json::json!({"ok": true, "message": "fine"}));
    }

    #[test]
    fn test_provider_result_new() {
        let result = ProviderResult::new(ProviderKind::Bedrock, "A red mug.");
        assert_eq!(result.provider, ProviderKind::Bedrock);
        assert_eq!(result.text, "A red mug.");
    }
}
