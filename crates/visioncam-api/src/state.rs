//! Application state.

use std::sync::Arc;

use visioncam_config::{Config, ServerConfig};
use visioncam_core::{ImageSession, ProviderFactory};

/// Application state shared across handlers.
pub struct AppState {
    pub session: Arc<ImageSession>,
    pub factory: Arc<ProviderFactory>,
    /// Show provider failure text to callers instead of a generic message.
    pub expose_error_details: bool,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(factory: ProviderFactory, server: &ServerConfig) -> Self {
        Self {
            session: Arc::new(ImageSession::new()),
            factory: Arc::new(factory),
            expose_error_details: server.expose_error_details,
            max_upload_bytes: server.max_upload_bytes,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(ProviderFactory::new(config.providers.clone()), &config.server)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert!(state.session.is_empty());
        assert!(state.expose_error_details);
        assert_eq!(state.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_app_state_from_config() {
        let mut config = Config::default();
        config.server.expose_error_details = false;
        config.server.max_upload_bytes = 1024;
        config.providers.bedrock.region = "us-west-2".to_string();

        let state = AppState::from_config(&config);
        assert!(!state.expose_error_details);
        assert_eq!(state.max_upload_bytes, 1024);
        assert_eq!(state.factory.settings().bedrock.region, "us-west-2");
    }
}
