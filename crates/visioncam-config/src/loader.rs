//! Configuration loader.

use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::schema::Config;

/// Environment variables that override file settings.
const ENV_HOST: &str = "HOST";
const ENV_PORT: &str = "PORT";
const ENV_AWS_REGION: &str = "AWS_REGION";
const ENV_BEDROCK_MODEL_ID: &str = "BEDROCK_MODEL_ID";
const ENV_OPENAI_API_URL: &str = "OPENAI_API_URL";
const ENV_OPENAI_MODEL: &str = "OPENAI_MODEL";
const ENV_DEPLOYMENT: &str = "VISIONCAM_ENV";

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load the file when present, fall back to defaults otherwise, then
    /// apply process environment overrides and validate.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        let mut config = match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::NotFound(_)) => Config::default(),
            Err(e) => return Err(e),
        };
        Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup. Unset or blank values leave the
    /// configured value untouched.
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = get(ENV_HOST) {
            config.server.host = host;
        }
        if let Some(port) = get(ENV_PORT) {
            config.server.port = port.trim().parse::<u16>().ok().filter(|p| *p > 0).ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: ENV_PORT.to_string(),
                    message: format!("Invalid PORT: {}. Must be between 1 and 65535.", port),
                }
            })?;
        }
        if let Some(region) = get(ENV_AWS_REGION) {
            config.providers.bedrock.region = region;
        }
        if let Some(model_id) = get(ENV_BEDROCK_MODEL_ID) {
            config.providers.bedrock.model_id = model_id;
        }
        if let Some(url) = get(ENV_OPENAI_API_URL) {
            config.providers.openai.api_url = url;
        }
        if let Some(model) = get(ENV_OPENAI_MODEL) {
            config.providers.openai.model = model;
        }
        if let Some(env) = get(ENV_DEPLOYMENT) {
            config.server.expose_error_details = !env.eq_ignore_ascii_case("production");
        }
        Ok(())
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.visioncam`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
