//! Configuration loading: defaults, then JSON file, then environment.

use std::fs;
use std::path::{Path, PathBuf};

use groundsearch_types::{AppConfig, ConfigError};
use validator::Validate;

const CONFIG_DIR: &str = "groundsearch";
const CONFIG_FILE: &str = "config.json";

pub const ENV_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_MODEL: &str = "GROUNDSEARCH_MODEL";
pub const ENV_UPSTREAM_URL: &str = "GROUNDSEARCH_UPSTREAM_URL";
pub const ENV_HOST: &str = "GROUNDSEARCH_HOST";
pub const ENV_PORT: &str = "GROUNDSEARCH_PORT";

/// Default config file location, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load and validate configuration.
///
/// An explicit `path` must exist; the default location may be absent.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => match default_config_path() {
            Some(default) if default.exists() => read_config_file(&default)?,
            _ => AppConfig::default(),
        },
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

pub fn read_config_file(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound { path: path.display().to_string() });
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::from_io_error(&e))?;
    let config: AppConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::from_json_error(&e))?;

    tracing::info!("[Config] Loaded {}", path.display());
    Ok(config)
}

/// Apply environment overrides through `lookup`.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let lookup = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    if let Some(api_key) = lookup(ENV_API_KEY) {
        config.model.api_key = api_key;
    }
    if let Some(model) = lookup(ENV_MODEL) {
        config.model.model = model;
    }
    if let Some(raw) = lookup(ENV_UPSTREAM_URL) {
        let url = raw.trim_end_matches('/').to_string();
        if url::Url::parse(&url).is_ok() {
            tracing::info!("[Config] Using custom upstream URL");
            config.model.base_url = url;
        } else {
            tracing::warn!(
                "{} is not a valid URL, using {}",
                ENV_UPSTREAM_URL,
                config.model.base_url
            );
        }
    }
    if let Some(host) = lookup(ENV_HOST) {
        config.server.host = host;
    }
    if let Some(raw) = lookup(ENV_PORT) {
        match raw.parse::<u16>() {
            Ok(port) => config.server.port = port,
            Err(_) => tracing::warn!("{} is not a valid port: {}", ENV_PORT, raw),
        }
    }
}

pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    config.validate().map_err(|errors| {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|k| k.to_string())
            .or_else(|| errors.errors().keys().next().map(|k| k.to_string()))
            .unwrap_or_else(|| "config".to_string());
        ConfigError::ValidationError { field, message: errors.to_string() }
    })
}

/// The server cannot start without a model API key.
pub fn require_api_key(config: &AppConfig) -> Result<(), ConfigError> {
    if config.model.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError {
            field: "model.api_key".to_string(),
            message: format!("set {} or model.api_key in the config file", ENV_API_KEY),
        });
    }
    Ok(())
}
