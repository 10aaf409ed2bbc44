use crate::constants::DEFAULT_CHAT_ENDPOINT;
use crate::errors::{ChatError, ChatResult};
use once_cell::sync::Lazy;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf, sync::RwLock};

pub const ENDPOINT_ENV_VAR: &str = "CHAT_WIDGET_ENDPOINT";
pub const LOG_LEVEL_ENV_VAR: &str = "CHAT_WIDGET_LOG_LEVEL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
    pub log_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            request_timeout_secs: None,
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file (writing a default one if absent), applies
/// environment overrides and installs the result as the global config.
pub fn initialize_config() -> ChatResult<()> {
    let config_path = get_config_path()?;
    let mut config = load_or_create(&config_path)?;
    apply_env_overrides(&mut config);
    install_config(config)
}

/// Validates `config` and makes it the one returned by [`get_config`].
pub fn install_config(config: Config) -> ChatResult<()> {
    validate_config(&config)?;

    *CONFIG
        .write()
        .map_err(|_| ChatError::config_error("Config lock poisoned"))? = config;

    Ok(())
}

pub fn load_or_create(config_path: &Path) -> ChatResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))
    } else {
        let config = Config::default();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ChatError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

        Ok(config)
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(endpoint) = env::var(ENDPOINT_ENV_VAR) {
        config.endpoint = endpoint;
    }
    if let Ok(level) = env::var(LOG_LEVEL_ENV_VAR) {
        config.log_level = level;
    }
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("chat-widget").join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    let url = Url::parse(&config.endpoint).map_err(|e| {
        ChatError::config_error(format!("Invalid endpoint '{}': {}", config.endpoint, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ChatError::config_error(format!(
            "Endpoint scheme must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.request_timeout_secs == Some(0) {
        return Err(ChatError::config_error(
            "request_timeout_secs must be greater than 0 when set",
        ));
    }

    if config.log_level.trim().is_empty() {
        return Err(ChatError::config_error("log_level is required"));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG
        .read()
        .map(|config| config.clone())
        .unwrap_or_default()
}
