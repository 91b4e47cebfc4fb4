use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/quotecraft/config.toml` on Linux, or the equivalent
    /// via `dirs::config_dir()`. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("quotecraft").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The endpoint is an absolute http or https URL
    /// - Timeouts and durations are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = &self.service.endpoint;
        let url = Url::parse(endpoint).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid service endpoint '{}': {}", endpoint, e),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Service endpoint '{}' must use http or https",
                    endpoint
                ),
            });
        }

        if self.service.request_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "service.request_timeout_seconds must be greater than 0".to_string(),
            });
        }
        if self.service.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "service.connect_timeout_seconds must be greater than 0".to_string(),
            });
        }
        if self.ui.transition_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.transition_ms must be greater than 0".to_string(),
            });
        }
        if self.ui.tick_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
