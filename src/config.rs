//! Dashboard configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::settings::DEFAULT_COLLECTION_URL;

/// Configuration for the dashboard core.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct TablarConfig {
    /// Directory the key-value storage files live in.
    #[serde(default = "default_storage_dir")]
    storage_dir: PathBuf,

    /// Image-collection endpoint the background URL is resolved from.
    #[serde(default = "default_collection_url")]
    collection_background_url: String,

    /// Countdown timer length in seconds.
    #[serde(default = "default_timer_secs")]
    timer_total_secs: u64,
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from(".tablar")
}

fn default_collection_url() -> String {
    DEFAULT_COLLECTION_URL.to_string()
}

fn default_timer_secs() -> u64 {
    30
}

impl TablarConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(storage_dir = %config.storage_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

impl Default for TablarConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            collection_background_url: default_collection_url(),
            timer_total_secs: default_timer_secs(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
