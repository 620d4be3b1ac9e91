//! Configuration module for selectr
//!
//! Manages the resource server connection and browsing defaults.
//! Configuration is stored in the user's config directory and can be
//! overridden with `SELECTR_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default API root of a local resource server
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default number of children listed per location
pub const DEFAULT_PAGE_LIMIT: usize = 50;

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

const fn default_page_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SelectrConfig {
    /// API root URL of the resource server
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Authentication token sent with every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Folder id used as the root of output selections
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_folder: Option<String>,

    /// Folder id used as the browsing root instead of the current user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_folder: Option<String>,

    /// Children listed per location
    #[serde(default = "default_page_limit")]
    pub page_limit: usize,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for SelectrConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            task_folder: None,
            root_folder: None,
            page_limit: DEFAULT_PAGE_LIMIT,
            log_level: default_log_level(),
        }
    }
}

impl SelectrConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("selectr").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// Returns `None` when no config file exists yet, so the caller can
    /// decide whether to run the first-time setup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return Ok(None);
        }
        Self::load_from(&config_path).map(Some)
    }

    /// Load configuration from a specific file, applying environment overrides
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix("SELECTR"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined
    /// or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Set the API root URL
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the URL is not http(s) or saving fails.
    pub fn set_api_url(&mut self, url: String) -> Result<(), ConfigError> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Message(format!(
                "API URL '{url}' must start with http:// or https://"
            )));
        }
        self.api_url = url;
        self.save()
    }

    /// Set or clear the authentication token
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if saving the configuration fails.
    pub fn set_token(&mut self, token: Option<String>) -> Result<(), ConfigError> {
        self.token = token.filter(|t| !t.is_empty());
        self.save()
    }
}
