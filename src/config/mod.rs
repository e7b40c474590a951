//! Configuration module for bookmarker
//!
//! Manages display preferences for the interactive browser.
//! Configuration is stored in the user's config directory
//! (`~/.config/bookmarker/config.toml` on Linux).
//!
//! ```toml
//! [display]
//! icons = true
//! show_urls = true
//! show_hints = true
//! message_ttl_secs = 5
//! ```

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BookmarkerConfig {
    /// How entries are drawn
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Display-related settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    /// Prefix entries with folder/globe icons
    #[serde(default = "default_true")]
    pub icons: bool,

    /// Show each bookmark's URL next to its name
    #[serde(default = "default_true")]
    pub show_urls: bool,

    /// Show keybind hints at the bottom
    #[serde(default = "default_true")]
    pub show_hints: bool,

    /// Seconds before a status message disappears
    #[serde(default = "default_message_ttl_secs")]
    pub message_ttl_secs: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            icons: true,
            show_urls: true,
            show_hints: true,
            message_ttl_secs: default_message_ttl_secs(),
        }
    }
}

impl DisplaySettings {
    /// Status message lifetime
    #[must_use]
    pub const fn message_ttl(&self) -> Duration {
        Duration::from_secs(self.message_ttl_secs)
    }
}

const fn default_true() -> bool {
    true
}

const fn default_message_ttl_secs() -> u64 {
    5
}

impl BookmarkerConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("bookmarker").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::config_path()?)
    }

    /// Load the default configuration, falling back to built-in defaults
    ///
    /// Any failure is handed to `on_error` before the defaults are returned.
    pub fn load_or_default(on_error: impl FnOnce(&ConfigError)) -> Self {
        Self::load().unwrap_or_else(|e| {
            on_error(&e);
            Self::default()
        })
    }

    /// Load configuration from `path`, writing the defaults there first if it is missing
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        Self::load_from(path)
    }

    /// Load configuration from an explicit file
    ///
    /// Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file does not exist or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
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
}
