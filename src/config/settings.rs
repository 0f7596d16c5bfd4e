//! TOML-based configuration.
//!
//! Supports a config file (univers.toml) in the working directory. Every
//! table is optional; missing values fall back to defaults.
//!
//! Example configuration:
//! ```toml
//! [limits]
//! max_classes = 500
//! max_string_len = 1024
//!
//! [server]
//! port = 4100
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::sanitize::Limits;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = "univers.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Resource caps for sanitization and matching.
    pub limits: Limits,

    /// HTTP server configuration.
    pub server: ServerSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Port to listen on.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 4100 }
    }
}

impl Settings {
    /// Load univers.toml from the working directory, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self, SettingsError> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Load settings from a specific file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}
