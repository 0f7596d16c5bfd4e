//! Configuration module for the univers CLI and server.

mod settings;

pub use settings::{ServerSettings, Settings, SettingsError, CONFIG_FILE};
