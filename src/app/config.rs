//! Application configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;

/// Default settings file looked up next to the invocation.
pub const DEFAULT_SETTINGS_FILE: &str = "crowdfunding.toml";

/// Settings parsed from the TOML configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Error log settings.
    pub log: LogSettings,
}

/// `[log]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Directory the error log file is written into.
    pub path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings { log: LogSettings::default() }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings { path: PathBuf::from("logs") }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults; a file that exists but does not
    /// parse is a fatal configuration error.
    pub fn load(path: &Path) -> Result<Settings, AppError> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            AppError::Configuration(format!("Malformed settings file {}: {}", path.display(), e))
        })
    }
}
