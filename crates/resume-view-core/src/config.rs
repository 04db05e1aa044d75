//! Configuration
//!
//! Covers the endpoint, the initial name and the UI chrome theme. Display
//! preferences are deliberately not stored here: they reset with every
//! screen instance.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::DEFAULT_ENDPOINT;

/// Name used for the startup fetch when none is configured
pub const DEFAULT_NAME: &str = "NAME";

/// Configuration for resume-view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Resume generator endpoint
    pub endpoint: String,
    /// Name pre-filled on startup
    pub default_name: String,
    /// UI chrome theme
    #[serde(default)]
    pub theme: ThemeName,
}

/// Selectable UI chrome themes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeName {
    #[default]
    Paper,
    Ocean,
    Monochrome,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_name: DEFAULT_NAME.to_string(),
            theme: ThemeName::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("resume-view").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if not found
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save config to disk
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            std::fs::write(&path, content)?;
        }
        Ok(())
    }
}
