//! Config - Application Configuration
//!
//! Read-only settings loaded once at startup from `ui-demo.toml` in the
//! platform config directory. The app never writes this file.

use std::path::{Path, PathBuf};

use gpui::Global;
use serde::Deserialize;
use tracing::{error, info};

use crate::constants::{DEFAULT_IMAGE_URL, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::Result;
use crate::helpers::config_dir;

const CONFIG_FILE_NAME: &str = "ui-demo.toml";

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Preferred locale ("en", "zh"); system locale when unset
    pub locale: Option<String>,
    /// Image shown in the image section
    pub image_url: String,
    /// Initial window size
    pub window: WindowConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            locale: None,
            image_url: DEFAULT_IMAGE_URL.to_string(),
            window: WindowConfig::default(),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl Global for DemoConfig {}

impl DemoConfig {
    /// Path of the config file in the platform config directory
    pub fn path() -> Result<PathBuf> {
        Ok(config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Parse a config document; blank input yields defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let value = std::fs::read_to_string(path)?;
        Self::parse(&value)
    }

    /// Load from the default location, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let loaded = Self::path().and_then(|path| {
            info!(path = ?path, "Loading config file");
            Self::load_from(&path)
        });

        match loaded {
            Ok(config) => config,
            Err(e) => {
                error!(error = %e, "Failed to load config file, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_uses_defaults() {
        let config = DemoConfig::parse("  \n").expect("parse");
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.image_url, DEFAULT_IMAGE_URL);
        assert!(config.locale.is_none());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = DemoConfig::parse(
            r#"
            locale = "zh"

            [window]
            width = 600.0
            "#,
        )
        .expect("parse");

        assert_eq!(config.locale.as_deref(), Some("zh"));
        assert_eq!(config.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(config.window.width, 600.0);
        assert_eq!(config.window.height, DEFAULT_WINDOW_HEIGHT);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(DemoConfig::parse("image_url = [").is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("ui-demo-does-not-exist.toml");
        let config = DemoConfig::load_from(&path).expect("load");
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_loading_does_not_create_directories() {
        let dir = std::env::temp_dir().join("ui-demo-absent-config-dir");
        let config = DemoConfig::load_from(&dir.join(CONFIG_FILE_NAME)).expect("load");
        assert_eq!(config, DemoConfig::default());
        assert!(!dir.exists());
    }

    #[test]
    fn test_path_names_the_config_file() {
        if let Ok(path) = DemoConfig::path() {
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }
}
