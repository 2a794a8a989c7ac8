//! Application settings.
//!
//! Defaults first, then an optional TOML file in the user config dir,
//! then environment overrides. A missing settings file is not an error.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

/// Environment variable overriding the catalog file path.
pub const CATALOG_PATH_ENV: &str = "PRINTWASTE_CATALOG";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display name used in logs.
    pub app_name: String,
    /// Path to a catalog TOML file; `None` means the embedded default.
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Print Shop Waste Calculator".to_string(),
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Load settings for the current user.
    pub fn load() -> Self {
        let mut settings = Self::from_config_file().unwrap_or_default();

        if let Ok(path) = std::env::var(CATALOG_PATH_ENV) {
            if !path.is_empty() {
                settings.catalog_path = Some(PathBuf::from(path));
            }
        }

        settings
    }

    /// Read the settings file, if one exists. Malformed files are logged
    /// and ignored rather than taking the application down.
    fn from_config_file() -> Option<Self> {
        let path = Self::config_file_path()?;
        let content = std::fs::read_to_string(&path).ok()?;

        match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                Some(settings)
            }
            Err(e) => {
                warn!("Ignoring malformed settings file {:?}: {}", path, e);
                None
            }
        }
    }

    /// `<user config dir>/printwaste/settings.toml`, if a config dir exists.
    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("printwaste").join("settings.toml"))
    }
}
