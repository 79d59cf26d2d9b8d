//! Configuration manager for loading application configuration
//!
//! Looks up `config.json` in the Gopher config directory. The directory is
//! the first of `GOPHER_CONFIG_DIR`, `%APPDATA%\Gopher`,
//! `$XDG_CONFIG_HOME/gopher`, `$HOME/.config/gopher`, or the working
//! directory.

use crate::config::models::AppConfig;
use crate::error::{GopherError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the configuration file inside the config directory
const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration manager
pub struct ConfigManager;

impl ConfigManager {
    /// Get the Gopher config directory from the process environment
    pub fn get_config_dir() -> PathBuf {
        Self::config_dir_from(|key| std::env::var(key).ok())
    }

    /// Resolve the config directory through an environment lookup
    pub fn config_dir_from(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());

        if let Some(dir) = non_empty("GOPHER_CONFIG_DIR") {
            return PathBuf::from(dir);
        }
        if let Some(appdata) = non_empty("APPDATA") {
            return PathBuf::from(appdata).join("Gopher");
        }
        if let Some(xdg) = non_empty("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("gopher");
        }
        if let Some(home) = non_empty("HOME") {
            return PathBuf::from(home).join(".config").join("gopher");
        }
        PathBuf::from(".")
    }

    /// Get the path to the configuration file
    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join(CONFIG_FILE_NAME)
    }

    /// Load configuration from the default location
    ///
    /// If the configuration file doesn't exist or is corrupt, returns default configuration.
    pub fn load() -> Result<AppConfig> {
        Self::load_from(&Self::get_config_path())
    }

    /// Load configuration from `config_path`
    ///
    /// A configuration whose image list is empty is rejected, since the
    /// image cycler needs at least one reference.
    pub fn load_from(config_path: &Path) -> Result<AppConfig> {
        if !config_path.exists() {
            info!(
                "Configuration file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(AppConfig::default());
        }

        // Invalid UTF-8 falls through to the parse-failure branch below
        let json = std::fs::read(config_path)?;

        let mut config = match serde_json::from_slice::<AppConfig>(&json) {
            Ok(config) => {
                info!("Configuration loaded from {}", config_path.display());
                config
            }
            Err(e) => {
                warn!("Failed to parse configuration, using defaults: {}", e);
                return Ok(AppConfig::default());
            }
        };

        if config.images.is_empty() {
            return Err(GopherError::ConfigError(Box::new(
                GopherError::EmptyImageList,
            )));
        }

        if config.layout.padding < 0.0 {
            warn!(
                "Layout padding {} is negative, using 0",
                config.layout.padding
            );
            config.layout.padding = 0.0;
        }

        Ok(config)
    }
}
