//! Configuration management for the crash-map core.
//!
//! Loading and validation via figment, mirroring the FreeSkillz core:
//! TOML config file, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loader::DEFAULT_DATASET_PATH;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default config directory name.
const CONFIG_DIR_NAME: &str = "crashmap";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest
/// first):
/// 1. Environment variables (prefixed with `CRASHMAP_`)
/// 2. TOML config file at `~/.config/crashmap/config.toml`
/// 3. Default values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory for filesystem-served content.
    /// Defaults to the current directory.
    pub content_root: Option<PathBuf>,
    /// Location of the crash dataset document.
    pub dataset_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_root: None,
            dataset_path: DEFAULT_DATASET_PATH.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("CRASHMAP_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.dataset_path.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "dataset_path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the content root directory, resolving defaults if not set.
    #[must_use]
    pub fn content_root(&self) -> PathBuf {
        self.content_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.content_root.is_none());
        assert_eq!(config.dataset_path, "data/crashes.json");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_dataset_path() {
        let config = Config {
            dataset_path: "  ".to_string(),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("dataset_path"));
    }

    #[test]
    fn test_content_root_default() {
        assert_eq!(Config::default().content_root(), PathBuf::from("."));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("crashmap"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), Config::default());
    }
}
