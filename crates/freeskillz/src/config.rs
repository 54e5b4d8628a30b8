//! Configuration management for the FreeSkillz core.
//!
//! This module provides configuration loading and validation using
//! figment, supporting TOML config files, environment variables, and
//! defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "freeskillz";

/// Default profile database file name.
const DATABASE_FILE_NAME: &str = "profile.db";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest
/// first):
/// 1. Environment variables (prefixed with `FREESKILLZ_`)
/// 2. TOML config file at `~/.config/freeskillz/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Local store configuration.
    pub storage: StorageConfig,
    /// Static content configuration.
    pub content: ContentConfig,
}

/// Local-store-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the profile database file.
    /// Defaults to `~/.local/share/freeskillz/profile.db`
    pub database_path: Option<PathBuf>,
}

/// Static-content-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Root directory for filesystem-served content.
    /// Defaults to the current directory.
    pub root: Option<PathBuf>,
    /// Location of the catalog index document.
    pub catalog_index: String,
    /// Directory holding per-course detail documents.
    pub course_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: None,
            catalog_index: crate::catalog::DEFAULT_INDEX_PATH.to_string(),
            course_dir: crate::catalog::DEFAULT_COURSE_DIR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override
    /// earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `FREESKILLZ_`)
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
            .merge(Env::prefixed("FREESKILLZ_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.content.catalog_index.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "catalog_index must not be empty".to_string(),
            });
        }
        if self.content.course_dir.trim().is_empty() {
            return Err(Error::ConfigValidation {
                message: "course_dir must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Get the profile database path, resolving defaults if not set.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .database_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(DATABASE_FILE_NAME))
    }

    /// Get the content root directory, resolving defaults if not set.
    #[must_use]
    pub fn content_root(&self) -> PathBuf {
        self.content
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
