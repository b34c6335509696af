//! Configuration for the rynt CLI.
//!
//! This module handles loading, saving, and managing configuration settings
//! for the rynt application.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, RyntError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "rynt.toml";

/// Application configuration structure.
///
/// This struct represents the complete configuration for the rynt CLI,
/// including global settings and command-specific options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// File extension expected on source files.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Worker threads used when checking multiple files.
    #[serde(default = "default_thread_count")]
    pub thread_count: usize,

    /// Check-specific configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Run the statement validator after lexing.
    #[serde(default = "default_true")]
    pub validate: bool,

    /// Cap on how many diagnostics a check run prints.
    #[serde(default = "default_max_diagnostics")]
    pub max_diagnostics: usize,
}

fn default_source_extension() -> String {
    "ryn".to_string()
}

fn default_true() -> bool {
    true
}

/// Worker thread default: one per available CPU.
fn default_thread_count() -> usize {
    num_cpus::get()
}

fn default_max_diagnostics() -> usize {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            thread_count: default_thread_count(),
            check: CheckConfig::default(),
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            validate: true,
            max_diagnostics: default_max_diagnostics(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RyntError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| RyntError::Config(format!("Failed to parse configuration: {}", e)))?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| RyntError::Config(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in the current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in the home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("rynt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in the system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("rynt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            source_extension: "rn".to_string(),
            thread_count: 2,
            check: CheckConfig {
                validate: false,
                max_diagnostics: 10,
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source_extension, "ryn");
        assert!(config.thread_count >= 1);
        assert!(config.check.validate);
        assert_eq!(config.check.max_diagnostics, 100);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test_config.toml");

        let original = create_test_config();
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/config.toml"));
        assert!(matches!(result, Err(RyntError::Config(_))));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");
        std::fs::write(&config_path, "source_extension = \"rn\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.source_extension, "rn");
        assert!(config.check.validate);
        assert_eq!(config.check.max_diagnostics, 100);
    }

    #[test]
    fn test_malformed_config_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");
        std::fs::write(&config_path, "thread_count = \"many\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(RyntError::Config(_))));
    }
}
