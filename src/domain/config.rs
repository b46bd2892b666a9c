//! Configuration types for the cleaner.
//!
//! Loaded from an optional TOML file; every field has a sensible default
//! so a missing file means a fully default configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Fleep API endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Fleep API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "https://fleep.io".to_string()
}

/// Path configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Custom data directory for downloaded exports.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

/// Complete application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Fleep API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Path configuration.
    #[serde(default)]
    pub paths: PathConfig,
}

impl AppConfig {
    /// Get the data directory, using the default if not configured.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.paths
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the default data directory path (`~/.fleep-cleaner`).
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir().map_or_else(|| PathBuf::from(".fleep-cleaner"), |h| h.join(".fleep-cleaner"))
    }

    /// Get the configuration file path.
    #[must_use]
    pub fn config_file_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "https://fleep.io");
        assert!(config.paths.data_dir.is_none());
    }

    #[test]
    fn test_data_dir_override() {
        let config = AppConfig {
            paths: PathConfig {
                data_dir: Some(PathBuf::from("/tmp/exports")),
            },
            ..Default::default()
        };
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/exports"));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("[paths]\ndata_dir = \"/x\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://fleep.io");
        assert_eq!(config.data_dir(), PathBuf::from("/x"));
    }
}
