//! Profile store configuration file support.
//!
//! Utilities for reading store configuration from TOML files.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ProviderError;
use super::factory::ProviderType;

/// Store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Store type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

/// File store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(StoreConfig)` if successful
    /// * `Err(ProviderError)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            ProviderError::configuration(format!("Failed to read config file: {}", e))
        })?;

        toml::from_str(&content).map_err(|e| {
            ProviderError::configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load store configuration from the default location.
    ///
    /// Searches for `profile_store.toml` in the current directory, then the
    /// parent directory.
    pub fn from_default_location() -> Result<Self, ProviderError> {
        let search_paths = [
            PathBuf::from("profile_store.toml"),
            PathBuf::from("../profile_store.toml"),
        ];

        for path in &search_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        Err(ProviderError::configuration(
            "No profile_store.toml found in standard locations",
        ))
    }

    /// Parse the configured store type.
    pub fn store_type(&self) -> Result<ProviderType, String> {
        ProviderType::from_str(&self.store.store_type)
    }

    /// Configured profile path, when present.
    pub fn profile_path(&self) -> Option<PathBuf> {
        if self.file.path.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.file.path))
        }
    }
}
