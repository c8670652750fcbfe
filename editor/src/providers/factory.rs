//! Provider construction and configuration.
//!
//! Selects and builds a profile store backend from runtime configuration,
//! either environment variables or a TOML file.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use super::error::{ProviderError, ProviderResult};
#[cfg(feature = "file-store")]
use super::file::JsonFileProvider;
#[cfg(feature = "local-store")]
use super::local::LocalProvider;
use super::provider::{ProfileProvider, SettingsProvider, StaticSettings};
use super::store_config::StoreConfig;

/// Profile store backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderType {
    /// In-memory store
    Local,
    /// JSON-file store
    File,
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "file" | "json" => Ok(Self::File),
            other => Err(format!("Unknown profile store type: {}", other)),
        }
    }
}

impl ProviderType {
    /// Get the store type from environment variables.
    ///
    /// Reads `PROFILE_STORE`. Defaults to File when `PROFILE_PATH` is set,
    /// otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("PROFILE_STORE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("PROFILE_PATH").is_ok() {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Factory for profile store instances.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a store of the requested type.
    ///
    /// # Arguments
    /// * `provider_type` - Backend to create
    /// * `path` - Profile file location (required for the file store)
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ProfileProvider>)` - Store instance
    /// * `Err(ProviderError)` - If the backend is unavailable or
    ///   misconfigured
    pub fn create(
        provider_type: ProviderType,
        path: Option<&Path>,
    ) -> ProviderResult<Arc<dyn ProfileProvider>> {
        match provider_type {
            ProviderType::Local => {
                #[cfg(feature = "local-store")]
                {
                    let _ = path;
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-store"))]
                {
                    let _ = path;
                    Err(ProviderError::configuration(
                        "Local store feature not enabled",
                    ))
                }
            }
            ProviderType::File => {
                #[cfg(feature = "file-store")]
                {
                    let path = path.ok_or_else(|| {
                        ProviderError::configuration("File store requires a profile path")
                    })?;
                    Ok(Arc::new(JsonFileProvider::new(path)))
                }
                #[cfg(not(feature = "file-store"))]
                {
                    let _ = path;
                    Err(ProviderError::configuration(
                        "File store feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create an in-memory store.
    #[cfg(feature = "local-store")]
    pub fn create_local() -> Arc<dyn ProfileProvider> {
        Arc::new(LocalProvider::new())
    }

    /// Create a store from environment configuration
    /// (`PROFILE_STORE`, `PROFILE_PATH`).
    pub fn from_env() -> ProviderResult<Arc<dyn ProfileProvider>> {
        let provider_type = ProviderType::from_env();
        let path = std::env::var("PROFILE_PATH").ok().map(PathBuf::from);
        Self::create(provider_type, path.as_deref())
    }

    /// Create a store from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(path: P) -> ProviderResult<Arc<dyn ProfileProvider>> {
        let config = StoreConfig::from_file(path)?;
        Self::from_store_config(&config)
    }

    /// Create a store from the default configuration file location.
    pub fn from_default_config() -> ProviderResult<Arc<dyn ProfileProvider>> {
        let config = StoreConfig::from_default_location()?;
        Self::from_store_config(&config)
    }

    fn from_store_config(config: &StoreConfig) -> ProviderResult<Arc<dyn ProfileProvider>> {
        let provider_type = config.store_type().map_err(ProviderError::configuration)?;
        Self::create(provider_type, config.profile_path().as_deref())
    }

    /// Settings provider reading the active unit from `PROFILE_UNIT`.
    pub fn settings_from_env() -> Arc<dyn SettingsProvider> {
        Arc::new(StaticSettings::from_env())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_type_from_str() {
        assert_eq!(ProviderType::from_str("local").unwrap(), ProviderType::Local);
        assert_eq!(
            ProviderType::from_str("memory").unwrap(),
            ProviderType::Local
        );
        assert_eq!(ProviderType::from_str("File").unwrap(), ProviderType::File);
        assert_eq!(ProviderType::from_str("json").unwrap(), ProviderType::File);
        assert!(ProviderType::from_str("postgres").is_err());
    }

    #[cfg(feature = "local-store")]
    #[tokio::test]
    async fn test_create_local_store() {
        let store = ProviderFactory::create(ProviderType::Local, None).unwrap();
        let profile = store.load_profile().await.unwrap();
        assert!(profile.entries.is_empty());
    }

    #[cfg(feature = "file-store")]
    #[test]
    fn test_file_store_requires_path() {
        let result = ProviderFactory::create(ProviderType::File, None);
        assert!(result.is_err());
    }

    #[cfg(feature = "file-store")]
    #[tokio::test]
    async fn test_create_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let store = ProviderFactory::create(ProviderType::File, Some(&path)).unwrap();
        let profile = store.load_profile().await.unwrap();
        assert!(profile.entries.is_empty());
    }
}
