//! In-memory profile store.
//!
//! Suitable for unit tests and local development: data lives in process
//! memory, giving fast, deterministic, isolated execution.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::ProviderResult;
use super::provider::ProfileProvider;
use crate::models::{Profile, Unit};

/// In-memory profile store.
///
/// Clones share the same underlying data, which lets a test keep a handle
/// for inspection while the editor owns another.
#[derive(Clone)]
pub struct LocalProvider {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    profile: Option<Profile>,
    default_unit: Unit,
    save_count: usize,
}

impl LocalProvider {
    /// Create an empty store; loads resolve to an empty profile.
    pub fn new() -> Self {
        Self::with_unit(Unit::default())
    }

    /// Create an empty store whose empty profile uses `unit`.
    pub fn with_unit(unit: Unit) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                profile: None,
                default_unit: unit,
                save_count: 0,
            })),
        }
    }

    /// Seed the stored profile.
    pub fn set_profile(&self, profile: Profile) {
        self.data.write().profile = Some(profile);
    }

    /// Last stored profile, if any.
    pub fn saved_profile(&self) -> Option<Profile> {
        self.data.read().profile.clone()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.data.read().save_count
    }

    /// Clear all data from the store.
    pub fn clear(&self) {
        let mut data = self.data.write();
        data.profile = None;
        data.save_count = 0;
    }
}

impl Default for LocalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileProvider for LocalProvider {
    async fn load_profile(&self) -> ProviderResult<Profile> {
        let data = self.data.read();
        Ok(data
            .profile
            .clone()
            .unwrap_or_else(|| Profile::empty(data.default_unit)))
    }

    async fn save_profile(&self, profile: &Profile) -> ProviderResult<()> {
        let mut data = self.data.write();
        data.profile = Some(profile.clone());
        data.save_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfileEntry;

    #[tokio::test]
    async fn test_empty_store_loads_empty_profile() {
        let provider = LocalProvider::with_unit(Unit::Si);
        let profile = provider.load_profile().await.unwrap();
        assert_eq!(profile.units, Unit::Si);
        assert!(profile.entries.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let provider = LocalProvider::new();
        let mut profile = Profile::empty(Unit::Conventional);
        profile.entries = vec![ProfileEntry {
            value: 14.0,
            offset: 90,
            start: "01:30:00".to_string(),
        }];

        provider.save_profile(&profile).await.unwrap();
        assert_eq!(provider.save_count(), 1);
        assert_eq!(provider.load_profile().await.unwrap(), profile);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let provider = LocalProvider::new();
        let observer = provider.clone();

        provider
            .save_profile(&Profile::empty(Unit::Conventional))
            .await
            .unwrap();
        assert_eq!(observer.save_count(), 1);

        observer.clear();
        assert!(provider.saved_profile().is_none());
    }
}
