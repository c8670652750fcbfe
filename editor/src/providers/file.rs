//! JSON-file profile store.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::debug;

use super::error::ProviderResult;
use super::provider::ProfileProvider;
use crate::models::{Profile, Unit};

/// Profile store persisting the profile as pretty-printed JSON.
///
/// A missing file is not an error: it loads as an empty profile, the same
/// degradation policy the editor applies to malformed grid data.
pub struct JsonFileProvider {
    path: PathBuf,
    default_unit: Unit,
}

impl JsonFileProvider {
    /// Store at `path`; a missing file loads as an empty profile in the
    /// default unit.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_unit(path, Unit::default())
    }

    /// Store at `path` with an explicit unit for the empty profile.
    pub fn with_unit<P: AsRef<Path>>(path: P, unit: Unit) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            default_unit: unit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProfileProvider for JsonFileProvider {
    async fn load_profile(&self) -> ProviderResult<Profile> {
        if !self.path.exists() {
            debug!("no profile at {}, starting empty", self.path.display());
            return Ok(Profile::empty(self.default_unit));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn save_profile(&self, profile: &Profile) -> ProviderResult<()> {
        let content = serde_json::to_string_pretty(profile)?;
        fs::write(&self.path, content)?;
        debug!("profile saved to {}", self.path.display());
        Ok(())
    }
}
