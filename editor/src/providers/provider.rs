//! Collaborator contracts for settings and persisted profiles.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::error::ProviderResult;
use crate::models::{Profile, Unit};

/// Read-only access to the active measurement unit.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; the editor task holds them across
/// await points.
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// The unit currently selected in the user's settings.
    async fn active_unit(&self) -> ProviderResult<Unit>;
}

/// Load and store the persisted daily profile.
///
/// Saving is fire-and-forget from the editor's perspective: the editor logs
/// a failed save and moves on; user-facing failure reporting is the
/// provider's responsibility.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Load the persisted profile.
    async fn load_profile(&self) -> ProviderResult<Profile>;

    /// Persist a new profile, replacing the previous one.
    async fn save_profile(&self, profile: &Profile) -> ProviderResult<()>;
}

/// Settings provider backed by a plain in-process value.
pub struct StaticSettings {
    unit: RwLock<Unit>,
}

impl StaticSettings {
    pub fn new(unit: Unit) -> Self {
        Self {
            unit: RwLock::new(unit),
        }
    }

    /// Read the unit from `PROFILE_UNIT`, defaulting to conventional units.
    pub fn from_env() -> Self {
        let unit = std::env::var("PROFILE_UNIT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();
        Self::new(unit)
    }

    /// Change the unit returned to future callers.
    pub fn set_unit(&self, unit: Unit) {
        *self.unit.write() = unit;
    }
}

#[async_trait]
impl SettingsProvider for StaticSettings {
    async fn active_unit(&self) -> ProviderResult<Unit> {
        Ok(*self.unit.read())
    }
}
