//! Persisted profile representation exchanged with the profile provider.

use serde::{Deserialize, Serialize};

use crate::models::units::Unit;

/// One persisted profile entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileEntry {
    /// Measured value in the profile's units.
    pub value: f64,
    /// Offset from day-start in minutes.
    pub offset: i64,
    /// Wall-clock start time, formatted `HH:mm:ss`.
    pub start: String,
}

/// Persisted daily profile.
///
/// Entries are kept in the order they were produced; consumers that need
/// slot ordering normalize before use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub units: Unit,
    pub user_preferred_units: Unit,
    pub entries: Vec<ProfileEntry>,
}

impl Profile {
    /// Empty profile in the given unit.
    pub fn empty(unit: Unit) -> Self {
        Self {
            units: unit,
            user_preferred_units: unit,
            entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = Profile::empty(Unit::Si);
        assert_eq!(profile.units, Unit::Si);
        assert_eq!(profile.user_preferred_units, Unit::Si);
        assert!(profile.entries.is_empty());
    }

    #[test]
    fn test_profile_serde_roundtrip() {
        let profile = Profile {
            units: Unit::Conventional,
            user_preferred_units: Unit::Conventional,
            entries: vec![
                ProfileEntry {
                    value: 14.0,
                    offset: 0,
                    start: "00:00:00".to_string(),
                },
                ProfileEntry {
                    value: 25.0,
                    offset: 90,
                    start: "01:30:00".to_string(),
                },
            ],
        };

        let json = serde_json::to_string(&profile).unwrap();
        let parsed: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_si_values_serialize_as_exact_decimals() {
        let entry = ProfileEntry {
            value: 6.0 / 10.0,
            offset: 30,
            start: "00:30:00".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"value\":0.6"), "got {}", json);
    }

    #[test]
    fn test_profile_deserializes_known_document() {
        let json = r#"{
            "units": "si",
            "user_preferred_units": "si",
            "entries": [
                { "value": 0.6, "offset": 90, "start": "01:30:00" }
            ]
        }"#;

        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.units, Unit::Si);
        assert_eq!(profile.entries.len(), 1);
        assert_eq!(profile.entries[0].offset, 90);
        assert_eq!(profile.entries[0].start, "01:30:00");
    }
}
