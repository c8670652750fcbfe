//! Measurement unit selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display unit for profile values.
///
/// Exactly two units exist; the candidate value grid is a pure function of
/// this enum (see `ValueGrid::for_unit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Conventional units: integer steps over [9, 540].
    Conventional,
    /// SI units: 0.1 steps over [0.5, 30].
    Si,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Conventional
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Conventional => write!(f, "conventional"),
            Unit::Si => write!(f, "si"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "conventional" => Ok(Unit::Conventional),
            "si" => Ok(Unit::Si),
            other => Err(format!("Unknown unit: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;

    #[test]
    fn test_unit_from_str() {
        assert_eq!("conventional".parse::<Unit>().unwrap(), Unit::Conventional);
        assert_eq!("SI".parse::<Unit>().unwrap(), Unit::Si);
        assert!("mol".parse::<Unit>().is_err());
    }

    #[test]
    fn test_unit_default() {
        assert_eq!(Unit::default(), Unit::Conventional);
    }

    #[test]
    fn test_unit_serde_roundtrip() {
        let json = serde_json::to_string(&Unit::Si).unwrap();
        assert_eq!(json, "\"si\"");
        let unit: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit, Unit::Si);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(Unit::Conventional.to_string(), "conventional");
        assert_eq!(Unit::Si.to_string(), "si");
    }
}
