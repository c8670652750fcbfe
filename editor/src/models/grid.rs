//! Discrete selection grids for the editor.
//!
//! `TimeGrid` covers one 24-hour day in 30-minute slots; `ValueGrid` holds
//! the candidate values for the active unit. Both are derived, stateless
//! values: the time grid never changes, the value grid is rebuilt whenever
//! the active unit changes.

use crate::models::units::Unit;

/// Seconds in one day.
pub const DAY_SECONDS: u32 = 86_400;

/// Width of one time slot in seconds (30 minutes).
pub const SLOT_SECONDS: u32 = 1_800;

/// Fixed grid of time offsets, in seconds from day-start.
///
/// Strictly increasing, first element 0, one entry per 30-minute slot of
/// the day (48 in total).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    slots: Vec<u32>,
}

impl TimeGrid {
    /// Build the daily grid.
    pub fn daily() -> Self {
        Self {
            slots: (0..DAY_SECONDS).step_by(SLOT_SECONDS as usize).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the last selectable slot.
    pub fn last_index(&self) -> usize {
        self.slots.len() - 1
    }

    /// Offset in seconds for a slot index.
    ///
    /// The index must lie within the grid.
    pub fn seconds_at(&self, index: usize) -> u32 {
        self.slots[index]
    }

    /// Exact-match lookup of an offset.
    ///
    /// Returns `None` when the offset is not a slot boundary; callers decide
    /// how to degrade.
    pub fn index_of(&self, seconds: i64) -> Option<usize> {
        self.slots.iter().position(|&s| i64::from(s) == seconds)
    }
}

/// Candidate values selectable for the active unit.
///
/// Strictly increasing. Elements are produced by integer arithmetic so that
/// each one is the f64 closest to its decimal form; exact-match lookup and
/// exact JSON emission both rely on this construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGrid {
    unit: Unit,
    values: Vec<f64>,
}

impl ValueGrid {
    /// Candidate values for a unit.
    pub fn for_unit(unit: Unit) -> Self {
        let values = match unit {
            Unit::Conventional => (9..=540).map(|v| v as f64).collect(),
            Unit::Si => (5..=300).map(|tenths| tenths as f64 / 10.0).collect(),
        };
        Self { unit, values }
    }

    /// Unit this grid was built for.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Candidate value for an index.
    ///
    /// The index must lie within the grid.
    pub fn value_at(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Exact-match lookup of a value.
    ///
    /// Returns `None` when the value is not a grid candidate; callers decide
    /// how to degrade.
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }
}
