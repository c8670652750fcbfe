//! Editor state: the owned row list and its mutation surface.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::editor::{loader, persister, validator};
use crate::models::{Profile, TimeGrid, Unit, ValueGrid};

/// One schedule row, expressed as a pair of grid indices.
///
/// Equality covers both indices; this is also the key used when duplicate
/// rows collapse during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Row {
    /// Index into the time grid.
    pub time_index: usize,
    /// Index into the value grid.
    pub value_index: usize,
}

/// In-memory editor for one daily time-value profile.
///
/// The editor owns its row list exclusively: the list is populated once
/// from a persisted profile, mutated through the operations below, and read
/// (never retained) when a profile is assembled for saving.
pub struct ProfileEditor {
    unit: Unit,
    time_grid: TimeGrid,
    value_grid: ValueGrid,
    rows: Vec<Row>,
    snapped: usize,
}

impl ProfileEditor {
    /// Create an empty editor for the given unit.
    pub fn new(unit: Unit) -> Self {
        Self {
            unit,
            time_grid: TimeGrid::daily(),
            value_grid: ValueGrid::for_unit(unit),
            rows: Vec::new(),
            snapped: 0,
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn time_grid(&self) -> &TimeGrid {
        &self.time_grid
    }

    pub fn value_grid(&self) -> &ValueGrid {
        &self.value_grid
    }

    /// Current rows, in editing order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Grid lookups that fell back to index 0 during the last load.
    pub fn snapped_lookups(&self) -> usize {
        self.snapped
    }

    /// Switch the active unit, rebuilding the value grid.
    ///
    /// Row indices are not translated; they select into the new grid.
    pub fn set_unit(&mut self, unit: Unit) {
        if self.unit != unit {
            self.unit = unit;
            self.value_grid = ValueGrid::for_unit(unit);
        }
    }

    /// Replace the row list from a persisted profile.
    ///
    /// Entry order is preserved; normalization is a separate, explicit step.
    pub fn load(&mut self, profile: &Profile) {
        let mapped = loader::rows_from_profile(profile, &self.time_grid, &self.value_grid);
        self.snapped = mapped.snapped;
        self.rows = mapped.rows;
    }

    /// Whether another row fits on the time grid.
    ///
    /// True for an empty schedule; false once the last row sits on the final
    /// slot.
    pub fn can_add(&self) -> bool {
        match self.rows.last() {
            Some(last) => last.time_index < self.time_grid.len() - 1,
            None => true,
        }
    }

    /// Append the next row, carrying the previous value forward.
    ///
    /// An empty schedule gains `{0, 0}`; otherwise the new row advances one
    /// time slot and keeps the last row's value. Returns `false` (and
    /// appends nothing) when the grid has no room left.
    pub fn add(&mut self) -> bool {
        if !self.can_add() {
            return false;
        }
        self.add_unchecked();
        true
    }

    /// Unguarded append.
    ///
    /// When the last row already sits on the final slot, this produces a
    /// `time_index` one past the grid; callers are responsible for checking
    /// [`Self::can_add`] first.
    pub fn add_unchecked(&mut self) {
        let row = match self.rows.last() {
            Some(last) => Row {
                time_index: last.time_index + 1,
                value_index: last.value_index,
            },
            None => Row {
                time_index: 0,
                value_index: 0,
            },
        };
        self.rows.push(row);
    }

    /// Overwrite the row at `index`. Returns `false` when out of range.
    pub fn set_row(&mut self, index: usize, row: Row) -> bool {
        match self.rows.get_mut(index) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Remove and return the row at `index`, if present.
    pub fn remove_row(&mut self, index: usize) -> Option<Row> {
        if index < self.rows.len() {
            Some(self.rows.remove(index))
        } else {
            None
        }
    }

    /// Normalize the row list: collapse duplicates, order by time slot, and
    /// pin the first row to day-start.
    pub fn validate(&mut self) {
        self.rows = validator::normalize(&self.rows);
        debug!("schedule normalized to {} rows", self.rows.len());
    }

    /// Assemble a persisted profile from the current rows.
    pub fn to_profile(&self) -> Profile {
        persister::profile_from_rows(&self.rows, self.unit, &self.time_grid, &self.value_grid)
    }
}
