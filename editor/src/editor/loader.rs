//! Mapping of persisted profiles onto the editor grids.

use log::warn;

use crate::editor::state::Row;
use crate::models::{Profile, TimeGrid, ValueGrid};

/// Result of mapping a persisted profile onto the grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRows {
    /// Rows in persisted entry order, not yet normalized.
    pub rows: Vec<Row>,
    /// Lookups that missed the grid and fell back to index 0.
    pub snapped: usize,
}

/// Map each persisted entry to a pair of grid indices.
///
/// Lookups are exact, never nearest-match: an offset or value that is not a
/// grid candidate defaults its index to 0 instead of failing. Malformed or
/// out-of-grid persisted data therefore loads as the first slot/value; each
/// fallback is counted in `snapped` and logged, and no error is raised.
pub fn rows_from_profile(
    profile: &Profile,
    time_grid: &TimeGrid,
    value_grid: &ValueGrid,
) -> MappedRows {
    let mut snapped = 0usize;
    let rows = profile
        .entries
        .iter()
        .map(|entry| {
            let offset_seconds = entry.offset * 60;
            let time_index = match time_grid.index_of(offset_seconds) {
                Some(index) => index,
                None => {
                    warn!(
                        "offset {} min is not on the time grid, snapping to slot 0",
                        entry.offset
                    );
                    snapped += 1;
                    0
                }
            };
            let value_index = match value_grid.index_of(entry.value) {
                Some(index) => index,
                None => {
                    warn!(
                        "value {} is not a {} grid candidate, snapping to index 0",
                        entry.value,
                        value_grid.unit()
                    );
                    snapped += 1;
                    0
                }
            };
            Row {
                time_index,
                value_index,
            }
        })
        .collect();

    MappedRows { rows, snapped }
}
