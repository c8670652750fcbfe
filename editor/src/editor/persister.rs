//! Conversion of edited rows back into the persisted profile format.

use chrono::{DateTime, Utc};

use crate::editor::state::Row;
use crate::models::{Profile, ProfileEntry, TimeGrid, Unit, ValueGrid};

/// Assemble a persisted profile from rows, in schedule order.
///
/// Each slot offset is resolved through a timestamp anchored at the Unix
/// epoch, so epoch time zero coincides with day-start: the formatted
/// `HH:mm:ss` string and the minute offset stay numerically consistent with
/// the grid (`offset == slot seconds / 60`).
///
/// Row indices must lie within the grids; see `ProfileEditor::can_add`.
pub fn profile_from_rows(
    rows: &[Row],
    unit: Unit,
    time_grid: &TimeGrid,
    value_grid: &ValueGrid,
) -> Profile {
    let entries = rows
        .iter()
        .map(|row| {
            let seconds = i64::from(time_grid.seconds_at(row.time_index));
            let slot_start =
                DateTime::<Utc>::from_timestamp(seconds, 0).unwrap_or(DateTime::UNIX_EPOCH);
            ProfileEntry {
                value: value_grid.value_at(row.value_index),
                offset: slot_start.timestamp() / 60,
                start: slot_start.format("%H:%M:%S").to_string(),
            }
        })
        .collect();

    Profile {
        units: unit,
        user_preferred_units: unit,
        entries,
    }
}
