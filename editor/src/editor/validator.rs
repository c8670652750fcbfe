//! Schedule normalization.

use std::collections::HashSet;

use crate::editor::state::Row;

/// Normalize a row list.
///
/// Duplicate rows (equal on both indices) collapse to their first
/// occurrence. Rows that share a time slot but differ in value are all
/// kept. The survivors are stably sorted by time slot, ties keeping
/// first-occurrence order, and the first row is pinned to day-start.
///
/// Idempotent: normalizing an already-normalized list returns it unchanged.
pub fn normalize(rows: &[Row]) -> Vec<Row> {
    let mut seen = HashSet::new();
    let mut normalized: Vec<Row> = rows
        .iter()
        .copied()
        .filter(|row| seen.insert(*row))
        .collect();

    normalized.sort_by_key(|row| row.time_index);

    if let Some(first) = normalized.first_mut() {
        first.time_index = 0;
    }

    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn row(time_index: usize, value_index: usize) -> Row {
        Row {
            time_index,
            value_index,
        }
    }

    #[test]
    fn test_dedup_sort_and_pin() {
        let rows = vec![row(3, 5), row(1, 2), row(3, 5)];
        assert_eq!(normalize(&rows), vec![row(0, 2), row(3, 5)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_single_row_pinned_to_day_start() {
        assert_eq!(normalize(&[row(7, 4)]), vec![row(0, 4)]);
    }

    #[test]
    fn test_shared_slot_different_values_both_survive() {
        // Duplicate detection compares both indices, so two rows on the
        // same slot with different values are distinct.
        let rows = vec![row(2, 1), row(2, 9)];
        assert_eq!(normalize(&rows), vec![row(0, 1), row(2, 9)]);
    }

    #[test]
    fn test_tie_break_keeps_first_occurrence_order() {
        let rows = vec![row(4, 8), row(4, 3), row(1, 1)];
        assert_eq!(normalize(&rows), vec![row(0, 1), row(4, 8), row(4, 3)]);
    }

    #[test]
    fn test_idempotent_on_scenario() {
        let once = normalize(&[row(3, 5), row(1, 2), row(3, 5)]);
        assert_eq!(normalize(&once), once);
    }

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(
            (0usize..48, 0usize..300).prop_map(|(time_index, value_index)| Row {
                time_index,
                value_index,
            }),
            0..24,
        )
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(rows in arb_rows()) {
            let once = normalize(&rows);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn prop_output_sorted_and_pinned(rows in arb_rows()) {
            let normalized = normalize(&rows);
            if let Some(first) = normalized.first() {
                prop_assert_eq!(first.time_index, 0);
            }
            for pair in normalized.windows(2) {
                prop_assert!(pair[0].time_index <= pair[1].time_index);
            }
        }

        #[test]
        fn prop_output_has_no_duplicate_rows(rows in arb_rows()) {
            let normalized = normalize(&rows);
            let mut seen = std::collections::HashSet::new();
            for row in &normalized {
                prop_assert!(seen.insert(*row));
            }
        }
    }
}
