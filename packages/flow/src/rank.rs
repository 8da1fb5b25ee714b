//! Ranking of query results for the display panel.
//!
//! Sorts counterpart records by year-over-year delta and bounds the
//! display list to the strongest movers at both ends.

use move_map_flow_models::FlowRecord;

/// Maximum number of rows in the display list.
pub const DISPLAY_LIMIT: usize = 40;

/// Rows taken from each end of the sorted list when it overflows.
pub const WINDOW: usize = 20;

/// Sorts records by delta, descending, and bounds the display list.
///
/// The sort is stable: records with equal deltas keep their input
/// order, so the output is reproducible for the same query. Lists of
/// up to [`DISPLAY_LIMIT`] records are shown whole; longer lists are
/// cut to the first [`WINDOW`] rows (largest positive deltas) followed
/// by the last [`WINDOW`] rows (largest negative deltas).
#[must_use]
pub fn rank(records: &[FlowRecord]) -> Vec<FlowRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.delta.cmp(&a.delta));

    if sorted.len() <= DISPLAY_LIMIT {
        return sorted;
    }

    let mut display = Vec::with_capacity(DISPLAY_LIMIT);
    display.extend_from_slice(&sorted[..WINDOW]);
    display.extend_from_slice(&sorted[sorted.len() - WINDOW..]);
    display
}
