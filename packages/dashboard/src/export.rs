//! Export rows for the spreadsheet collaborator.
//!
//! The export collaborator serializes whatever list is currently
//! displayed; these rows are built from the focus's ranked list with
//! no additional filtering, so the file always matches the screen.

use move_map_flow_models::RankedEntry;
use serde::{Deserialize, Serialize};

use crate::view::RegionFocus;

/// One flat row of the exported display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    /// Counterpart admin code.
    pub code: String,
    /// Counterpart display name.
    pub name: String,
    /// People moved.
    pub value: u64,
    /// Households moved.
    pub household_count: u64,
    /// Year-over-year change.
    pub delta: i64,
}

impl From<&RankedEntry> for ExportRow {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            code: entry.code.clone(),
            name: entry.name.clone(),
            value: entry.value,
            household_count: entry.household_count,
            delta: entry.delta,
        }
    }
}

/// The current display list as flat export rows, in display order.
#[must_use]
pub fn export_rows(focus: &RegionFocus) -> Vec<ExportRow> {
    focus.ranked.iter().map(ExportRow::from).collect()
}

#[cfg(test)]
mod tests {
    use move_map_flow_models::Direction;

    use super::*;

    fn entry(code: &str, delta: i64) -> RankedEntry {
        RankedEntry {
            code: code.to_string(),
            name: format!("Region {code}"),
            value: 12,
            household_count: 5,
            delta,
            estimated: false,
        }
    }

    #[test]
    fn rows_mirror_the_ranked_list_exactly() {
        let focus = RegionFocus {
            census_code: "31570".to_string(),
            admin_code: "41820".to_string(),
            display_name: "Gyeonggi-do Yangpyeong-gun".to_string(),
            direction: Direction::In,
            total_value: 24,
            total_households: 10,
            average_per_household: Some(2.4),
            net_migration: 3,
            ranked: vec![entry("11010", 9), entry("21010", -2)],
            tooltip: String::new(),
        };

        let rows = export_rows(&focus);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "11010");
        assert_eq!(rows[0].delta, 9);
        assert_eq!(rows[1].name, "Region 21010");
        assert_eq!(rows[1].household_count, 5);
    }
}
