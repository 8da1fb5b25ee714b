//! The in-memory flow matrix and its query engine.
//!
//! Constructed once from the parsed wire document, read-only after.
//! Absence of an origin, direction, or destination means zero flow,
//! never an error.

use std::collections::BTreeMap;

use move_map_flow_models::{Direction, FlowRecord, FlowSummary};

use crate::wire::{WireCell, WireMatrix};

/// One stored origin-destination cell.
#[derive(Debug, Clone)]
struct Cell {
    value: u64,
    household_count: u64,
    delta: i64,
    estimated: bool,
}

impl From<WireCell> for Cell {
    fn from(wire: WireCell) -> Self {
        Self {
            value: wire.val,
            household_count: wire.hh_cnt,
            delta: wire.diff,
            estimated: wire.est,
        }
    }
}

/// Both direction maps for one origin, keyed by counterpart admin code.
#[derive(Debug, Clone, Default)]
struct DirectionalFlows {
    inflow: BTreeMap<String, Cell>,
    outflow: BTreeMap<String, Cell>,
}

impl DirectionalFlows {
    const fn get(&self, direction: Direction) -> &BTreeMap<String, Cell> {
        match direction {
            Direction::In => &self.inflow,
            Direction::Out => &self.outflow,
        }
    }
}

/// The full origin-direction-destination movement matrix.
#[derive(Debug, Clone, Default)]
pub struct FlowStore {
    matrix: BTreeMap<String, DirectionalFlows>,
}

impl FlowStore {
    /// Builds the store from a parsed wire document.
    #[must_use]
    pub fn from_wire(wire: WireMatrix) -> Self {
        let matrix = wire
            .into_iter()
            .map(|(origin, directions)| {
                let flows = DirectionalFlows {
                    inflow: directions
                        .inflow
                        .into_iter()
                        .map(|(dest, cell)| (dest, Cell::from(cell)))
                        .collect(),
                    outflow: directions
                        .outflow
                        .into_iter()
                        .map(|(dest, cell)| (dest, Cell::from(cell)))
                        .collect(),
                };
                (origin, flows)
            })
            .collect();

        Self { matrix }
    }

    /// Queries all flows for one origin and direction.
    ///
    /// An origin absent from the matrix, or an empty direction map,
    /// yields the empty summary with zero totals; this is a legitimate
    /// "no data" state, not a failure. Records come back in counterpart
    /// code order, so repeated queries are reproducible.
    #[must_use]
    pub fn query(&self, origin_admin: &str, direction: Direction) -> FlowSummary {
        let Some(flows) = self.matrix.get(origin_admin) else {
            return FlowSummary::empty();
        };

        let cells = flows.get(direction);
        let mut records = Vec::with_capacity(cells.len());
        let mut total_value: u64 = 0;
        let mut total_households: u64 = 0;

        for (destination, cell) in cells {
            total_value += cell.value;
            total_households += cell.household_count;
            records.push(FlowRecord {
                origin_admin: origin_admin.to_string(),
                destination_admin: destination.clone(),
                direction,
                value: cell.value,
                household_count: cell.household_count,
                delta: cell.delta,
                estimated: cell.estimated,
            });
        }

        FlowSummary {
            records,
            total_value,
            total_households,
        }
    }

    /// Number of origins present in the matrix.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    /// Whether the matrix document held no origins.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::parse_matrix;

    fn store() -> FlowStore {
        // The worked example: A receives 100 people / 40 households
        // from B (delta +10) and 5 people / 2 households from C
        // (delta -3).
        let doc = r#"{
            "A": {
                "in": {
                    "B": { "val": 100, "hh_cnt": 40, "diff": 10 },
                    "C": { "val": 5, "hh_cnt": 2, "diff": -3 }
                },
                "out": {
                    "B": { "val": 7, "hh_cnt": 3, "diff": 1 }
                }
            }
        }"#;
        FlowStore::from_wire(parse_matrix(doc).unwrap())
    }

    #[test]
    fn totals_are_exact_sums() {
        let summary = store().query("A", Direction::In);
        assert_eq!(summary.records.len(), 2);
        assert_eq!(summary.total_value, 105);
        assert_eq!(summary.total_households, 42);
    }

    #[test]
    fn directions_stay_separate() {
        let summary = store().query("A", Direction::Out);
        assert_eq!(summary.total_value, 7);
        assert_eq!(summary.records.len(), 1);
        assert_eq!(summary.records[0].destination_admin, "B");
    }

    #[test]
    fn absent_origin_yields_empty_summary() {
        let summary = store().query("Z", Direction::In);
        assert_eq!(summary, FlowSummary::empty());
    }

    #[test]
    fn absent_direction_yields_empty_summary() {
        let doc = r#"{"A":{"in":{"B":{"val":1,"hh_cnt":1,"diff":0}}}}"#;
        let store = FlowStore::from_wire(parse_matrix(doc).unwrap());
        let summary = store.query("A", Direction::Out);
        assert_eq!(summary.total_value, 0);
        assert!(summary.records.is_empty());
    }

    #[test]
    fn records_carry_query_identity() {
        let summary = store().query("A", Direction::In);
        for record in &summary.records {
            assert_eq!(record.origin_admin, "A");
            assert_eq!(record.direction, Direction::In);
        }
    }

    #[test]
    fn records_come_back_in_counterpart_order() {
        let summary = store().query("A", Direction::In);
        let destinations: Vec<&str> = summary
            .records
            .iter()
            .map(|r| r.destination_admin.as_str())
            .collect();
        assert_eq!(destinations, ["B", "C"]);
    }

    #[test]
    fn empty_store_reports_empty() {
        let store = FlowStore::default();
        assert!(store.is_empty());
        assert_eq!(store.query("A", Direction::In), FlowSummary::empty());
    }
}
