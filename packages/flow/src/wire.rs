//! Wire format of the flow matrix document.
//!
//! The document is one JSON object per origin admin code, each holding
//! an `"in"` and an `"out"` map from counterpart admin code to a flow
//! cell. Cells are validated here, at the load boundary; raw JSON
//! values never reach the store.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::FlowError;

/// One origin-destination cell as written by the data pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireCell {
    /// People moved.
    pub val: u64,
    /// Distinct households moved.
    pub hh_cnt: u64,
    /// Year-over-year change in `val`.
    pub diff: i64,
    /// Delta imputed due to a boundary split. The pipeline only emits
    /// this key for imputed cells, so it defaults to false.
    #[serde(default)]
    pub est: bool,
}

/// Both direction maps for one origin.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WireDirections {
    /// Counterparts that moved into this origin.
    #[serde(default, rename = "in")]
    pub inflow: BTreeMap<String, WireCell>,
    /// Counterparts this origin moved out to.
    #[serde(default, rename = "out")]
    pub outflow: BTreeMap<String, WireCell>,
}

/// The whole matrix document, keyed by origin admin code.
pub type WireMatrix = BTreeMap<String, WireDirections>;

/// Parses the flow matrix document.
///
/// # Errors
///
/// Returns [`FlowError`] if the document is not valid JSON or any cell
/// carries unexpected or mistyped fields.
pub fn parse_matrix(document: &str) -> Result<WireMatrix, FlowError> {
    serde_json::from_str(document).map_err(Into::into)
}
