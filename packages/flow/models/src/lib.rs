#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Flow matrix record and query result types.
//!
//! These types carry origin/destination movement counts between the
//! flow store and its consumers (ranking, coloring, export). They are
//! the strongly-typed model the wire documents are validated into; raw
//! JSON never crosses this boundary.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Direction a flow is counted in, relative to the selected region.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// People moving into the selected region.
    In,
    /// People moving out of the selected region.
    Out,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }

    /// Returns both directions, inflow first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::In, Self::Out]
    }

    /// Human-readable label for headers and legends.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::In => "Inflow",
            Self::Out => "Outflow",
        }
    }
}

/// One origin-destination flow, immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowRecord {
    /// Admin code of the selected (origin) side of the query.
    pub origin_admin: String,
    /// Admin code of the counterpart region.
    pub destination_admin: String,
    /// Direction the flow was counted in.
    pub direction: Direction,
    /// Number of people moved.
    pub value: u64,
    /// Number of distinct households moved.
    pub household_count: u64,
    /// Year-over-year change in `value`.
    pub delta: i64,
    /// Whether `delta` was imputed due to a regional boundary split
    /// rather than directly measured.
    pub estimated: bool,
}

/// Result of one flow query: all counterpart records plus exact totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSummary {
    /// One record per counterpart region, in deterministic order.
    pub records: Vec<FlowRecord>,
    /// Exact integer sum of `value` over all records.
    pub total_value: u64,
    /// Exact integer sum of `household_count` over all records.
    pub total_households: u64,
}

impl FlowSummary {
    /// An empty summary: the legitimate "no data" result for origins
    /// or directions absent from the matrix.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
            total_value: 0,
            total_households: 0,
        }
    }

    /// Average people moved per household, or `None` when no
    /// households were recorded. The zero denominator is guarded
    /// explicitly; it is never coerced to zero or infinity.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_per_household(&self) -> Option<f64> {
        if self.total_households > 0 {
            Some(self.total_value as f64 / self.total_households as f64)
        } else {
            None
        }
    }
}

/// One row of the ranked display list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// Admin code of the counterpart region.
    pub code: String,
    /// Display name of the counterpart region.
    pub name: String,
    /// People moved.
    pub value: u64,
    /// Households moved.
    pub household_count: u64,
    /// Year-over-year change.
    pub delta: i64,
    /// Whether the delta was imputed.
    pub estimated: bool,
}
