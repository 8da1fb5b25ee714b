#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region and boundary metadata types.
//!
//! These types represent the geographic regions an analyst can select
//! on the map. They are independent of the flow matrix data; the two
//! meet only through the admin code key space.

use serde::{Deserialize, Serialize};

/// A selectable map region with its display metadata.
///
/// Regions are identified by two code systems: the fine-grained census
/// code from the boundary dataset and the coarser admin code used as
/// the key space of the flow matrix. For some region granularities the
/// two coincide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    /// Fine-grained census code (unique, e.g. "31570").
    pub census_code: String,
    /// Coarse admin code keying the flow matrix (e.g. "41820").
    /// Equal to `census_code` when no distinct mapping exists.
    pub admin_code: String,
    /// The region's own name (e.g. a district name).
    pub name: String,
    /// Name of the enclosing parent area (province/city), resolved
    /// from the census code prefix. Empty when the prefix is unknown.
    pub parent_area_name: String,
}

impl Region {
    /// Full display name: parent area followed by the region's own
    /// name, with the parent omitted when unknown.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.parent_area_name.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.parent_area_name, self.name)
        }
    }
}

/// Length of the census-code prefix that identifies the parent area.
pub const PARENT_PREFIX_LEN: usize = 2;

/// Derive the parent-area prefix from a census code (first 2
/// characters). Returns `None` for codes shorter than the prefix.
#[must_use]
pub fn parent_prefix(census_code: &str) -> Option<&str> {
    if census_code.len() >= PARENT_PREFIX_LEN {
        Some(&census_code[..PARENT_PREFIX_LEN])
    } else {
        None
    }
}
