#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Flow matrix store, query engine, and ranker.
//!
//! Owns the full origin-direction-destination movement matrix, answers
//! per-region queries with exact integer totals, and extracts the
//! bounded top/bottom display subset used by the ranking panel.

pub mod rank;
pub mod store;
pub mod wire;

use thiserror::Error;

/// Errors that can occur while loading flow data.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Flow matrix document failed to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
