#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Region boundary parsing and code/name resolution.
//!
//! Parses the boundary `GeoJSON` document into typed region metadata,
//! translates between the census and admin code systems, and resolves
//! admin codes to display names for the map and ranking views.

pub mod boundary;
pub mod catalog;
pub mod translator;

use thiserror::Error;

/// Errors that can occur while parsing boundary data.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Boundary document is not valid `GeoJSON`.
    #[error("GeoJSON error: {0}")]
    Geojson(#[from] geojson::Error),

    /// Boundary document is valid `GeoJSON` but not a feature collection.
    #[error("Boundary document is not a FeatureCollection")]
    NotFeatureCollection,

    /// A boundary feature is missing a required property.
    #[error("Malformed boundary feature at index {index}: {message}")]
    MalformedFeature {
        /// Position of the feature in the collection.
        index: usize,
        /// Description of what was missing or invalid.
        message: String,
    },
}
