#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Flow-value color classification and map style descriptors.
//!
//! Maps numeric flow values to discrete color buckets per direction,
//! generates the matching legend, and produces the style descriptors
//! the map-rendering collaborator applies to each region polygon.

pub mod bins;
pub mod descriptor;
