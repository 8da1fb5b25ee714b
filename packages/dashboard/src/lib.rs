#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection state and dashboard view assembly.
//!
//! Ties the read-only snapshot (catalog + flow store) to the mutable
//! per-session [`selection::Selection`]: every selection or direction
//! event recomputes the totals, ranking, per-region map styles, and
//! tooltip for the presentation collaborators.

pub mod export;
pub mod selection;
pub mod view;
