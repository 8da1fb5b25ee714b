//! Map style descriptors for the rendering collaborator.
//!
//! Each region polygon gets one descriptor per redraw. The constants
//! mirror the dashboard's base map styling; flow fills come from the
//! direction's palette.

use move_map_flow_models::Direction;
use serde::{Deserialize, Serialize};

use crate::bins::color_for;

/// Fill color for regions outside any active selection.
pub const BASE_FILL: &str = "#3388ff";

/// Fill color for the selected region itself.
pub const SELECTED_FILL: &str = "#9f9eff";

/// Border color for unselected regions.
pub const BASE_BORDER: &str = "#ffffff";

/// Border color for the selected region.
pub const SELECTED_BORDER: &str = "#666666";

/// Style applied to one region polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStyle {
    /// Polygon fill color token.
    pub fill_color: String,
    /// Polygon fill opacity, 0 to 1.
    pub fill_opacity: f64,
    /// Polygon border color token.
    pub border_color: String,
    /// Polygon border width in pixels.
    pub border_width: f64,
}

impl RegionStyle {
    /// Style for regions when nothing is selected, and for regions
    /// with no flow toward the selection.
    #[must_use]
    pub fn base() -> Self {
        Self {
            fill_color: BASE_FILL.to_string(),
            fill_opacity: 0.5,
            border_color: BASE_BORDER.to_string(),
            border_width: 1.0,
        }
    }

    /// Highlight style for the selected region itself.
    #[must_use]
    pub fn selected() -> Self {
        Self {
            fill_color: SELECTED_FILL.to_string(),
            fill_opacity: 0.7,
            border_color: SELECTED_BORDER.to_string(),
            border_width: 3.0,
        }
    }

    /// Style for a counterpart region, colored by its flow value in
    /// the active direction's palette.
    #[must_use]
    pub fn flow(value: u64, direction: Direction) -> Self {
        Self {
            fill_color: color_for(value, direction).to_string(),
            fill_opacity: 0.7,
            border_color: BASE_BORDER.to_string(),
            border_width: 1.0,
        }
    }
}
