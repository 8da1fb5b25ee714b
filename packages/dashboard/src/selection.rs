//! Session selection state.
//!
//! The single source of truth for which region is selected and which
//! direction is active. Owned by the presentation collaborator and
//! passed explicitly to every recomputation; nothing reads it through
//! globals. Never persisted.

use move_map_flow_models::Direction;

/// Outcome of a select event, for the caller's event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// A region became selected from the unselected state.
    Selected,
    /// The already-selected region was clicked again and cleared.
    Deselected,
    /// Selection moved directly to a different region.
    Replaced,
}

/// Which region is selected and which direction is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    selected: Option<String>,
    direction: Direction,
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

impl Selection {
    /// The startup state: nothing selected, inflow active.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected: None,
            direction: Direction::In,
        }
    }

    /// Handles a region click.
    ///
    /// Clicking an unselected region selects it; clicking the selected
    /// region again deselects it; clicking a different region replaces
    /// the selection directly, with no intermediate unselected state.
    pub fn select(&mut self, census_code: &str) -> Transition {
        match self.selected.as_deref() {
            Some(current) if current == census_code => {
                self.selected = None;
                Transition::Deselected
            }
            Some(_) => {
                self.selected = Some(census_code.to_string());
                Transition::Replaced
            }
            None => {
                self.selected = Some(census_code.to_string());
                Transition::Selected
            }
        }
    }

    /// Unconditionally deselects.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Census code of the selected region, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The active direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Sets the active direction. Orthogonal to selection: the
    /// selected region is never touched.
    pub const fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Flips the active direction.
    pub const fn toggle_direction(&mut self) {
        self.direction = self.direction.opposite();
    }
}
