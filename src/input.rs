//! Input model: grid-snap setting and the drag gesture state machine.
//!
//! `InputState` is the gesture tracked between pointer-down and pointer-up.
//! A drag carries the index of the grabbed item and the grab offset measured
//! at pointer-down, so every pointer-move can place the item without drift.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::viewport::Point;

/// Persistent UI state that outlives individual gestures.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// Round dragged positions to the grid.
    pub grid_snap: bool,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an item.
    Dragging {
        /// Scene index of the dragged item. Always the last index while dragging.
        index: usize,
        /// Pointer position minus the item's top-left corner at grab time.
        grab_offset: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Round `v` to the nearest multiple of `unit`, halves rounding up.
#[must_use]
pub fn snap_value(v: f64, unit: f64) -> f64 {
    (v / unit + 0.5).floor() * unit
}

/// Snap both coordinates of `pt` independently.
#[must_use]
pub fn snap_to_grid(pt: Point, unit: f64) -> Point {
    Point::new(snap_value(pt.x, unit), snap_value(pt.y, unit))
}
