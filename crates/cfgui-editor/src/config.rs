//! Editor layout configuration.

use crate::geometry::{Placement, Rect};
use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

/// Spacing and sizing constants shared by layout and drawing.
///
/// Layout and sync must read the same `spacing_offset`, otherwise computed
/// box heights drift from the rows actually drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Row-units of vertical gap before each row and around box contents.
    pub spacing_offset: f32,
    /// Pixel height of one row-unit.
    pub element_height: f32,
    /// Fraction of a row given to the label; the rest holds the value editor.
    pub value_ratio: f32,
    /// Pixels trimmed from the right of every placed rectangle.
    pub right_margin: f32,
    /// Pixels a nested box is inset from its parent on each side.
    pub box_padding: f32,
    /// Fraction of a box header used by the presence toggle.
    pub toggle_ratio: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            spacing_offset: 0.25,
            element_height: 22.0,
            value_ratio: 3.0 / 7.0,
            right_margin: 10.0,
            box_padding: 10.0,
            toggle_ratio: 1.0 / 16.0,
        }
    }
}

impl EditorConfig {
    /// Convert a row/column placement into a pixel rectangle inside `base`.
    pub fn rect(&self, base: Rect, placement: &Placement) -> Rect {
        crate::geometry::place(base, placement, self.element_height, self.right_margin)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────
