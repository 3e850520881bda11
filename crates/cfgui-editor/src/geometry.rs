//! Rectangle placement and splitting.
//!
//! Editors position rows on an abstract grid: `Placement.y` counts row-units,
//! `Placement.x` is a fraction of the base width, and `Placement.width` is a
//! pixel adjustment to it. `place` maps that onto pixels.

use serde::{Deserialize, Serialize};

/// Absolute pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    /// Split horizontally: `self` keeps the left `ratio` of its width and
    /// `right` is resized to the remainder, placed directly after it.
    pub fn split(&mut self, right: &mut Rect, ratio: f32) {
        let width = self.width;
        self.width *= ratio;
        right.width = width * (1.0 - ratio);
        right.x = self.x + self.width;
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width - 2.0 * dx,
            height: self.height - 2.0 * dy,
        }
    }
}

/// Row/column cursor.
///
/// `y` only grows while a frame draws; `height` is set right before a rect is
/// requested and gives how many row-units that rect spans.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Placement {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Map `placement` into pixels relative to `base`.
pub fn place(base: Rect, placement: &Placement, row_height: f32, right_margin: f32) -> Rect {
    Rect {
        x: placement.x * base.width + base.x,
        y: placement.y * row_height + base.y,
        width: base.width + placement.width - right_margin,
        height: row_height * placement.height,
    }
}
