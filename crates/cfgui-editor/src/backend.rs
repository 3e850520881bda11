//! Rendering backend capability.
//!
//! The editor never draws pixels itself. Hosts implement `GuiBackend` on top
//! of their immediate-mode toolkit; every widget call returns the value after
//! this frame's user input.

use crate::geometry::Rect;

/// Text field appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStyle {
    #[default]
    Normal,
    /// Text does not parse into the field's declared type.
    Error,
}

pub trait GuiBackend {
    fn label(&mut self, rect: Rect, text: &str, tooltip: Option<&str>);

    /// Editable single-line text. Returns the (possibly edited) text.
    fn text_field(&mut self, rect: Rect, text: &str, style: FieldStyle) -> String;

    /// Checkbox. Returns the new state.
    fn toggle(&mut self, rect: Rect, on: bool) -> bool;

    /// Returns `true` when clicked this frame.
    fn button(&mut self, rect: Rect, text: &str) -> bool;

    /// Bordered box, optionally captioned.
    fn frame(&mut self, rect: Rect, text: &str);

    /// Open a scroll region showing `content` through `viewport`. Returns the
    /// new scroll offset.
    fn begin_scroll(&mut self, viewport: Rect, offset: (f32, f32), content: Rect) -> (f32, f32);

    fn end_scroll(&mut self);

    /// Single-column list of items. Returns the selected index.
    fn selection_grid(&mut self, rect: Rect, selected: usize, items: &[&str]) -> usize;

    /// Pixel width a label needs for `text`.
    fn measure(&self, text: &str) -> f32 {
        // Rough estimate: 8px per char. Backends with real fonts override this.
        text.chars().count() as f32 * 8.0
    }
}
