//! Headless `GuiBackend`: records draw calls and replays scripted input.
//!
//! Used by tests and by hosts that want to run an editor pass without a
//! window (e.g. to normalise a document). Scripted inputs are one-shot: each
//! fires on the first matching widget and is then consumed, like a click that
//! only lasts one frame.
//!
//! Inputs can be scoped to the most recent label drawn before the widget, so
//! `edit("speed", "15")` targets the text field that follows the `speed` label.

use crate::backend::{FieldStyle, GuiBackend};
use crate::geometry::Rect;

/// One recorded widget call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Label {
        rect: Rect,
        text: String,
        tooltip: Option<String>,
    },
    TextField {
        rect: Rect,
        text: String,
        style: FieldStyle,
    },
    Toggle {
        rect: Rect,
        on: bool,
    },
    Button {
        rect: Rect,
        text: String,
    },
    Frame {
        rect: Rect,
        text: String,
    },
    BeginScroll {
        viewport: Rect,
        offset: (f32, f32),
        content: Rect,
    },
    EndScroll,
    Grid {
        rect: Rect,
        selected: usize,
        items: Vec<String>,
    },
}

#[derive(Debug, Clone)]
struct Scripted<T> {
    /// Label the widget must follow; `None` matches any.
    scope: Option<String>,
    input: T,
}

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    ops: Vec<DrawOp>,
    last_label: Option<String>,
    edits: Vec<Scripted<String>>,
    flips: Vec<Scripted<()>>,
    clicks: Vec<Scripted<String>>,
    pick: Option<usize>,
    scroll: Option<(f32, f32)>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Scripting ───────────────────────────────────────────────────────

    /// Replace the text of the field following `label`.
    pub fn edit(&mut self, label: &str, text: &str) -> &mut Self {
        self.edits.push(Scripted {
            scope: Some(label.to_string()),
            input: text.to_string(),
        });
        self
    }

    /// Replace the text of the next text field, whatever label precedes it.
    pub fn type_text(&mut self, text: &str) -> &mut Self {
        self.edits.push(Scripted {
            scope: None,
            input: text.to_string(),
        });
        self
    }

    /// Flip the toggle following `label`.
    pub fn flip(&mut self, label: &str) -> &mut Self {
        self.flips.push(Scripted {
            scope: Some(label.to_string()),
            input: (),
        });
        self
    }

    /// Click the next button captioned `text`.
    pub fn click(&mut self, text: &str) -> &mut Self {
        self.clicks.push(Scripted {
            scope: None,
            input: text.to_string(),
        });
        self
    }

    /// Click the button captioned `text` that follows `label`.
    pub fn click_after(&mut self, label: &str, text: &str) -> &mut Self {
        self.clicks.push(Scripted {
            scope: Some(label.to_string()),
            input: text.to_string(),
        });
        self
    }

    /// Select `index` in the next selection grid.
    pub fn pick(&mut self, index: usize) -> &mut Self {
        self.pick = Some(index);
        self
    }

    /// Scroll the next scroll region to `offset`.
    pub fn scroll_to(&mut self, offset: (f32, f32)) -> &mut Self {
        self.scroll = Some(offset);
        self
    }

    /// Scripted inputs that have not fired yet.
    pub fn pending(&self) -> usize {
        self.edits.len()
            + self.flips.len()
            + self.clicks.len()
            + usize::from(self.pick.is_some())
            + usize::from(self.scroll.is_some())
    }

    // ─── Inspection ──────────────────────────────────────────────────────

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drain the recorded ops and start a new frame.
    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        self.last_label = None;
        std::mem::take(&mut self.ops)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn text_fields(&self) -> Vec<(&str, FieldStyle)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::TextField { text, style, .. } => Some((text.as_str(), *style)),
                _ => None,
            })
            .collect()
    }

    pub fn buttons(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Button { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn take_matching<T>(
        list: &mut Vec<Scripted<T>>,
        last_label: Option<&str>,
        pred: impl Fn(&T) -> bool,
    ) -> Option<T> {
        let pos = list.iter().position(|s| {
            s.scope.as_deref().is_none_or(|scope| Some(scope) == last_label) && pred(&s.input)
        })?;
        Some(list.remove(pos).input)
    }
}

impl GuiBackend for HeadlessBackend {
    fn label(&mut self, rect: Rect, text: &str, tooltip: Option<&str>) {
        log::trace!("LABEL {text:?} at ({}, {})", rect.x, rect.y);
        self.last_label = Some(text.to_string());
        self.ops.push(DrawOp::Label {
            rect,
            text: text.to_string(),
            tooltip: tooltip.map(str::to_string),
        });
    }

    fn text_field(&mut self, rect: Rect, text: &str, style: FieldStyle) -> String {
        log::trace!("TEXT {text:?} {style:?} at ({}, {})", rect.x, rect.y);
        self.ops.push(DrawOp::TextField {
            rect,
            text: text.to_string(),
            style,
        });
        Self::take_matching(&mut self.edits, self.last_label.as_deref(), |_| true)
            .unwrap_or_else(|| text.to_string())
    }

    fn toggle(&mut self, rect: Rect, on: bool) -> bool {
        log::trace!("TOGGLE {on} at ({}, {})", rect.x, rect.y);
        self.ops.push(DrawOp::Toggle { rect, on });
        let flipped =
            Self::take_matching(&mut self.flips, self.last_label.as_deref(), |_| true).is_some();
        on != flipped
    }

    fn button(&mut self, rect: Rect, text: &str) -> bool {
        log::trace!("BUTTON {text:?} at ({}, {})", rect.x, rect.y);
        self.ops.push(DrawOp::Button {
            rect,
            text: text.to_string(),
        });
        Self::take_matching(&mut self.clicks, self.last_label.as_deref(), |t| t == text).is_some()
    }

    fn frame(&mut self, rect: Rect, text: &str) {
        log::trace!("FRAME {text:?} {}x{}", rect.width, rect.height);
        self.ops.push(DrawOp::Frame {
            rect,
            text: text.to_string(),
        });
    }

    fn begin_scroll(&mut self, viewport: Rect, offset: (f32, f32), content: Rect) -> (f32, f32) {
        self.ops.push(DrawOp::BeginScroll {
            viewport,
            offset,
            content,
        });
        self.scroll.take().unwrap_or(offset)
    }

    fn end_scroll(&mut self) {
        self.ops.push(DrawOp::EndScroll);
    }

    fn selection_grid(&mut self, rect: Rect, selected: usize, items: &[&str]) -> usize {
        log::trace!("GRID {items:?} selected={selected}");
        self.ops.push(DrawOp::Grid {
            rect,
            selected,
            items: items.iter().map(|s| s.to_string()).collect(),
        });
        match self.pick.take() {
            Some(index) if index < items.len() => index,
            _ => selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Rect = Rect::new(0.0, 0.0, 10.0, 10.0);

    #[test]
    fn scoped_edit_fires_once_after_its_label() {
        let mut ui = HeadlessBackend::new();
        ui.edit("b", "new");

        ui.label(R, "a", None);
        assert_eq!(ui.text_field(R, "old", FieldStyle::Normal), "old");
        ui.label(R, "b", None);
        assert_eq!(ui.text_field(R, "old", FieldStyle::Normal), "new");
        assert_eq!(ui.text_field(R, "old", FieldStyle::Normal), "old");
        assert_eq!(ui.pending(), 0);
    }

    #[test]
    fn clicks_match_caption() {
        let mut ui = HeadlessBackend::new();
        ui.click("+");
        assert!(!ui.button(R, "-"));
        assert!(ui.button(R, "+"));
        assert!(!ui.button(R, "+"));
        assert_eq!(ui.buttons(), vec!["-", "+", "+"]);
    }

    #[test]
    fn flip_inverts_toggle() {
        let mut ui = HeadlessBackend::new();
        ui.flip("opt");
        ui.label(R, "opt", None);
        assert!(ui.toggle(R, false));
        assert!(!ui.toggle(R, false));
    }

    #[test]
    fn pick_ignores_out_of_range() {
        let mut ui = HeadlessBackend::new();
        ui.pick(5);
        assert_eq!(ui.selection_grid(R, 1, &["a", "b"]), 1);
        ui.pick(0);
        assert_eq!(ui.selection_grid(R, 1, &["a", "b"]), 0);
    }

    #[test]
    fn take_ops_starts_a_new_frame() {
        let mut ui = HeadlessBackend::new();
        ui.label(R, "x", Some("tip"));
        let ops = ui.take_ops();
        assert_eq!(
            ops,
            vec![DrawOp::Label {
                rect: R,
                text: "x".into(),
                tooltip: Some("tip".into()),
            }]
        );
        assert!(ui.ops().is_empty());

        // Scope from the previous frame no longer applies.
        ui.edit("x", "y");
        assert_eq!(ui.text_field(R, "z", FieldStyle::Normal), "z");
    }
}
