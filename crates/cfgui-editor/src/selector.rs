//! Selectors for lists of sibling nodes and named items.
//!
//! `TreeEditor::select` edits a repeated group of child nodes: a scrollable
//! list to pick from, ^/v arrows to reorder, and a name field with rename (#),
//! add (+) and remove (-) buttons. The list operations live on
//! `CollectionState` so hosts can drive them without drawing.
//!
//! `TreeEditor::cycle_select` is a compact `< name >` stepper over any slice
//! of `Named` items.

use crate::backend::{FieldStyle, GuiBackend};
use crate::geometry::{Placement, Rect};
use crate::sync::TreeEditor;
use cfgui_core::ConfigNode;
use serde::{Deserialize, Serialize};

/// Anything with a display name.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for ConfigNode {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A name may be added or used for renaming when it is non-empty, contains
/// no whitespace, and is not already taken in `nodes`.
pub fn is_valid_name(nodes: &[ConfigNode], name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(char::is_whitespace)
        && !nodes.iter().any(|n| n.name == name)
}

// ─── Collection state ────────────────────────────────────────────────────

/// Cross-frame state of a collection selector, owned by the host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionState {
    /// Selected index, `None` when nothing is selected.
    pub selected: Option<usize>,
    /// Pending name for add/rename.
    pub name_buffer: String,
    /// Scroll offset of the list.
    pub scroll: (f32, f32),
}

impl CollectionState {
    /// Pull `selected` back into range after the list shrank elsewhere.
    pub fn clamp(&mut self, len: usize) {
        if let Some(i) = self.selected
            && i >= len
        {
            self.selected = len.checked_sub(1);
        }
    }

    pub fn selected_node<'n>(&self, nodes: &'n [ConfigNode]) -> Option<&'n ConfigNode> {
        nodes.get(self.selected?)
    }

    /// Swap the selection with its predecessor.
    pub fn move_up(&mut self, nodes: &mut [ConfigNode]) -> bool {
        match self.selected {
            Some(i) if i > 0 && i < nodes.len() => {
                nodes.swap(i - 1, i);
                self.selected = Some(i - 1);
                log::debug!("moved `{}` up to {}", nodes[i - 1].name, i - 1);
                true
            }
            _ => false,
        }
    }

    /// Swap the selection with its successor.
    pub fn move_down(&mut self, nodes: &mut [ConfigNode]) -> bool {
        match self.selected {
            Some(i) if i + 1 < nodes.len() => {
                nodes.swap(i, i + 1);
                self.selected = Some(i + 1);
                log::debug!("moved `{}` down to {}", nodes[i + 1].name, i + 1);
                true
            }
            _ => false,
        }
    }

    /// Append an empty node named after the buffer. The selection is kept.
    pub fn add(&self, nodes: &mut Vec<ConfigNode>) -> bool {
        if !is_valid_name(nodes, &self.name_buffer) {
            return false;
        }
        log::debug!("added `{}`", self.name_buffer);
        nodes.push(ConfigNode::new(self.name_buffer.clone()));
        true
    }

    /// Rename the selected node to the buffer.
    pub fn rename(&self, nodes: &mut [ConfigNode]) -> bool {
        if !is_valid_name(nodes, &self.name_buffer) {
            return false;
        }
        match self.selected.and_then(|i| nodes.get_mut(i)) {
            Some(node) => {
                log::debug!("renamed `{}` to `{}`", node.name, self.name_buffer);
                node.name = self.name_buffer.clone();
                true
            }
            None => false,
        }
    }

    /// Remove the selected node. Removing the last entry selects the new
    /// last entry, or nothing once the list is empty.
    pub fn remove(&mut self, nodes: &mut Vec<ConfigNode>) -> Option<ConfigNode> {
        let i = self.selected.filter(|&i| i < nodes.len())?;
        let removed = nodes.remove(i);
        log::debug!("removed `{}`", removed.name);
        self.clamp(nodes.len());
        Some(removed)
    }
}

/// Cross-frame state of a cyclic selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleState {
    pub index: usize,
}

// ─── Drawing ─────────────────────────────────────────────────────────────

impl TreeEditor {
    /// Draw the collection selector for `nodes` and apply this frame's
    /// actions. `placement.height` must hold the list's height in row-units
    /// on entry. Returns the selected node.
    pub fn select<'n, B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        nodes: &'n mut Vec<ConfigNode>,
        state: &mut CollectionState,
        base: Rect,
        placement: &mut Placement,
    ) -> Option<&'n mut ConfigNode> {
        let cfg = &self.config;
        let pad = cfg.box_padding;
        state.clamp(nodes.len());

        let list_height = placement.height;
        let outline = cfg.rect(base, placement);
        placement.height = list_height - 1.0;
        let mut list_rect = cfg.rect(base, placement);
        placement.height = nodes.len() as f32;
        let mut items_rect = cfg.rect(base, placement);
        placement.height = 1.0;
        let mut arrow_rect = cfg.rect(base, placement);
        list_rect.split(&mut arrow_rect, 15.0 / 16.0);

        ui.frame(outline, "");
        let list_rect = list_rect.inset(pad, pad);
        items_rect.x = 0.0;
        items_rect.y = 0.0;
        // Leave room for the scrollbar once the list can overflow.
        items_rect.width = if nodes.len() <= 3 {
            list_rect.width
        } else {
            list_rect.width - 2.0 * pad
        };

        state.scroll = ui.begin_scroll(list_rect, state.scroll, items_rect);
        let previous = state.selected;
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        let picked = ui.selection_grid(items_rect, state.selected.unwrap_or(0), &names);
        state.selected = (!nodes.is_empty()).then(|| picked.min(nodes.len() - 1));
        ui.end_scroll();
        placement.y += list_height - 1.0;

        arrow_rect.x -= pad / 2.0;
        arrow_rect.y += pad;
        if !nodes.is_empty() {
            if ui.button(arrow_rect, "^") {
                state.move_up(nodes);
            }
            arrow_rect.y += arrow_rect.height * (list_height - 3.0);
            if ui.button(arrow_rect, "v") {
                state.move_down(nodes);
            }
        }

        let mut name_rect = cfg.rect(base, placement);
        name_rect.x += pad;
        name_rect.width -= 2.0 * pad;
        name_rect.y -= pad / 2.0;
        let mut rename_rect = name_rect;
        let mut add_rect = name_rect;
        let mut remove_rect = name_rect;
        name_rect.split(&mut rename_rect, 1.0 / 2.0);
        rename_rect.split(&mut add_rect, 1.0 / 3.0);
        add_rect.split(&mut remove_rect, 1.0 / 2.0);
        for rect in [&mut name_rect, &mut rename_rect, &mut add_rect, &mut remove_rect] {
            rect.width -= pad / 2.0;
        }

        if state.selected != previous
            && let Some(node) = state.selected_node(nodes)
        {
            state.name_buffer = node.name.clone();
        }
        state.name_buffer = ui.text_field(name_rect, &state.name_buffer, FieldStyle::Normal);

        if is_valid_name(nodes, &state.name_buffer) {
            if !nodes.is_empty() && ui.button(rename_rect, "#") {
                state.rename(nodes);
            }
            if ui.button(add_rect, "+") {
                state.add(nodes);
            }
        } else {
            rename_rect.width += add_rect.width;
            ui.label(rename_rect, "Invalid Name!", None);
        }

        if !nodes.is_empty() && ui.button(remove_rect, "-") {
            state.remove(nodes);
        }
        placement.y += 1.0 + cfg.spacing_offset;

        nodes.get_mut(state.selected?)
    }

    /// Draw a `< name >` stepper. `ratio` sets the arrow width to
    /// `1 / ratio` of the row and must exceed 2 so the name keeps a positive
    /// width. Arrows only appear with more than one item.
    pub fn cycle_select<'t, B: GuiBackend + ?Sized, T: Named>(
        &self,
        ui: &mut B,
        items: &'t [T],
        state: &mut CycleState,
        ratio: f32,
        base: Rect,
        placement: &mut Placement,
    ) -> Option<&'t T> {
        debug_assert!(ratio > 2.0, "cycle_select ratio must exceed 2, got {ratio}");
        let mut left = self.config.rect(base, placement);
        let mut center = left;
        let mut right = left;
        left.split(&mut center, 1.0 / ratio);
        center.split(&mut right, (ratio - 2.0) / (ratio - 1.0));

        let len = items.len();
        if len > 1 && ui.button(left, "<") {
            state.index = match state.index {
                0 => len - 1,
                i => (i - 1).min(len - 1),
            };
        }
        if len > 1 && ui.button(right, ">") {
            state.index = if state.index + 1 >= len {
                0
            } else {
                state.index + 1
            };
        }

        let current = items.get(state.index);
        if let Some(item) = current {
            ui.label(center, item.name(), None);
        }
        placement.y += 1.0 + self.config.spacing_offset;
        current
    }
}
