//! Tree synchronizer: draws an object's fields and writes edits back into its
//! document node.
//!
//! One call walks the object's schema in declaration order:
//!
//! - **Scalar fields** get a label and a text field (or an enum stepper),
//!   seeded from the document or, when absent, the object's own value. Only
//!   values that differ from that default are kept in the document.
//! - **Optional scalars** also get a presence toggle. Turning it on stores the
//!   default text; while present the value is kept even when it equals the
//!   default, since presence itself is the setting.
//! - **Node fields** get a bordered box sized by `layout::row_units`, a
//!   presence toggle when optional, and a recursive pass over the nested
//!   object. Required nodes are created empty the first time they are drawn.
//! - **Value-carrying nodes** (`as_node`) also get an inline text field for
//!   their scalar, stored as the child's `value` entry while the node exists
//!   and as a bare value on the parent while it does not.
//!
//! The cursor advances by exactly the rows drawn, which is what
//! `layout::field_rows` predicts for the same node before the pass. Field
//! visibility is read once, before any edit of the pass, and a node toggled
//! on is only drawn into from the next frame.

use crate::backend::{FieldStyle, GuiBackend};
use crate::config::EditorConfig;
use crate::geometry::{Placement, Rect};
use crate::layout;
use cfgui_core::{ConfigNode, FieldDescriptor, Persistable, Schema, ValueType};

/// Entry point for drawing and editing config documents.
#[derive(Debug, Clone, Default)]
pub struct TreeEditor {
    pub config: EditorConfig,
}

impl TreeEditor {
    pub fn new(config: EditorConfig) -> Self {
        Self { config }
    }

    /// Row-units a box for `node` of type `schema` occupies.
    pub fn row_units(&self, node: Option<&ConfigNode>, schema: &Schema) -> f32 {
        layout::row_units(node, Some(schema), self.config.spacing_offset)
    }

    /// Size `placement` to the box for `node` and return its pixel rect.
    pub fn box_rect(
        &self,
        base: Rect,
        placement: &mut Placement,
        node: Option<&ConfigNode>,
        schema: &Schema,
    ) -> Rect {
        placement.height = self.row_units(node, schema);
        self.config.rect(base, placement)
    }

    /// Draw every field of `obj` against `node`, applying edits in place.
    pub fn sync<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        obj: &dyn Persistable,
        node: &mut ConfigNode,
        base: Rect,
        placement: &mut Placement,
    ) {
        let visible: Vec<bool> = obj.schema().fields().map(|f| f.is_visible(node)).collect();
        for (field, visible) in obj.schema().fields().zip(visible) {
            if !visible {
                if !field.is_node() && node.remove_value(field.name).is_some() {
                    log::debug!("pruned hidden value `{}` from {}", field.name, node.name);
                }
                continue;
            }

            if field.is_node() {
                self.draw_node_field(ui, obj, field, node, base, placement);
            } else if !field.is_reserved() {
                placement.y += self.config.spacing_offset;
                self.draw_value_field(ui, obj, field, node, base, placement);
            }
        }
    }

    // ─── Scalar rows ─────────────────────────────────────────────────────

    fn draw_value_field<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        obj: &dyn Persistable,
        field: &FieldDescriptor,
        node: &mut ConfigNode,
        base: Rect,
        placement: &mut Placement,
    ) {
        placement.height = 1.0;
        let default = obj.value_text(field.name).unwrap_or_default();

        let mut row = self.config.rect(base, placement);
        let mut toggle_rect = row;
        if field.optional {
            toggle_rect.split(&mut row, self.config.toggle_ratio);
        }
        let mut label_rect = row;
        let mut value_rect = row;
        label_rect.split(&mut value_rect, self.config.value_ratio);
        draw_title(ui, label_rect, field);

        if field.optional {
            self.draw_optional_value(ui, field, node, toggle_rect, value_rect, &default);
        } else {
            let ty = field.value_type().unwrap_or(ValueType::Text);
            let current = node
                .get_value(field.name)
                .map_or_else(|| default.clone(), str::to_string);
            let edited = self.value_editor(ui, ty, value_rect, &current);
            commit_value(node, field.name, &edited, &default);
        }
        placement.y += 1.0;
    }

    /// Optional scalar: the toggle owns presence, so no default pruning.
    fn draw_optional_value<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        field: &FieldDescriptor,
        node: &mut ConfigNode,
        toggle_rect: Rect,
        value_rect: Rect,
        default: &str,
    ) {
        let name = field.name;
        let ty = field.value_type().unwrap_or(ValueType::Text);
        let present = node.has_value(name);
        let on = ui.toggle(toggle_rect, present);

        if let Some(current) = node.get_value(name).map(str::to_string) {
            let edited = self.value_editor(ui, ty, value_rect, &current);
            if edited != current {
                node.add_value(name, edited);
            }
        }

        match (present, on) {
            (false, true) => {
                node.add_value(name, default);
                log::debug!("toggled value `{name}` on in {}", node.name);
            }
            (true, false) => {
                node.remove_value(name);
                log::debug!("toggled value `{name}` off in {}", node.name);
            }
            _ => {}
        }
    }

    fn value_editor<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        ty: ValueType,
        rect: Rect,
        current: &str,
    ) -> String {
        match ty.enum_names() {
            Some(names) => self.enum_selector(ui, rect, current, names),
            None => ui.text_field(rect, current, field_style(ty, current)),
        }
    }

    /// Framed value with ◀/▶ buttons stepping through `names` cyclically.
    fn enum_selector<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        rect: Rect,
        value: &str,
        names: &[&str],
    ) -> String {
        ui.frame(rect, value);
        let step = self.config.element_height;
        let prev_rect = Rect {
            x: rect.x + rect.width - 2.0 * step,
            width: step,
            ..rect
        };
        let next_rect = Rect {
            x: prev_rect.x + step,
            ..prev_rect
        };

        let mut value = value.to_string();
        if names.is_empty() {
            return value;
        }
        if ui.button(prev_rect, "\u{25c0}") {
            let index = match names.iter().position(|n| *n == value) {
                Some(i) if i > 0 => i - 1,
                _ => names.len() - 1,
            };
            value = names[index].to_string();
        }
        if ui.button(next_rect, "\u{25b6}") {
            let index = match names.iter().position(|n| *n == value) {
                Some(i) if i + 1 < names.len() => i + 1,
                _ => 0,
            };
            value = names[index].to_string();
        }
        value
    }

    // ─── Node boxes ──────────────────────────────────────────────────────

    fn draw_node_field<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        obj: &dyn Persistable,
        field: &FieldDescriptor,
        parent: &mut ConfigNode,
        base: Rect,
        placement: &mut Placement,
    ) {
        let cfg = &self.config;
        let spacing = cfg.spacing_offset;
        placement.y += spacing;

        if !field.has_presence_toggle() && !parent.has_node(field.name) {
            log::debug!("materialised required node `{}` in {}", field.name, parent.name);
            parent.add_node(ConfigNode::new(field.name));
        }

        // Presence as laid out; toggles below only take effect inside the box
        // from the next frame.
        let laid_out = parent.has_node(field.name);
        let box_top = placement.y;
        let box_rows = layout::row_units(parent.get_node(field.name), field.nested(), spacing);
        placement.height = box_rows;
        ui.frame(cfg.rect(base, placement), "");
        placement.height = 1.0;
        placement.y += spacing;

        let box_base = Rect {
            x: base.x + cfg.box_padding,
            ..base
        };
        let mut box_placement = Placement {
            width: placement.width - 2.0 * cfg.box_padding,
            ..*placement
        };

        let mut toggle_rect = cfg.rect(box_base, &box_placement);
        let mut title_rect = toggle_rect;
        toggle_rect.split(&mut title_rect, cfg.toggle_ratio);
        let mut value_rect = title_rect;
        if field.as_node {
            title_rect.split(&mut value_rect, cfg.value_ratio);
        }
        draw_title(ui, title_rect, field);

        if field.has_presence_toggle() {
            let inline = field
                .as_node
                .then(|| self.draw_inline_value(ui, obj, field, parent, value_rect));

            let present = parent.has_node(field.name);
            if ui.toggle(toggle_rect, present) != present {
                if present {
                    parent.remove_node(field.name);
                    log::debug!("toggled `{}` off in {}", field.name, parent.name);
                } else {
                    parent.add_node(ConfigNode::new(field.name));
                    log::debug!("toggled `{}` on in {}", field.name, parent.name);
                }
            }

            if let Some((edited, default)) = inline {
                commit_inline(parent, field.name, &edited, &default);
            }
        }

        box_placement.y += 1.0;
        let mut recursed = false;
        if laid_out
            && let Some(nested) = field.nested()
            && let Some(child) = parent.get_node_mut(field.name)
        {
            let fallback: Box<dyn Persistable>;
            let sub = match obj.nested(field.name) {
                Some(sub) => sub,
                None => {
                    fallback = nested.default_instance();
                    fallback.as_ref()
                }
            };
            self.sync(ui, sub, child, box_base, &mut box_placement);
            recursed = true;
        }

        // A box toggled off this frame keeps the height it was laid out with.
        placement.y = if recursed {
            box_placement.y + spacing
        } else {
            box_top + box_rows
        };
        placement.x = box_placement.x;
    }

    /// Inline scalar of a value-carrying node. Returns `(edited, default)`.
    ///
    /// The node's own `value` entry wins over a bare value on the parent.
    fn draw_inline_value<B: GuiBackend + ?Sized>(
        &self,
        ui: &mut B,
        obj: &dyn Persistable,
        field: &FieldDescriptor,
        parent: &ConfigNode,
        rect: Rect,
    ) -> (String, String) {
        let default = obj.value_text(field.name).unwrap_or_default();
        let current = parent
            .get_node(field.name)
            .and_then(|n| n.get_value("value"))
            .or_else(|| parent.get_value(field.name))
            .map_or_else(|| default.clone(), str::to_string);

        let ty = field.inline_type();
        let edited = ui.text_field(rect, &current, field_style(ty, &current));
        (edited, default)
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────

fn draw_title<B: GuiBackend + ?Sized>(ui: &mut B, mut rect: Rect, field: &FieldDescriptor) {
    let label = field.display_label();
    rect.width = ui.measure(label).min(rect.width);
    ui.label(rect, label, field.tooltip);
}

fn field_style(ty: ValueType, text: &str) -> FieldStyle {
    if !text.is_empty() && !ty.can_parse(text) {
        FieldStyle::Error
    } else {
        FieldStyle::Normal
    }
}

/// Store `text` under `name` unless it equals `default`, in which case any
/// stored entry is dropped.
fn commit_value(node: &mut ConfigNode, name: &str, text: &str, default: &str) {
    if text == default {
        if node.remove_value(name).is_some() {
            log::debug!("pruned default value `{name}` from {}", node.name);
        }
    } else if node.get_value(name) != Some(text) {
        node.add_value(name, text);
    }
}

/// Write a value-carrying node's scalar: into the child's `value` while the
/// child exists (dropping any bare copy on the parent), else bare on the parent.
fn commit_inline(parent: &mut ConfigNode, name: &str, text: &str, default: &str) {
    match parent.get_node_mut(name) {
        Some(child) => {
            commit_value(child, "value", text, default);
            parent.remove_value(name);
        }
        None => commit_value(parent, name, text, default),
    }
}
