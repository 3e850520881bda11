//! Row-unit layout calculator.
//!
//! Computes how many row-units the editor will draw for a document subtree,
//! by walking the schema's fields in the same order and with the same
//! visibility rules as `TreeEditor::sync`. A nested box costs one header row
//! plus a spacing offset above and below its contents; a scalar row costs one
//! row plus the spacing offset that precedes it.

use cfgui_core::{ConfigNode, Schema};

/// Row-units occupied by a box drawn for `node`: header row, top and bottom
/// margins, and the field rows inside.
///
/// `node == None` means the box is drawn for an absent optional node, which
/// shows only its header.
pub fn row_units(node: Option<&ConfigNode>, schema: Option<&Schema>, spacing: f32) -> f32 {
    1.0 + 2.0 * spacing + field_rows(node, schema, spacing)
}

/// Row-units consumed by the fields of `schema` drawn against `node`, without
/// any enclosing box.
pub fn field_rows(node: Option<&ConfigNode>, schema: Option<&Schema>, spacing: f32) -> f32 {
    let (Some(node), Some(schema)) = (node, schema) else {
        return 0.0;
    };

    let mut rows = 0.0;
    for field in schema.fields() {
        if !field.is_visible(node) {
            continue;
        }
        if field.is_node() {
            let nested = field.nested();
            rows += match node.get_node(field.name) {
                Some(child) => row_units(Some(child), nested, spacing),
                // Absent required nodes are materialised empty before drawing.
                None if !field.has_presence_toggle() => {
                    row_units(Some(&ConfigNode::new(field.name)), nested, spacing)
                }
                None => row_units(None, nested, spacing),
            };
            rows += spacing;
        } else if !field.is_reserved() {
            rows += 1.0 + spacing;
        }
    }
    rows
}
