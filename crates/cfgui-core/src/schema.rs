//! Declarative field catalog.
//!
//! Each editable type publishes a static `Schema`: its persistable fields in
//! declaration order, with per-field metadata (scalar vs. node, presence
//! toggle, visibility condition, label, tooltip). Layout and the editor both
//! iterate the same table, so they always agree on field order.
//!
//! ```
//! use cfgui_core::*;
//!
//! static WHEEL: Schema = Schema {
//!     name: "WHEEL",
//!     fields: &[
//!         FieldDescriptor::value("speed", ValueType::Float).tooltip("Top speed in m/s"),
//!         FieldDescriptor::value("enabled", ValueType::Bool).as_node(),
//!     ],
//!     construct: || Box::new(Wheel::default()),
//! };
//!
//! #[derive(Default)]
//! struct Wheel {
//!     speed: f32,
//! }
//!
//! impl Persistable for Wheel {
//!     fn schema(&self) -> &'static Schema {
//!         &WHEEL
//!     }
//!     fn value_text(&self, field: &str) -> Option<String> {
//!         match field {
//!             "speed" => Some(self.speed.to_string()),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(WHEEL.fields().count(), 2);
//! ```

use crate::node::ConfigNode;
use crate::value::ValueType;
use std::fmt;

/// Scalar names handled outside the regular row loop: `value` is the inline
/// scalar of a value-carrying node, `body` is selected by the host.
pub const RESERVED_NAMES: [&str; 2] = ["body", "value"];

// ─── Objects ─────────────────────────────────────────────────────────────

/// An object whose fields are described by a `Schema`.
pub trait Persistable {
    fn schema(&self) -> &'static Schema;

    /// Current value of a scalar field rendered as document text, or `None`
    /// when the field is uninitialised.
    fn value_text(&self, field: &str) -> Option<String>;

    /// The object behind a node field, or `None` when uninitialised.
    fn nested(&self, _field: &str) -> Option<&dyn Persistable> {
        None
    }
}

/// Static description of a persistable type.
pub struct Schema {
    pub name: &'static str,
    /// Persistable fields in declaration order.
    pub fields: &'static [FieldDescriptor],
    /// Default-instance provider used when a nested object is uninitialised.
    pub construct: fn() -> Box<dyn Persistable>,
}

impl Schema {
    pub fn fields(&self) -> std::slice::Iter<'static, FieldDescriptor> {
        self.fields.iter()
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn default_instance(&self) -> Box<dyn Persistable> {
        (self.construct)()
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("name", &self.name)
            .field("fields", &self.fields.iter().map(|d| d.name).collect::<Vec<_>>())
            .finish()
    }
}

// ─── Fields ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Scalar stored as a `name = text` value.
    Value(ValueType),
    /// Nested object stored as a child node.
    Node(&'static Schema),
}

/// Visibility predicate evaluated against the sibling document node.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Visible when sibling `field` equals `equals`. An absent sibling counts
    /// as `default`.
    ValueIs {
        field: &'static str,
        equals: &'static str,
        default: &'static str,
    },
    ValueIsNot {
        field: &'static str,
        equals: &'static str,
        default: &'static str,
    },
    HasValue(&'static str),
    HasNode(&'static str),
    Custom(fn(&ConfigNode) -> bool),
}

impl Condition {
    pub fn is_met(&self, node: &ConfigNode) -> bool {
        match *self {
            Condition::ValueIs {
                field,
                equals,
                default,
            } => node.get_value(field).unwrap_or(default) == equals,
            Condition::ValueIsNot {
                field,
                equals,
                default,
            } => node.get_value(field).unwrap_or(default) != equals,
            Condition::HasValue(field) => node.has_value(field),
            Condition::HasNode(field) => node.has_node(field),
            Condition::Custom(pred) => pred(node),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Presence is toggled by the user; absence removes it from the document.
    pub optional: bool,
    /// Rendered as a node box even when scalar, with an inline value editor.
    pub as_node: bool,
    pub condition: Option<Condition>,
    pub tooltip: Option<&'static str>,
    pub label: Option<&'static str>,
}

impl FieldDescriptor {
    pub const fn value(name: &'static str, ty: ValueType) -> Self {
        Self {
            name,
            kind: FieldKind::Value(ty),
            optional: false,
            as_node: false,
            condition: None,
            tooltip: None,
            label: None,
        }
    }

    pub const fn node(name: &'static str, schema: &'static Schema) -> Self {
        Self {
            name,
            kind: FieldKind::Node(schema),
            optional: false,
            as_node: false,
            condition: None,
            tooltip: None,
            label: None,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            optional: true,
            ..self
        }
    }

    pub const fn as_node(self) -> Self {
        Self {
            as_node: true,
            ..self
        }
    }

    pub const fn when(self, condition: Condition) -> Self {
        Self {
            condition: Some(condition),
            ..self
        }
    }

    pub const fn tooltip(self, text: &'static str) -> Self {
        Self {
            tooltip: Some(text),
            ..self
        }
    }

    pub const fn label(self, text: &'static str) -> Self {
        Self {
            label: Some(text),
            ..self
        }
    }

    /// Drawn as a bordered box rather than a single row.
    pub fn is_node(&self) -> bool {
        self.as_node || matches!(self.kind, FieldKind::Node(_))
    }

    /// Whether presence is user-controlled (toggle) instead of materialised.
    pub fn has_presence_toggle(&self) -> bool {
        self.optional || self.as_node
    }

    pub fn is_reserved(&self) -> bool {
        RESERVED_NAMES.contains(&self.name)
    }

    pub fn nested(&self) -> Option<&'static Schema> {
        match self.kind {
            FieldKind::Node(schema) => Some(schema),
            FieldKind::Value(_) => None,
        }
    }

    pub fn value_type(&self) -> Option<ValueType> {
        match self.kind {
            FieldKind::Value(ty) => Some(ty),
            FieldKind::Node(_) => None,
        }
    }

    /// Type of the inline scalar of a value-carrying node: the field's own
    /// type when scalar, else the nested schema's `value` field.
    pub fn inline_type(&self) -> ValueType {
        match self.kind {
            FieldKind::Value(ty) => ty,
            FieldKind::Node(schema) => schema
                .field("value")
                .and_then(|f| f.value_type())
                .unwrap_or(ValueType::Text),
        }
    }

    pub fn is_visible(&self, node: &ConfigNode) -> bool {
        self.condition.is_none_or(|c| c.is_met(node))
    }

    pub fn display_label(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Empty;

    impl Persistable for Empty {
        fn schema(&self) -> &'static Schema {
            &EMPTY
        }
        fn value_text(&self, _field: &str) -> Option<String> {
            None
        }
    }

    static EMPTY: Schema = Schema {
        name: "EMPTY",
        fields: &[],
        construct: || Box::new(Empty),
    };

    static SWITCH: Schema = Schema {
        name: "SWITCH",
        fields: &[
            FieldDescriptor::value("value", ValueType::Bool),
            FieldDescriptor::value("delay", ValueType::Float),
        ],
        construct: || Box::new(Empty),
    };

    #[test]
    fn builders_compose() {
        const F: FieldDescriptor = FieldDescriptor::value("speed", ValueType::Float)
            .optional()
            .tooltip("Top speed")
            .label("Speed");
        assert!(F.optional);
        assert!(!F.as_node);
        assert_eq!(F.tooltip, Some("Top speed"));
        assert_eq!(F.display_label(), "Speed");
        assert!(!F.is_node());
        assert!(F.has_presence_toggle());
    }

    #[test]
    fn as_node_makes_a_box() {
        let f = FieldDescriptor::value("enabled", ValueType::Bool).as_node();
        assert!(f.is_node());
        assert!(f.has_presence_toggle());
        assert!(f.nested().is_none());
        assert_eq!(f.inline_type(), ValueType::Bool);
    }

    #[test]
    fn inline_type_comes_from_nested_value_field() {
        let f = FieldDescriptor::node("switch", &SWITCH).as_node();
        assert_eq!(f.inline_type(), ValueType::Bool);
        let g = FieldDescriptor::node("empty", &EMPTY).as_node();
        assert_eq!(g.inline_type(), ValueType::Text);
    }

    #[test]
    fn reserved_names() {
        assert!(FieldDescriptor::value("body", ValueType::Text).is_reserved());
        assert!(FieldDescriptor::value("value", ValueType::Text).is_reserved());
        assert!(!FieldDescriptor::value("speed", ValueType::Text).is_reserved());
    }

    #[test]
    fn value_conditions_fall_back_to_default() {
        let cond = Condition::ValueIs {
            field: "mode",
            equals: "Manual",
            default: "Auto",
        };
        let mut node = ConfigNode::new("X");
        assert!(!cond.is_met(&node));
        node.add_value("mode", "Manual");
        assert!(cond.is_met(&node));

        let not = Condition::ValueIsNot {
            field: "mode",
            equals: "Manual",
            default: "Auto",
        };
        assert!(!not.is_met(&node));
        node.remove_value("mode");
        assert!(not.is_met(&node));
    }

    #[test]
    fn presence_and_custom_conditions() {
        let mut node = ConfigNode::new("X");
        assert!(!Condition::HasValue("a").is_met(&node));
        assert!(!Condition::HasNode("B").is_met(&node));
        node.add_value("a", "1");
        node.add_node(ConfigNode::new("B"));
        assert!(Condition::HasValue("a").is_met(&node));
        assert!(Condition::HasNode("B").is_met(&node));

        let custom = Condition::Custom(|n| n.nodes().len() > 1);
        assert!(!custom.is_met(&node));
    }

    #[test]
    fn unconditional_fields_are_always_visible() {
        let node = ConfigNode::new("X");
        assert!(FieldDescriptor::value("a", ValueType::Int).is_visible(&node));
        let hidden = FieldDescriptor::value("a", ValueType::Int).when(Condition::HasValue("b"));
        assert!(!hidden.is_visible(&node));
    }

    #[test]
    fn schema_lookup_preserves_order() {
        let names: Vec<_> = SWITCH.fields().map(|f| f.name).collect();
        assert_eq!(names, vec!["value", "delay"]);
        assert!(SWITCH.field("delay").is_some());
        assert!(SWITCH.field("nope").is_none());
        assert_eq!(EMPTY.default_instance().schema().name, "EMPTY");
    }
}
