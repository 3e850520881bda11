//! Object → document capture.
//!
//! Renders every initialised field of a `Persistable` into a fresh node. The
//! editor treats a captured object as the source of default renderings.

use crate::node::ConfigNode;
use crate::schema::{FieldKind, Persistable};

/// Capture `obj` into a new node called `name`.
///
/// Scalar fields become values; initialised nested objects become child
/// nodes. A value-carrying node field contributes both its inline scalar
/// (as a bare value) and its nested node.
#[must_use]
pub fn capture(obj: &dyn Persistable, name: &str) -> ConfigNode {
    let mut node = ConfigNode::new(name);
    for field in obj.schema().fields() {
        if let Some(text) = obj.value_text(field.name) {
            node.add_value(field.name, text);
        }
        if let FieldKind::Node(_) = field.kind
            && let Some(sub) = obj.nested(field.name)
        {
            node.add_node(capture(sub, field.name));
        }
    }
    log::trace!("captured {name}: {} value(s), {} node(s)", node.values.len(), node.nodes.len());
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, Schema};
    use crate::value::ValueType;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Motor {
        torque: f32,
    }

    impl Persistable for Motor {
        fn schema(&self) -> &'static Schema {
            &MOTOR
        }
        fn value_text(&self, field: &str) -> Option<String> {
            (field == "torque").then(|| self.torque.to_string())
        }
    }

    static MOTOR: Schema = Schema {
        name: "MOTOR",
        fields: &[FieldDescriptor::value("torque", ValueType::Float)],
        construct: || Box::new(Motor::default()),
    };

    struct Rover {
        name: Option<String>,
        wheels: i64,
        motor: Option<Motor>,
        spare: Option<Motor>,
    }

    impl Persistable for Rover {
        fn schema(&self) -> &'static Schema {
            &ROVER
        }
        fn value_text(&self, field: &str) -> Option<String> {
            match field {
                "name" => self.name.clone(),
                "wheels" => Some(self.wheels.to_string()),
                _ => None,
            }
        }
        fn nested(&self, field: &str) -> Option<&dyn Persistable> {
            match field {
                "motor" => self.motor.as_ref().map(|m| m as &dyn Persistable),
                "spare" => self.spare.as_ref().map(|m| m as &dyn Persistable),
                _ => None,
            }
        }
    }

    static ROVER: Schema = Schema {
        name: "ROVER",
        fields: &[
            FieldDescriptor::value("name", ValueType::Text),
            FieldDescriptor::value("wheels", ValueType::Int),
            FieldDescriptor::node("motor", &MOTOR),
            FieldDescriptor::node("spare", &MOTOR).optional(),
        ],
        construct: || {
            Box::new(Rover {
                name: None,
                wheels: 4,
                motor: None,
                spare: None,
            })
        },
    };

    #[test]
    fn captures_initialised_fields_only() {
        let rover = Rover {
            name: None,
            wheels: 6,
            motor: Some(Motor { torque: 2.5 }),
            spare: None,
        };
        let node = capture(&rover, "TMP");

        assert_eq!(node.name, "TMP");
        assert_eq!(node.get_value("wheels"), Some("6"));
        assert!(!node.has_value("name"));
        assert_eq!(
            node.get_node("motor").and_then(|m| m.get_value("torque")),
            Some("2.5")
        );
        assert!(!node.has_node("spare"));
    }

    #[test]
    fn default_instance_capture() {
        let node = capture(ROVER.default_instance().as_ref(), "ROVER");
        assert_eq!(node.values.len(), 1);
        assert_eq!(node.get_value("wheels"), Some("4"));
        assert!(node.nodes().is_empty());
    }
}
