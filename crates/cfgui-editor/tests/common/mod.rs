//! Shared fixture types for editor integration tests.
//!
//! `Rover` exercises every field shape the editor handles: plain scalars, an
//! enum, a conditional scalar, the reserved `body`, a required node, an
//! optional node with a conditional field, and two value-carrying nodes.

#![allow(dead_code)]

use cfgui_core::{Condition, FieldDescriptor, Persistable, Schema, ValueType};
use cfgui_editor::{EditorConfig, Placement, Rect, TreeEditor};

pub const MODES: &[&str] = &["Off", "Low", "High"];

pub const BASE: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

pub fn editor() -> TreeEditor {
    TreeEditor::new(EditorConfig::default())
}

pub fn cursor() -> Placement {
    Placement::new(0.0, 0.0, 0.0, 1.0)
}

// ─── Drive ───────────────────────────────────────────────────────────────

pub struct Drive {
    pub torque: f32,
}

impl Default for Drive {
    fn default() -> Self {
        Self { torque: 5.0 }
    }
}

impl Persistable for Drive {
    fn schema(&self) -> &'static Schema {
        &DRIVE
    }
    fn value_text(&self, field: &str) -> Option<String> {
        (field == "torque").then(|| self.torque.to_string())
    }
}

pub static DRIVE: Schema = Schema {
    name: "DRIVE",
    fields: &[FieldDescriptor::value("torque", ValueType::Float)],
    construct: || Box::new(Drive::default()),
};

// ─── Suspension ──────────────────────────────────────────────────────────

pub struct Suspension {
    pub stiffness: f32,
    pub damper: f32,
}

impl Default for Suspension {
    fn default() -> Self {
        Self {
            stiffness: 1.0,
            damper: 0.5,
        }
    }
}

impl Persistable for Suspension {
    fn schema(&self) -> &'static Schema {
        &SUSPENSION
    }
    fn value_text(&self, field: &str) -> Option<String> {
        match field {
            "stiffness" => Some(self.stiffness.to_string()),
            "damper" => Some(self.damper.to_string()),
            _ => None,
        }
    }
}

pub static SUSPENSION: Schema = Schema {
    name: "SUSPENSION",
    fields: &[
        FieldDescriptor::value("stiffness", ValueType::Float),
        FieldDescriptor::value("damper", ValueType::Float).when(Condition::ValueIsNot {
            field: "stiffness",
            equals: "0",
            default: "1",
        }),
    ],
    construct: || Box::new(Suspension::default()),
};

// ─── Switch (value-carrying node) ────────────────────────────────────────

pub struct Switch {
    pub value: bool,
    pub delay: f32,
}

impl Default for Switch {
    fn default() -> Self {
        Self {
            value: false,
            delay: 0.5,
        }
    }
}

impl Persistable for Switch {
    fn schema(&self) -> &'static Schema {
        &SWITCH
    }
    fn value_text(&self, field: &str) -> Option<String> {
        match field {
            "value" => Some(self.value.to_string()),
            "delay" => Some(self.delay.to_string()),
            _ => None,
        }
    }
}

pub static SWITCH: Schema = Schema {
    name: "SWITCH",
    fields: &[
        FieldDescriptor::value("value", ValueType::Bool),
        FieldDescriptor::value("delay", ValueType::Float),
    ],
    construct: || Box::new(Switch::default()),
};

// ─── Rover ───────────────────────────────────────────────────────────────

pub struct Rover {
    pub speed: f32,
    pub enabled_optional: Option<bool>,
    pub body: String,
    pub mode: &'static str,
    pub boost: f32,
    pub drive: Option<Drive>,
    pub suspension: Option<Suspension>,
    pub brake: Switch,
}

impl Default for Rover {
    fn default() -> Self {
        Self {
            speed: 10.0,
            enabled_optional: None,
            body: "Kerbin".into(),
            mode: "Off",
            boost: 2.0,
            drive: None,
            suspension: None,
            brake: Switch::default(),
        }
    }
}

impl Persistable for Rover {
    fn schema(&self) -> &'static Schema {
        &ROVER
    }

    fn value_text(&self, field: &str) -> Option<String> {
        match field {
            "speed" => Some(self.speed.to_string()),
            "enabled_optional" => self.enabled_optional.map(|b| b.to_string()),
            "body" => Some(self.body.clone()),
            "mode" => Some(self.mode.to_string()),
            "boost" => Some(self.boost.to_string()),
            "brake" => Some(self.brake.value.to_string()),
            _ => None,
        }
    }

    fn nested(&self, field: &str) -> Option<&dyn Persistable> {
        match field {
            "drive" => self.drive.as_ref().map(|d| d as &dyn Persistable),
            "suspension" => self.suspension.as_ref().map(|s| s as &dyn Persistable),
            "brake" => Some(&self.brake),
            _ => None,
        }
    }
}

pub static ROVER: Schema = Schema {
    name: "ROVER",
    fields: &[
        FieldDescriptor::value("speed", ValueType::Float).tooltip("Top speed in m/s"),
        FieldDescriptor::value("enabled_optional", ValueType::Bool).as_node(),
        FieldDescriptor::value("body", ValueType::Text),
        FieldDescriptor::value("mode", ValueType::Enum(MODES)),
        FieldDescriptor::value("boost", ValueType::Float).when(Condition::ValueIs {
            field: "mode",
            equals: "High",
            default: "Off",
        }),
        FieldDescriptor::node("drive", &DRIVE),
        FieldDescriptor::node("suspension", &SUSPENSION).optional(),
        FieldDescriptor::node("brake", &SWITCH).as_node().label("Brake"),
    ],
    construct: || Box::new(Rover::default()),
};
