pub mod capture;
pub mod lint;
pub mod node;
pub mod schema;
pub mod value;

pub use capture::capture;
pub use lint::{LintDiagnostic, LintSeverity, lint_node};
pub use node::{ConfigNode, ConfigValue};
pub use schema::{Condition, FieldDescriptor, FieldKind, Persistable, RESERVED_NAMES, Schema};
pub use value::ValueType;
