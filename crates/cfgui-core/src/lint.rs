//! Lint diagnostics for config documents checked against a `Schema`.
//!
//! Reports problems without modifying the document. The editor surfaces the
//! same parse mismatches as error-styled fields; lint lets a host list them.

use crate::node::ConfigNode;
use crate::schema::{FieldKind, Schema};

// ─── Diagnostic types ────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Likely a mistake.
    Warning,
    /// Informational.
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    /// Slash-separated location, e.g. `ROVER/motor/torque`.
    pub path: String,
    pub message: String,
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "parse-mismatch", "unknown-value").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Check `node` (and its described children) against `schema`.
#[must_use]
pub fn lint_node(node: &ConfigNode, schema: &Schema) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    lint_recursive(node, schema, &node.name, &mut diags);
    log::debug!("lint {}: {} diagnostic(s)", node.name, diags.len());
    diags
}

fn lint_recursive(
    node: &ConfigNode,
    schema: &Schema,
    path: &str,
    diags: &mut Vec<LintDiagnostic>,
) {
    for value in &node.values {
        let value_path = format!("{path}/{}", value.name);
        let Some(field) = schema.field(&value.name) else {
            diags.push(LintDiagnostic {
                path: value_path,
                message: format!("`{}` is not a field of {}", value.name, schema.name),
                severity: LintSeverity::Info,
                rule: "unknown-value",
            });
            continue;
        };

        // Value-carrying node fields may store their scalar bare on the parent.
        let ty = match field.kind {
            FieldKind::Value(ty) => ty,
            FieldKind::Node(_) if field.as_node => field.inline_type(),
            FieldKind::Node(_) => {
                diags.push(LintDiagnostic {
                    path: value_path,
                    message: format!("`{}` is a node field but is stored as a value", field.name),
                    severity: LintSeverity::Warning,
                    rule: "value-for-node",
                });
                continue;
            }
        };

        if let Err(e) = ty.check(&value.value) {
            diags.push(LintDiagnostic {
                path: value_path.clone(),
                message: e,
                severity: LintSeverity::Warning,
                rule: "parse-mismatch",
            });
        }

        if !field.is_node() && !field.is_visible(node) {
            diags.push(LintDiagnostic {
                path: value_path,
                message: format!("`{}` is hidden by its condition and will be dropped", field.name),
                severity: LintSeverity::Info,
                rule: "hidden-value",
            });
        }
    }

    for child in node.nodes() {
        let child_path = format!("{path}/{}", child.name);
        let Some(field) = schema.field(&child.name).filter(|f| f.is_node()) else {
            diags.push(LintDiagnostic {
                path: child_path,
                message: format!("`{}` is not a node field of {}", child.name, schema.name),
                severity: LintSeverity::Info,
                rule: "unknown-node",
            });
            continue;
        };

        if let Some(nested) = field.nested() {
            lint_recursive(child, nested, &child_path, diags);
        } else if let Some(text) = child.get_value("value")
            && let Err(e) = field.inline_type().check(text)
        {
            diags.push(LintDiagnostic {
                path: format!("{child_path}/value"),
                message: e,
                severity: LintSeverity::Warning,
                rule: "parse-mismatch",
            });
        }
    }
}
