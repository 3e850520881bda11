//! Scalar field types and their text parse checks.
//!
//! Documents store every scalar as text. A value that does not parse into its
//! declared type is still kept verbatim; the check only drives error styling
//! in the editor and `parse-mismatch` lint diagnostics.

/// Declared type of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    Int,
    Float,
    Text,
    /// Fixed-arity vector written as comma-separated floats (`1,0,0`).
    Vector(u8),
    /// Enumeration; the document stores the member name.
    Enum(&'static [&'static str]),
}

impl ValueType {
    /// Check that `text` converts into this type.
    ///
    /// # Errors
    /// Returns a human-readable description of the mismatch.
    pub fn check(&self, text: &str) -> Result<(), String> {
        let text = text.trim();
        match self {
            ValueType::Bool => {
                if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
                    Ok(())
                } else {
                    Err(format!("`{text}` is not a boolean"))
                }
            }
            ValueType::Int => text
                .parse::<i64>()
                .map(|_| ())
                .map_err(|e| format!("`{text}` is not an integer: {e}")),
            ValueType::Float => text
                .parse::<f64>()
                .map(|_| ())
                .map_err(|e| format!("`{text}` is not a number: {e}")),
            ValueType::Text => Ok(()),
            ValueType::Vector(arity) => {
                let parts: Vec<&str> = text.split(',').collect();
                if parts.len() != usize::from(*arity) {
                    return Err(format!(
                        "expected {arity} components, found {}",
                        parts.len()
                    ));
                }
                for part in parts {
                    part.trim()
                        .parse::<f64>()
                        .map_err(|e| format!("vector component `{}`: {e}", part.trim()))?;
                }
                Ok(())
            }
            ValueType::Enum(names) => {
                if names.contains(&text) {
                    Ok(())
                } else {
                    Err(format!("`{text}` is not one of {}", names.join(", ")))
                }
            }
        }
    }

    pub fn can_parse(&self, text: &str) -> bool {
        self.check(text).is_ok()
    }

    /// Enum domain, if this is an enumerated type.
    pub fn enum_names(&self) -> Option<&'static [&'static str]> {
        match *self {
            ValueType::Enum(names) => Some(names),
            _ => None,
        }
    }
}
