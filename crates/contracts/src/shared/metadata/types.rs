//! Static schema types describing finance resources
//!
//! All descriptors use 'static lifetimes so a resource's schema is a plain
//! compile-time constant.

use std::collections::BTreeMap;

use super::field_type::{Align, FieldKind};
use super::validation::ValidationRules;

/// Metadata for a single editable field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Key in the JSON payload and in `FormValues`
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub validation: ValidationRules,
}

impl FieldSpec {
    /// Read the raw value from the form and validate it as a string
    pub fn read_string(&self, form: &FormValues) -> Result<String, String> {
        let raw = form.get(self.name);
        self.validation.validate_string(raw, self.label)?;
        if let FieldKind::Select(options) = self.kind {
            if !raw.is_empty() && !options.contains(&raw) {
                return Err(format!("{} has an unknown value: {}", self.label, raw));
            }
        }
        Ok(raw.trim().to_string())
    }

    /// Read the raw value from the form and parse it as a number
    pub fn read_number(&self, form: &FormValues) -> Result<f64, String> {
        self.validation.parse_number(form.get(self.name), self.label)
    }
}

/// Header of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub label: &'static str,
    pub align: Align,
}

impl ColumnSpec {
    pub const fn left(label: &'static str) -> Self {
        Self {
            label,
            align: Align::Left,
        }
    }

    pub const fn right(label: &'static str) -> Self {
        Self {
            label,
            align: Align::Right,
        }
    }
}

/// Raw, unvalidated values of a modal form keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues(BTreeMap<String, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a field, empty string when never set
    pub fn get(&self, name: &str) -> &str {
        self.0.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|v| v.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: FieldSpec = FieldSpec {
        name: "status",
        label: "Status",
        kind: FieldKind::Select(&["Opened", "Closed"]),
        validation: ValidationRules::required(),
    };

    #[test]
    fn select_rejects_unknown_option() {
        let form = FormValues::new().with("status", "Archived");
        assert!(STATUS.read_string(&form).is_err());
        let form = FormValues::new().with("status", "Closed");
        assert_eq!(STATUS.read_string(&form), Ok("Closed".to_string()));
    }

    #[test]
    fn missing_field_reads_as_empty() {
        let form = FormValues::new();
        assert_eq!(form.get("anything"), "");
        assert!(form.is_empty());
        assert_eq!(STATUS.read_string(&form), Err("Status is required".into()));
    }
}
