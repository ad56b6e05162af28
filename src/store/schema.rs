//! Field schemas
//!
//! Describes the editable fields of an entity so that one generic table and
//! edit dialog can serve every entity type.

use serde::Serialize;

/// Input widget kind for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "options", rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Email address (no format validation)
    Email,
    /// Phone number (no format validation)
    Phone,
    /// Multi-line free text
    Multiline,
    /// One of a fixed list of values
    Select(&'static [&'static str]),
}

impl FieldKind {
    /// Options offered by a select field, empty for free text
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            FieldKind::Select(options) => options,
            _ => &[],
        }
    }
}

/// A single editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Stable key used in patches and edit buffers
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub kind: FieldKind,
    /// Marked as required in the form (see `FormController::missing_required`)
    pub required: bool,
    /// Value placed in the buffer when creating a new entity
    pub default: &'static str,
}

impl FieldSpec {
    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
            default: "",
        }
    }

    pub const fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }
}

/// Look up a field by key
pub fn find_field(schema: &'static [FieldSpec], key: &str) -> Option<&'static FieldSpec> {
    schema.iter().find(|f| f.key == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &[FieldSpec] = &[
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("tier", "Tier")
            .kind(FieldKind::Select(&["gold", "silver"]))
            .default_value("gold"),
    ];

    #[test]
    fn test_builder() {
        assert!(SCHEMA[0].required);
        assert_eq!(SCHEMA[0].default, "");
        assert_eq!(SCHEMA[1].kind.options(), &["gold", "silver"]);
        assert_eq!(SCHEMA[1].default, "gold");
        assert!(FieldKind::Email.options().is_empty());
    }

    #[test]
    fn test_find_field() {
        assert_eq!(find_field(SCHEMA, "tier").map(|f| f.label), Some("Tier"));
        assert!(find_field(SCHEMA, "missing").is_none());
    }
}
