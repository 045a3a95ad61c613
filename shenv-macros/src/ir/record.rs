//! Record IR definitions.
//!
//! A [`RecordIR`] is the parsed form of one struct: its name and the fields
//! that take part in encoding, in declaration order.

use serde::{Deserialize, Serialize};

/// Parsed struct ready for code generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordIR {
    /// Rust type name
    pub rust_name: String,

    /// Encoded fields in declaration order, skipped fields excluded
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldIR>,

    /// Path of the runtime crate, when not `::shenv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crate_path: Option<String>,
}

impl RecordIR {
    /// Create a record with no fields.
    pub fn new(rust_name: impl Into<String>) -> Self {
        Self {
            rust_name: rust_name.into(),
            fields: Vec::new(),
            crate_path: None,
        }
    }

    /// Set the fields.
    pub fn with_fields(mut self, fields: Vec<FieldIR>) -> Self {
        self.fields = fields;
        self
    }

    /// Refer to the runtime crate through `path`.
    pub fn with_crate_path(mut self, path: impl Into<String>) -> Self {
        self.crate_path = Some(path.into());
        self
    }
}

/// One encoded field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldIR {
    /// Accessor on `self`: `host`, `r#type` or a tuple index
    pub member: String,

    /// Field name as written, without `r#`; used in error breadcrumbs
    pub field_name: String,

    /// Identifier used in derived variable names, after `rename_all`
    pub ident: String,

    /// Raw tag, `name[,option...]`
    #[serde(default)]
    pub tag: String,
}

impl FieldIR {
    /// Create a field whose name and identifier equal its accessor.
    pub fn new(member: impl Into<String>) -> Self {
        let member = member.into();
        Self {
            field_name: member.clone(),
            ident: member.clone(),
            member,
            tag: String::new(),
        }
    }

    /// Set the field name reported in errors.
    pub fn with_field_name(mut self, field_name: impl Into<String>) -> Self {
        self.field_name = field_name.into();
        self
    }

    /// Set the identifier used for derived names.
    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = ident.into();
        self
    }

    /// Set the raw tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_ir_creation() {
        let record = RecordIR::new("Config").with_fields(vec![
            FieldIR::new("host").with_tag("HOST"),
            FieldIR::new("port").with_tag(",omitempty"),
        ]);

        assert_eq!(record.rust_name, "Config");
        assert_eq!(record.fields.len(), 2);
        assert_eq!(record.fields[1].ident, "port");
        assert_eq!(record.fields[1].tag, ",omitempty");
        assert!(record.crate_path.is_none());
    }

    #[test]
    fn test_field_ir_raw_identifier() {
        let field = FieldIR::new("r#type")
            .with_field_name("type")
            .with_ident("type");
        assert_eq!(field.member, "r#type");
        assert_eq!(field.field_name, "type");
        assert_eq!(field.ident, "type");
        assert_eq!(field.tag, "");
    }

    #[test]
    fn test_field_ir_renamed_keeps_field_name() {
        let field = FieldIR::new("max_connections").with_ident("MAX_CONNECTIONS");
        assert_eq!(field.field_name, "max_connections");
        assert_eq!(field.ident, "MAX_CONNECTIONS");
    }

    #[test]
    fn test_record_ir_serialization() {
        let record = RecordIR::new("Pair").with_fields(vec![FieldIR::new("0").with_tag("FIRST")]);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "rust_name": "Pair",
                "fields": [{ "member": "0", "field_name": "0", "ident": "0", "tag": "FIRST" }]
            })
        );

        let back: RecordIR = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_empty_record_omits_fields() {
        let record = RecordIR::new("Marker");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"rust_name":"Marker"}"#);

        let back: RecordIR = serde_json::from_str(&json).unwrap();
        assert!(back.fields.is_empty());
    }
}
