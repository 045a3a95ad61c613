//! Field parsing logic.
//!
//! Turns one struct field and its attributes into a [`FieldIR`], or into
//! nothing when the field is skipped.

use darling::FromField;
use syn::ext::IdentExt;
use syn::Field;

use crate::ir::FieldIR;
use crate::parser::attributes::{FieldAttrs, RenameRule};

#[cfg(feature = "serde-compat")]
use crate::parser::serde_compat::SerdeFieldAttrs;

/// Error type for field parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldParseError {
    #[error("Failed to parse attributes of field `{field}`: {message}")]
    Attributes { field: String, message: String },

    #[error("Invalid tag on field `{field}`: {message}")]
    Tag { field: String, message: String },
}

/// Parses struct fields into FieldIR.
pub struct FieldParser;

impl FieldParser {
    /// Parse a named or tuple field.
    ///
    /// `index` is the field's position in the struct, used as accessor for
    /// tuple fields. Returns `None` for skipped fields.
    pub fn parse(
        field: &Field,
        index: usize,
        rename_all: Option<RenameRule>,
    ) -> Result<Option<FieldIR>, FieldParseError> {
        let member = match &field.ident {
            Some(ident) => ident.to_string(),
            None => index.to_string(),
        };

        let attrs = FieldAttrs::from_field(field).map_err(|e| FieldParseError::Attributes {
            field: member.clone(),
            message: e.to_string(),
        })?;

        #[cfg(feature = "serde-compat")]
        let should_skip = attrs.skip || SerdeFieldAttrs::from_attrs(&field.attrs).should_skip();

        #[cfg(not(feature = "serde-compat"))]
        let should_skip = attrs.skip;

        if should_skip {
            return Ok(None);
        }

        let tag = attrs.tag().map_err(|message| FieldParseError::Tag {
            field: member.clone(),
            message,
        })?;

        let field_name = match &field.ident {
            Some(ident) => ident.unraw().to_string(),
            None => member.clone(),
        };
        let ident = match rename_all {
            Some(rule) => rule.apply(&field_name),
            None => field_name.clone(),
        };

        Ok(Some(
            FieldIR::new(member)
                .with_field_name(field_name)
                .with_ident(ident)
                .with_tag(tag),
        ))
    }
}
