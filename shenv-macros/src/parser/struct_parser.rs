//! Struct parsing logic.
//!
//! This module handles parsing Rust struct definitions into IR.
//! It supports:
//! - Named structs
//! - Tuple structs
//! - Unit structs

use darling::FromDeriveInput;
use syn::{Data, DeriveInput, Fields};

use crate::ir::{FieldIR, RecordIR};
use crate::parser::attributes::{ContainerAttrs, RenameRule};
use crate::parser::field_parser::{FieldParseError, FieldParser};

/// Error type for struct parsing failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StructParseError {
    #[error("Failed to parse container attributes: {0}")]
    ContainerAttrs(String),

    #[error(transparent)]
    Field(#[from] FieldParseError),

    #[error("Expected struct, found {0}")]
    NotAStruct(String),
}

/// Parses Rust struct definitions into RecordIR.
pub struct StructParser;

impl StructParser {
    /// Parse a DeriveInput into a RecordIR.
    pub fn parse(input: &DeriveInput) -> Result<RecordIR, StructParseError> {
        let data_struct = match &input.data {
            Data::Struct(s) => s,
            Data::Enum(_) => return Err(StructParseError::NotAStruct("enum".to_string())),
            Data::Union(_) => return Err(StructParseError::NotAStruct("union".to_string())),
        };

        let container_attrs = ContainerAttrs::from_derive_input(input)
            .map_err(|e| StructParseError::ContainerAttrs(e.to_string()))?;
        let rename_all = container_attrs.rename_all;

        let fields = match &data_struct.fields {
            Fields::Named(fields) => Self::parse_fields(&fields.named, rename_all)?,
            Fields::Unnamed(fields) => Self::parse_fields(&fields.unnamed, rename_all)?,
            Fields::Unit => Vec::new(),
        };

        let record = RecordIR::new(container_attrs.ident.to_string()).with_fields(fields);
        Ok(match &container_attrs.crate_path {
            Some(path) => record.with_crate_path(quote::quote!(#path).to_string()),
            None => record,
        })
    }

    /// Parse fields in declaration order, dropping skipped ones.
    ///
    /// Indices are taken before skipping so tuple accessors stay correct.
    fn parse_fields<'a>(
        fields: impl IntoIterator<Item = &'a syn::Field>,
        rename_all: Option<RenameRule>,
    ) -> Result<Vec<FieldIR>, StructParseError> {
        let mut field_irs = Vec::new();

        for (index, field) in fields.into_iter().enumerate() {
            if let Some(field_ir) = FieldParser::parse(field, index, rename_all)? {
                field_irs.push(field_ir);
            }
        }

        Ok(field_irs)
    }
}
