//! # shenv-macros
//!
//! Procedural macros for encoding Rust structs as shell `export` statements.
//!
//! This crate provides the `#[derive(ShellEnv)]` macro. It is re-exported by
//! `shenv` behind the default `derive` feature and should be used from there.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shenv::ShellEnv;
//!
//! #[derive(ShellEnv)]
//! #[env(rename_all = "SCREAMING_SNAKE_CASE")]
//! struct Database {
//!     #[env(name = "DB_HOST")]
//!     host: String,
//!
//!     #[env(name = "DB_PORT", omitempty)]
//!     port: u16,
//!
//!     #[env(skip)]
//!     pool: Vec<Connection>,
//! }
//! ```
//!
//! ## Attributes
//!
//! ### Container Attributes
//!
//! - `#[env(rename_all = "...")]` - Case convention for field identifiers in
//!   derived names (camelCase, snake_case, PascalCase, SCREAMING_SNAKE_CASE,
//!   kebab-case)
//! - `#[env(crate = "path")]` - Path to the `shenv` crate, for re-exports
//!
//! ### Field Attributes
//!
//! - `#[env(tag = "NAME,omitempty")]` - Raw tag
//! - `#[env(name = "NAME")]` - Declared variable name
//! - `#[env(omitempty)]` - Leave the variable out when the value is empty
//! - `#[env(skip)]` - Leave the field out entirely
//!
//! With the `serde-compat` feature, `#[serde(skip)]` and
//! `#[serde(skip_serializing)]` also leave a field out.

use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

mod codegen;
mod ir;
mod parser;

use codegen::impl_block::ImplBlockGenerator;
use parser::struct_parser::StructParser;

/// Derive macro implementing `shenv::ShellEnv` for a struct.
///
/// # Example
///
/// ```rust,ignore
/// use shenv::ShellEnv;
///
/// #[derive(ShellEnv)]
/// struct Greeting {
///     #[env(name = "MYVAR")]
///     text: String,
/// }
/// ```
#[proc_macro_derive(ShellEnv, attributes(env, serde))]
pub fn derive_shell_env(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);

    match derive_shell_env_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}

/// Parse the struct into a record and generate its impl block.
fn derive_shell_env_impl(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let record = match &input.data {
        Data::Struct(_) => StructParser::parse(input).map_err(|e| convert_parse_error(e, input))?,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ShellEnv cannot be derived for enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "ShellEnv cannot be derived for unions",
            ));
        }
    };

    let generator = ImplBlockGenerator::new();
    generator.generate(&record, &input.generics)
}

/// Convert a StructParseError to a syn::Error with proper span information.
fn convert_parse_error(
    error: parser::struct_parser::StructParseError,
    input: &DeriveInput,
) -> syn::Error {
    use parser::field_parser::FieldParseError;
    use parser::struct_parser::StructParseError;

    match &error {
        StructParseError::ContainerAttrs(msg) => syn::Error::new_spanned(
            &input.ident,
            format!("Invalid container attributes: {}", msg),
        ),
        StructParseError::Field(
            FieldParseError::Attributes { field, .. } | FieldParseError::Tag { field, .. },
        ) => syn::Error::new(field_span(input, field), error.to_string()),
        StructParseError::NotAStruct(kind) => {
            syn::Error::new_spanned(&input.ident, format!("Expected struct, found {}", kind))
        }
    }
}

/// Span of the field whose accessor is `member`, or of the type name.
fn field_span(input: &DeriveInput, member: &str) -> proc_macro2::Span {
    use syn::spanned::Spanned;

    let Data::Struct(data) = &input.data else {
        return input.ident.span();
    };

    data.fields
        .iter()
        .enumerate()
        .find(|(index, field)| match &field.ident {
            Some(ident) => ident == member,
            None => index.to_string() == member,
        })
        .map(|(_, field)| field.span())
        .unwrap_or_else(|| input.ident.span())
}
