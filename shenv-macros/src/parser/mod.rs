//! Parser module for extracting record information from the Rust AST.
//!
//! This module contains parsers for:
//! - Struct definitions
//! - Struct fields
//! - `#[env(...)]` attributes

pub mod attributes;
pub mod field_parser;
pub mod struct_parser;

#[cfg(feature = "serde-compat")]
pub mod serde_compat;
