//! Intermediate Representation (IR) module.
//!
//! The parser lowers a struct into a [`RecordIR`]; the code generator turns
//! that into the `impl ShellEnv` block.

pub mod record;

pub use record::{FieldIR, RecordIR};
