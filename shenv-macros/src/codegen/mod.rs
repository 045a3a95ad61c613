//! Rust code generation module.
//!
//! This module generates the `impl ShellEnv` block for a parsed record.

pub mod impl_block;

pub use impl_block::ImplBlockGenerator;
