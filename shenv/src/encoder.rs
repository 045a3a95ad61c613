//! The tree-walking encoder.
//!
//! [`Encoder`] walks a value depth-first and appends one
//! `export NAME='value'` line per emitted scalar. Names are resolved from
//! field tags as the walk descends; see [`Tag::effective_name`].
//!
//! Every value is identified by its [`Identity`]. A value is marked before
//! it is dispatched and skipped if it shows up again, so cyclic reference
//! graphs terminate.

use std::collections::HashSet;
use std::io::Write;

use tracing::{debug, trace};

use crate::error::{Result, UnsupportedType};
use crate::tag::Tag;
use crate::traits::ShellEnv;
use crate::types::{Identity, Kind};

/// Encoder state for a single walk.
///
/// [`Encoder::encode`] consumes the encoder, so each call starts with an
/// empty visited set and no two calls share state.
#[derive(Debug, Default)]
pub struct Encoder {
    output: String,
    visited: HashSet<Identity>,
    lines: usize,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `value` into `export` lines.
    ///
    /// Returns no bytes on failure, even if lines were produced before the
    /// failing field.
    pub fn encode(self, value: &dyn ShellEnv) -> Result<Vec<u8>> {
        self.encode_to_string(value).map(String::into_bytes)
    }

    /// Like [`Encoder::encode`], returning the lines as a `String`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(root = value.identity().type_name())
    )]
    pub fn encode_to_string(mut self, value: &dyn ShellEnv) -> Result<String> {
        self.visit(value, "", false)?;
        debug!(
            lines = self.lines,
            bytes = self.output.len(),
            "encoded shell environment"
        );
        Ok(self.output)
    }

    fn visit(&mut self, value: &dyn ShellEnv, name: &str, omit_empty: bool) -> Result<()> {
        let identity = value.identity();
        if !self.visited.insert(identity) {
            trace!(
                variable = name,
                ty = identity.type_name(),
                "skipping already visited value"
            );
            return Ok(());
        }

        match value.kind() {
            Kind::Scalar(scalar) => {
                if !name.is_empty() && !(omit_empty && scalar.is_empty()) {
                    self.emit(name, &scalar);
                }
            }
            Kind::Reference(Some(target)) => self.visit(target, name, omit_empty)?,
            Kind::Reference(None) => {}
            Kind::Record(fields) => {
                for field in fields {
                    let tag = Tag::parse(field.tag);
                    let child = tag.effective_name(name, field.ident);
                    self.visit(field.value, &child, tag.omit_empty())
                        .map_err(|err| err.in_field(field.member))?;
                }
            }
            Kind::Unsupported(unsupported) => {
                if name.is_empty() || (omit_empty && unsupported.is_empty()) {
                    trace!(
                        variable = name,
                        ty = unsupported.type_name(),
                        "skipping unreachable unsupported value"
                    );
                    return Ok(());
                }
                return Err(UnsupportedType::new(unsupported.into_type_name()).into());
            }
        }

        Ok(())
    }

    fn emit(&mut self, name: &str, value: &impl std::fmt::Display) {
        use std::fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = writeln!(self.output, "export {name}='{value}'");
        self.lines += 1;
    }
}

/// Encode `value` as shell `export` statements.
///
/// ```rust
/// use shenv::{Field, Kind, ShellEnv};
///
/// struct Greeting(String);
///
/// impl ShellEnv for Greeting {
///     fn kind(&self) -> Kind<'_> {
///         Kind::Record(vec![Field::new("0", "GREETING", &self.0)])
///     }
/// }
///
/// let bytes = shenv::to_vec(&Greeting("hallo".into())).unwrap();
/// assert_eq!(bytes, b"export GREETING='hallo'\n");
/// ```
pub fn to_vec<T: ShellEnv + ?Sized>(value: &T) -> Result<Vec<u8>> {
    Encoder::new().encode(&value)
}

/// Encode `value` into a `String`.
pub fn to_string<T: ShellEnv + ?Sized>(value: &T) -> Result<String> {
    Encoder::new().encode_to_string(&value)
}

/// Encode `value` and write the result to `writer`.
///
/// Nothing is written unless encoding succeeds.
pub fn to_writer<W: Write, T: ShellEnv + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    let bytes = to_vec(value)?;
    writer.write_all(&bytes)?;
    writer.flush()?;
    Ok(())
}
