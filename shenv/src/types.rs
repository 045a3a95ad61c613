//! The value model the encoder walks.
//!
//! Every encodable value reports one [`Kind`]: a scalar that becomes one
//! `export` line, a nullable reference, a record of tagged fields, or an
//! unsupported value that can only be skipped or rejected.

use std::borrow::Cow;
use std::fmt;

use crate::traits::ShellEnv;

/// What a value looks like to the encoder.
pub enum Kind<'a> {
    /// A leaf rendered as a single variable.
    Scalar(Scalar<'a>),

    /// A nullable reference. `Some` is encoded as the referenced value under
    /// the same name and options; `None` produces nothing.
    Reference(Option<&'a dyn ShellEnv>),

    /// A record whose fields are visited in declaration order.
    Record(Vec<Field<'a>>),

    /// A value with no shell rendering.
    Unsupported(Unsupported),
}

impl fmt::Debug for Kind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            Kind::Reference(target) => f
                .debug_tuple("Reference")
                .field(&target.map(|value| value.identity().type_name()))
                .finish(),
            Kind::Record(fields) => f.debug_tuple("Record").field(fields).finish(),
            Kind::Unsupported(unsupported) => {
                f.debug_tuple("Unsupported").field(unsupported).finish()
            }
        }
    }
}

/// Scalar values and their textual rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    Int(i128),
    Uint(u128),
    F32(f32),
    F64(f64),
    Char(char),
    Text(Cow<'a, str>),
}

impl Scalar<'_> {
    /// Whether this is the zero value of its kind.
    pub fn is_empty(&self) -> bool {
        match self {
            Scalar::Int(value) => *value == 0,
            Scalar::Uint(value) => *value == 0,
            Scalar::F32(value) => *value == 0.0,
            Scalar::F64(value) => *value == 0.0,
            Scalar::Char(value) => *value == '\0',
            Scalar::Text(value) => value.is_empty(),
        }
    }
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(value) => write!(f, "{value}"),
            Scalar::Uint(value) => write!(f, "{value}"),
            Scalar::F32(value) => write!(f, "{value}"),
            Scalar::F64(value) => write!(f, "{value}"),
            Scalar::Char(value) => write!(f, "{value}"),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

/// One field of a record.
pub struct Field<'a> {
    /// Identifier used in derived variable names.
    pub ident: &'static str,
    /// The field's name as written in the struct, used in error breadcrumbs.
    ///
    /// Equal to `ident` unless the identifier was renamed.
    pub member: &'static str,
    /// Raw tag string, `name[,option...]`.
    pub tag: &'static str,
    pub value: &'a dyn ShellEnv,
}

impl<'a> Field<'a> {
    pub fn new(ident: &'static str, tag: &'static str, value: &'a dyn ShellEnv) -> Self {
        Self {
            ident,
            member: ident,
            tag,
            value,
        }
    }

    /// Report errors under `member` instead of the derived-name identifier.
    pub fn with_member(mut self, member: &'static str) -> Self {
        self.member = member;
        self
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("ident", &self.ident)
            .field("member", &self.member)
            .field("tag", &self.tag)
            .field("type", &self.value.identity().type_name())
            .finish()
    }
}

/// Address and Rust type name of a value.
///
/// A record and its first field share an address but not a type, so both
/// are needed to tell values apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_name: &'static str,
}

impl Identity {
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self {
            address: value as *const T as *const () as usize,
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// A value the encoder cannot render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unsupported {
    type_name: String,
    empty: bool,
}

impl Unsupported {
    pub fn new(type_name: impl Into<String>, empty: bool) -> Self {
        Self {
            type_name: type_name.into(),
            empty,
        }
    }

    /// Describe `T` by its Rust type name without module paths.
    pub fn of<T: ?Sized>(empty: bool) -> Self {
        Self::new(short_type_name(std::any::type_name::<T>()), empty)
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the value is empty (no elements, `false`).
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    pub fn into_type_name(self) -> String {
        self.type_name
    }
}

/// Strip module paths from a Rust type name.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment_start = 0;
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            out.truncate(segment_start);
        } else if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push(c);
            segment_start = out.len();
        }
    }

    out
}
