//! Error types for shell environment encoding.
//!
//! Encoding fails for exactly one reason: a reachable field holds a value the
//! encoder cannot render as a single shell variable (a collection, a channel,
//! a function pointer, a `bool`). That cause is [`UnsupportedType`]. On its
//! way out of the walk it is wrapped once per enclosing record in
//! [`Error::Field`], which records which field was being visited.
//!
//! ```rust
//! use shenv::{Error, UnsupportedType};
//!
//! let err = Error::from(UnsupportedType::new("Vec<String>")).in_field("hosts");
//! assert_eq!(err.to_string(), "visiting hosts: unsupported type: Vec<String>");
//! assert_eq!(err, UnsupportedType::new("Vec<String>"));
//! ```

use std::io;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A reachable field holds a value of a type that has no shell rendering.
///
/// Carries the textual description of the offending type, e.g.
/// `Vec<String>`, `[String; 2]` or `BTreeMap<String, i32>`. The value is
/// comparable, so callers can test for it without matching on messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("unsupported type: {0}")]
pub struct UnsupportedType(pub String);

impl UnsupportedType {
    /// Create an error for the given type description.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self(type_name.into())
    }

    /// The description of the unsupported type.
    pub fn type_name(&self) -> &str {
        &self.0
    }
}

/// Errors produced while encoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedType),

    /// Failure inside a record field, labelled with the field's identifier.
    #[error("visiting {field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to write encoded output: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Wrap this error with the identifier of the field being visited.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Error::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// The innermost cause, with all field breadcrumbs removed.
    pub fn root(&self) -> &Error {
        let mut current = self;
        while let Error::Field { source, .. } = current {
            current = &**source;
        }
        current
    }

    /// The unsupported type at the bottom of the chain, if that is the cause.
    pub fn unsupported_type(&self) -> Option<&UnsupportedType> {
        match self.root() {
            Error::UnsupportedType(inner) => Some(inner),
            _ => None,
        }
    }

    /// Check whether the root cause is an [`UnsupportedType`] error.
    pub fn is_unsupported_type(&self) -> bool {
        self.unsupported_type().is_some()
    }

    /// Field identifiers from the outermost record down to the failing field.
    pub fn field_path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        let mut current = self;
        while let Error::Field { field, source } = current {
            path.push(field.as_str());
            current = &**source;
        }
        path
    }
}

impl PartialEq<UnsupportedType> for Error {
    fn eq(&self, other: &UnsupportedType) -> bool {
        self.unsupported_type() == Some(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn nested() -> Error {
        Error::from(UnsupportedType::new("[String; 2]"))
            .in_field("A")
            .in_field("S1")
    }

    #[test]
    fn test_unsupported_type_display() {
        let err = UnsupportedType::new("Vec<String>");
        assert_eq!(err.to_string(), "unsupported type: Vec<String>");
        assert_eq!(err.type_name(), "Vec<String>");
    }

    #[test]
    fn test_field_breadcrumbs_display() {
        assert_eq!(
            nested().to_string(),
            "visiting S1: visiting A: unsupported type: [String; 2]"
        );
    }

    #[test]
    fn test_field_path() {
        assert_eq!(nested().field_path(), vec!["S1", "A"]);
        assert!(Error::from(UnsupportedType::new("bool"))
            .field_path()
            .is_empty());
    }

    #[test]
    fn test_identity_comparison_through_chain() {
        let err = nested();
        assert!(err.is_unsupported_type());
        assert_eq!(err, UnsupportedType::new("[String; 2]"));
        assert_ne!(err, UnsupportedType::new("Vec<String>"));
    }

    #[test]
    fn test_source_chain() {
        let err = nested();
        let source = err.source().expect("field error has a source");
        assert_eq!(
            source.to_string(),
            "visiting A: unsupported type: [String; 2]"
        );
    }

    #[test]
    fn test_io_error_is_not_unsupported() {
        let err = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(!err.is_unsupported_type());
        assert!(err.unsupported_type().is_none());
    }
}
