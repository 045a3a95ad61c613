//! # shenv
//!
//! Encode Rust structs as shell `export NAME='value'` statements.
//!
//! Fields opt in to encoding through tags that name their target variable.
//! Nested structs, `Option`s and smart pointers are walked depth-first, and
//! every reachable scalar becomes one line of the form
//! `export NAME='value'`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shenv::ShellEnv;
//!
//! #[derive(ShellEnv)]
//! struct Config {
//!     #[env(name = "MYVAR")]
//!     greeting: String,
//!     #[env(name = "B")]
//!     count: i32,
//!     ignored: i32,
//! }
//!
//! let config = Config { greeting: "hallo".into(), count: 4711, ignored: 42 };
//! assert_eq!(
//!     shenv::to_string(&config)?,
//!     "export MYVAR='hallo'\nexport B='4711'\n"
//! );
//! ```
//!
//! ## Features
//!
//! | Feature | Description | Default |
//! |---------|-------------|---------|
//! | `derive` | `#[derive(ShellEnv)]` | ✅ |
//! | `serde-compat` | Skip fields marked `#[serde(skip)]` | ✅ |
//! | `chrono` | Support for `chrono::DateTime` values | ❌ |
//! | `uuid` | Support for `uuid::Uuid` values | ❌ |
//!
//! ## Tags
//!
//! A tag has the form `name[,option...]`. The name may be empty. The only
//! option with a meaning is `omitempty`.
//!
//! | Attribute | Tag |
//! |-----------|-----|
//! | `#[env(tag = "NAME,omitempty")]` | the tag verbatim |
//! | `#[env(name = "NAME")]` | `NAME` |
//! | `#[env(omitempty)]` | `,omitempty` |
//! | `#[env(name = "NAME", omitempty)]` | `NAME,omitempty` |
//! | `#[env(skip)]` | field is left out |
//!
//! ## Naming
//!
//! - A declared name is used as-is, however deeply the field is nested.
//! - A field without a declared name inside a named struct is exported as
//!   `PARENT_ident`, where `ident` is the field identifier (after an optional
//!   container `#[env(rename_all = "...")]` rule).
//! - A field without a declared name and without a named parent is not
//!   exported. Nested structs are still walked, so their declared names
//!   still apply.
//!
//! ```rust,ignore
//! use shenv::ShellEnv;
//!
//! #[derive(ShellEnv)]
//! struct Inner {
//!     #[env(name = "MYVAR")]
//!     a: String,
//!     c: String,
//! }
//!
//! #[derive(ShellEnv)]
//! struct Outer {
//!     #[env(name = "S1")]
//!     s1: Inner,
//! }
//!
//! // export MYVAR='hallo'
//! // export S1_c='welt'
//! ```
//!
//! ## Type Mappings
//!
//! | Rust Type | Encoding |
//! |-----------|----------|
//! | integers, `f32`, `f64` | decimal text |
//! | `String`, `&str`, `char`, `PathBuf` | the text as-is |
//! | `IpAddr`, `SocketAddr` | their usual text form |
//! | `Option<T>`, `OnceCell<T>` | `T` under the same name, nothing for `None` |
//! | `&T`, `Box<T>`, `Rc<T>`, `Arc<T>` | `T` |
//! | `#[derive(ShellEnv)]` structs | their fields |
//! | `bool`, collections, tuples, `Duration`, cells and locks, channels, `fn` pointers | [`UnsupportedType`] error when named |
//!
//! ## Errors
//!
//! A tagged field of an unsupported type aborts the whole encode. The
//! error names the type and the path of fields leading to it, using each
//! field's name as written in the struct:
//!
//! ```rust,ignore
//! let err = shenv::to_vec(&config).unwrap_err();
//! assert_eq!(err, shenv::UnsupportedType::new("Vec<String>"));
//! assert_eq!(err.to_string(), "visiting hosts: unsupported type: Vec<String>");
//! ```

pub mod encoder;
pub mod error;
pub mod tag;
pub mod traits;
pub mod types;

pub use encoder::{to_string, to_vec, to_writer, Encoder};
pub use error::{Error, Result, UnsupportedType};
pub use tag::{Tag, TagOptions};
pub use traits::ShellEnv;
pub use types::{Field, Identity, Kind, Scalar, Unsupported};

// Re-export derive macro when available
#[cfg(feature = "derive")]
pub use shenv_macros::ShellEnv;
