//! Core trait for shell environment encoding.
//!
//! This module defines the [`ShellEnv`] trait, which describes a value to
//! the encoder as one of the variants of [`Kind`].
//!
//! ## Deriving vs Manual Implementation
//!
//! Records are normally derived with `#[derive(ShellEnv)]`:
//!
//! ```rust,ignore
//! use shenv::ShellEnv;
//!
//! #[derive(ShellEnv)]
//! struct Database {
//!     #[env(name = "DB_HOST")]
//!     host: String,
//!     #[env(name = "DB_PORT", omitempty)]
//!     port: u16,
//! }
//! ```
//!
//! The derive expands to a manual implementation like this one:
//!
//! ```rust
//! use shenv::{Field, Kind, ShellEnv};
//!
//! struct Database {
//!     host: String,
//!     port: u16,
//! }
//!
//! impl ShellEnv for Database {
//!     fn kind(&self) -> Kind<'_> {
//!         Kind::Record(vec![
//!             Field::new("host", "DB_HOST", &self.host),
//!             Field::new("port", "DB_PORT,omitempty", &self.port),
//!         ])
//!     }
//! }
//!
//! let db = Database { host: "localhost".into(), port: 0 };
//! assert_eq!(shenv::to_string(&db).unwrap(), "export DB_HOST='localhost'\n");
//! ```
//!
//! ## Blanket Implementations
//!
//! - **Scalars**: integers (`i8`-`i128`, `u8`-`u128`, `isize`, `usize`),
//!   `f32`, `f64`, `char`, `String`, `str`, `Cow<str>`, `Path`, `PathBuf`,
//!   IP and socket addresses
//! - **References**: `Option<T>`, `OnceCell<T>`, `OnceLock<T>`
//! - **Transparent pointers**: `&T`, `&mut T`, `Box<T>`, `Rc<T>`, `Arc<T>`
//! - **Unsupported**: `bool`, `Vec<T>`, `VecDeque<T>`, `[T; N]`, `[T]`, maps,
//!   sets, tuples, `()`, `PhantomData<T>`, `Duration`, `Cell<T>`,
//!   `RefCell<T>`, `Mutex<T>`, `RwLock<T>`, `mpsc` channel ends and function
//!   pointers
//! - **Feature-gated**: `Uuid` (uuid feature), `DateTime<Tz>` (chrono feature)
//!
//! Unsupported types only fail when they end up under a variable name, so
//! they can sit untagged in a derived struct without a named parent.

use std::borrow::Cow;
use std::cell::{Cell, OnceCell, RefCell};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::marker::PhantomData;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::mpsc::{Receiver, Sender, SyncSender};
use std::sync::{Arc, Mutex, OnceLock, RwLock};
use std::time::Duration;

use crate::types::{Identity, Kind, Scalar, Unsupported};

/// Trait for values that can be encoded as shell `export` statements.
///
/// Implementations only describe the value; naming, omit-empty handling and
/// cycle detection are the encoder's job.
pub trait ShellEnv {
    /// Describe this value to the encoder.
    fn kind(&self) -> Kind<'_>;

    /// Identity of the value within a walk: its address and Rust type.
    ///
    /// Transparent pointers report the identity of their pointee, so two
    /// pointers to one value count as the same value.
    fn identity(&self) -> Identity {
        Identity::of(self)
    }
}

// =============================================================================
// Scalars
// =============================================================================

macro_rules! impl_shell_env_for_int {
    ($variant:ident => $($ty:ty),* $(,)?) => {
        $(
            impl ShellEnv for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Scalar(Scalar::$variant(*self as _))
                }
            }
        )*
    };
}

impl_shell_env_for_int!(Int => i8, i16, i32, i64, i128, isize);
impl_shell_env_for_int!(Uint => u8, u16, u32, u64, u128, usize);

impl ShellEnv for f32 {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::F32(*self))
    }
}

impl ShellEnv for f64 {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::F64(*self))
    }
}

impl ShellEnv for char {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Char(*self))
    }
}

impl ShellEnv for str {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Text(Cow::Borrowed(self)))
    }
}

impl ShellEnv for String {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Text(Cow::Borrowed(self)))
    }
}

impl ShellEnv for Cow<'_, str> {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Text(Cow::Borrowed(self)))
    }
}

impl ShellEnv for Path {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Text(self.to_string_lossy()))
    }
}

impl ShellEnv for PathBuf {
    fn kind(&self) -> Kind<'_> {
        self.as_path().kind()
    }
}

macro_rules! impl_shell_env_for_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShellEnv for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Scalar(Scalar::Text(Cow::Owned(self.to_string())))
                }
            }
        )*
    };
}

impl_shell_env_for_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6);

// =============================================================================
// Nullable references
// =============================================================================

impl<T: ShellEnv> ShellEnv for Option<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Reference(self.as_ref().map(|value| value as &dyn ShellEnv))
    }
}

impl<T: ShellEnv> ShellEnv for OnceCell<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Reference(self.get().map(|value| value as &dyn ShellEnv))
    }
}

impl<T: ShellEnv> ShellEnv for OnceLock<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Reference(self.get().map(|value| value as &dyn ShellEnv))
    }
}

// =============================================================================
// Transparent pointers
// =============================================================================

macro_rules! impl_shell_env_for_pointer {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: ShellEnv + ?Sized> ShellEnv for $ptr {
                fn kind(&self) -> Kind<'_> {
                    (**self).kind()
                }

                fn identity(&self) -> Identity {
                    (**self).identity()
                }
            }
        )*
    };
}

impl_shell_env_for_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

// =============================================================================
// Unsupported kinds
// =============================================================================

impl ShellEnv for bool {
    fn kind(&self) -> Kind<'_> {
        Kind::Unsupported(Unsupported::of::<Self>(!*self))
    }
}

macro_rules! impl_shell_env_for_collection {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($params)*> ShellEnv for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Unsupported(Unsupported::of::<Self>(self.is_empty()))
                }
            }
        )*
    };
}

impl_shell_env_for_collection!(
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T] [T],
    [T, const N: usize] [T; N],
    [K, V, S] HashMap<K, V, S>,
    [K, V] BTreeMap<K, V>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
);

macro_rules! impl_shell_env_for_handle {
    ($([$($params:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($params)*> ShellEnv for $ty {
                fn kind(&self) -> Kind<'_> {
                    Kind::Unsupported(Unsupported::of::<Self>(false))
                }
            }
        )*
    };
}

impl_shell_env_for_handle!(
    [T] Sender<T>,
    [T] SyncSender<T>,
    [T] Receiver<T>,
    [T: ?Sized] Cell<T>,
    [T: ?Sized] RefCell<T>,
    [T: ?Sized] Mutex<T>,
    [T: ?Sized] RwLock<T>,
    [R] fn() -> R,
    [A, R] fn(A) -> R,
    [A, B, R] fn(A, B) -> R,
    [A, B, C, R] fn(A, B, C) -> R,
);

// Tuples have no single textual form; their emptiness is not inspected.
impl_shell_env_for_handle!(
    [A] (A,),
    [A, B] (A, B),
    [A, B, C] (A, B, C),
    [A, B, C, D] (A, B, C, D),
    [A, B, C, D, E] (A, B, C, D, E),
    [A, B, C, D, E, F] (A, B, C, D, E, F),
    [A, B, C, D, E, F, G] (A, B, C, D, E, F, G),
    [A, B, C, D, E, F, G, H] (A, B, C, D, E, F, G, H),
);

impl ShellEnv for () {
    fn kind(&self) -> Kind<'_> {
        Kind::Unsupported(Unsupported::of::<Self>(true))
    }
}

impl<T: ?Sized> ShellEnv for PhantomData<T> {
    fn kind(&self) -> Kind<'_> {
        Kind::Unsupported(Unsupported::of::<Self>(true))
    }
}

impl ShellEnv for Duration {
    fn kind(&self) -> Kind<'_> {
        Kind::Unsupported(Unsupported::of::<Self>(self.is_zero()))
    }
}

// =============================================================================
// Feature-gated implementations
// =============================================================================

/// Hyphenated lowercase text. The nil UUID is rendered like any other and
/// is never empty.
#[cfg(feature = "uuid")]
impl ShellEnv for uuid::Uuid {
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Text(Cow::Owned(self.hyphenated().to_string())))
    }
}

/// RFC 3339 text.
#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> ShellEnv for chrono::DateTime<Tz>
where
    Tz::Offset: std::fmt::Display,
{
    fn kind(&self) -> Kind<'_> {
        Kind::Scalar(Scalar::Text(Cow::Owned(self.to_rfc3339())))
    }
}

/// Build the field list of a record.
///
/// Convenience for manual implementations:
///
/// ```rust
/// use shenv::{fields, Kind, ShellEnv};
///
/// struct Proxy {
///     url: String,
///     port: u16,
/// }
///
/// impl ShellEnv for Proxy {
///     fn kind(&self) -> Kind<'_> {
///         Kind::Record(fields![
///             "url" => "HTTP_PROXY", &self.url;
///             "port" => "", &self.port;
///         ])
///     }
/// }
/// ```
#[macro_export]
macro_rules! fields {
    ($($ident:literal => $tag:literal, $value:expr);* $(;)?) => {
        ::std::vec![$($crate::Field::new($ident, $tag, $value)),*]
    };
}
