//! When building or reading a struct goes wrong.

use std::error;
use std::fmt::{self, Debug, Display};
use std::result;

/// This type represents all possible errors that can occur when operating on
/// a struct [`Map`](crate::Map) or one of its views.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// Lookups and insertions return `Result<T, Error>` on hot paths.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `rpc_struct::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Type` - a key was not a string
    /// - `Category::DuplicateKey` - a key was added twice
    /// - `Category::NotFound` - a key was read that is not present
    /// - `Category::InvalidState` - an enumerator was read outside its range
    /// - `Category::Capacity` - a copy destination was too small
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::KeyMustBeAString(_) => Category::Type,
            ErrorCode::DuplicateKey(_) => Category::DuplicateKey,
            ErrorCode::KeyNotFound(_) => Category::NotFound,
            ErrorCode::EnumerationNotStarted | ErrorCode::EnumerationFinished => {
                Category::InvalidState
            }
            ErrorCode::InsufficientCapacity { .. } => Category::Capacity,
        }
    }

    /// Returns true if this error was caused by a key that is not a string.
    pub fn is_type(&self) -> bool {
        self.classify() == Category::Type
    }

    /// Returns true if this error was caused by adding a key that is already
    /// present.
    pub fn is_duplicate_key(&self) -> bool {
        self.classify() == Category::DuplicateKey
    }

    /// Returns true if this error was caused by reading an absent key.
    pub fn is_not_found(&self) -> bool {
        self.classify() == Category::NotFound
    }

    /// Returns true if this error was caused by reading an enumerator before
    /// its first advance or after it was exhausted.
    pub fn is_invalid_state(&self) -> bool {
        self.classify() == Category::InvalidState
    }

    /// Returns true if this error was caused by a copy destination that
    /// cannot hold every entry.
    pub fn is_capacity(&self) -> bool {
        self.classify() == Category::Capacity
    }
}

/// Categorizes the cause of a `rpc_struct::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// A key supplied through the untyped facet was not a string.
    Type,

    /// `add` was called with a key that is already present.
    DuplicateKey,

    /// A key was read that is not present in the map.
    NotFound,

    /// An enumerator was read before the first `move_next` or after the last
    /// entry.
    InvalidState,

    /// The destination of `copy_to` is too small.
    Capacity,
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur when operating on
/// a struct map.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// Key was some other wire type than a string. Carries the wire type name.
    KeyMustBeAString(&'static str),

    /// Key is already present in the map.
    DuplicateKey(Box<str>),

    /// Key is not present in the map.
    KeyNotFound(Box<str>),

    /// Enumerator was read before `move_next` was called.
    EnumerationNotStarted,

    /// Enumerator was read after it ran past the last entry.
    EnumerationFinished,

    /// Copy destination cannot hold every entry starting at the offset.
    InsufficientCapacity {
        /// Slots needed, offset included.
        needed: usize,
        /// Length of the destination.
        available: usize,
    },
}

impl Error {
    #[cold]
    pub(crate) fn key_must_be_a_string(type_name: &'static str) -> Self {
        Error::new(ErrorCode::KeyMustBeAString(type_name))
    }

    #[cold]
    pub(crate) fn duplicate_key(key: &str) -> Self {
        Error::new(ErrorCode::DuplicateKey(key.into()))
    }

    #[cold]
    pub(crate) fn key_not_found(key: &str) -> Self {
        Error::new(ErrorCode::KeyNotFound(key.into()))
    }

    #[cold]
    pub(crate) fn insufficient_capacity(needed: usize, available: usize) -> Self {
        Error::new(ErrorCode::InsufficientCapacity { needed, available })
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::KeyMustBeAString(found) => {
                f.debug_tuple("KeyMustBeAString").field(found).finish()
            }
            ErrorCode::DuplicateKey(key) => f.debug_tuple("DuplicateKey").field(key).finish(),
            ErrorCode::KeyNotFound(key) => f.debug_tuple("KeyNotFound").field(key).finish(),
            ErrorCode::EnumerationNotStarted => f.write_str("EnumerationNotStarted"),
            ErrorCode::EnumerationFinished => f.write_str("EnumerationFinished"),
            ErrorCode::InsufficientCapacity { needed, available } => f
                .debug_struct("InsufficientCapacity")
                .field("needed", needed)
                .field("available", available)
                .finish(),
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::KeyMustBeAString(found) => {
                write!(f, "struct key must be a string, found {}", found)
            }
            ErrorCode::DuplicateKey(key) => write!(f, "duplicate key `{}`", key),
            ErrorCode::KeyNotFound(key) => write!(f, "key `{}` not found", key),
            ErrorCode::EnumerationNotStarted => f.write_str("enumeration has not started"),
            ErrorCode::EnumerationFinished => f.write_str("enumeration has already finished"),
            ErrorCode::InsufficientCapacity { needed, available } => write!(
                f,
                "destination too small: need {} slots, have {}",
                needed, available
            ),
        }
    }
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.code.to_string())
    }
}
