//! Error types for the Rollcall system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Convenience alias for results carrying a foundation [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for foundation operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid index error.
    #[must_use]
    pub fn invalid_index(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidIndex {
            token: token.into(),
        })
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDate { raw: raw.into() })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// A list index token is not a positive integer.
    #[error("index is not a non-zero unsigned integer: {token}")]
    InvalidIndex {
        /// The offending token.
        token: String,
    },

    /// A date string does not parse under the fixed calendar pattern.
    #[error("date does not match the yyyy-MM-dd pattern: {raw}")]
    InvalidDate {
        /// The offending raw string.
        raw: String,
    },
}
