//! The two parse-error kinds.

use thiserror::Error;

use rollcall_model::FieldFormatError;

/// Why a command's argument string was rejected.
///
/// Exactly two kinds exist. Structural problems (missing required prefix,
/// unexpected preamble, duplicated single-valued prefix, malformed index
/// list) carry the command's usage string. Field problems carry the
/// violated constraint's description. The first error detected aborts the
/// whole parse; no partially validated request is ever produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The argument string does not fit the command's shape.
    #[error("Invalid command format! \n{usage}")]
    InvalidFormat {
        /// The rejecting command's usage message.
        usage: &'static str,
    },

    /// A present field value violates its constraint.
    #[error("{message}")]
    InvalidField {
        /// The violated constraint's description.
        message: &'static str,
    },
}

impl ParseError {
    /// Creates a structural format error carrying the given usage message.
    #[must_use]
    pub const fn invalid_format(usage: &'static str) -> Self {
        Self::InvalidFormat { usage }
    }
}

impl From<FieldFormatError> for ParseError {
    fn from(err: FieldFormatError) -> Self {
        Self::InvalidField {
            message: err.message,
        }
    }
}
