//! The field constraint violation error.

use thiserror::Error;

/// A raw value failed its field's constraint.
///
/// Carries the violated constraint's description, taken from the field
/// type's `MESSAGE_CONSTRAINTS` const, so the caller can show the user
/// exactly what shape the field expects.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldFormatError {
    /// Human-readable description of the violated constraint.
    pub message: &'static str,
}

impl FieldFormatError {
    /// Creates a field format error carrying the given constraint message.
    #[must_use]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}
