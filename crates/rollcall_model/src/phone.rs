//! A member's phone number.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;

/// A member's phone number.
///
/// Digits only, at least 3 of them. No separators, country codes, or
/// extensions; the raw digits are stored as typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Phone(String);

impl Phone {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Validates and wraps a raw phone number.
    ///
    /// # Errors
    /// Returns a [`FieldFormatError`] if the raw value violates the
    /// constraint.
    pub fn parse(raw: &str) -> Result<Self, FieldFormatError> {
        if !Self::is_valid(raw) {
            return Err(FieldFormatError::new(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(raw.to_string()))
    }

    /// Returns true if a raw string is a valid phone number.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        raw.len() >= 3 && raw.chars().all(|c| c.is_ascii_digit())
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
