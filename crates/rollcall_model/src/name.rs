//! A member's name.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;

static VALIDATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name validation regex is well-formed")
});

/// A member's name.
///
/// Guaranteed non-empty, alphanumeric characters and spaces only, and not
/// starting with a space.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Name(String);

impl Name {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Validates and wraps a raw name.
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

    /// Returns true if a raw string is a valid name.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        VALIDATION.is_match(raw)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
