//! A member's email address.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;

// local-part: alphanumeric runs joined by single +_.- characters;
// domain: dot-separated labels, alphanumeric with inner hyphens, the last
// label at least two characters long.
static VALIDATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)*[A-Za-z0-9][A-Za-z0-9\-]*[A-Za-z0-9]$",
    )
    .expect("email validation regex is well-formed")
});

/// A member's email address.
///
/// Guaranteed to have a `local@domain` shape as described on
/// [`Email::MESSAGE_CONSTRAINTS`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Email(String);

impl Email {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
         1. The local-part should only contain alphanumeric characters and these special characters, excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
         2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels separated by periods.\n\
         The domain name must:\n\
         - end with a domain label at least 2 characters long\n\
         - have each domain label start and end with alphanumeric characters\n\
         - have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Validates and wraps a raw email address.
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

    /// Returns true if a raw string is a valid email address.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        VALIDATION.is_match(raw)
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
