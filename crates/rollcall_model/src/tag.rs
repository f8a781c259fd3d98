//! Tags attached to members.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;

/// A tag attached to a member, such as a section or committee.
///
/// Alphanumeric only, no whitespace. Members carry a set of tags, so
/// duplicates collapse and ordering is irrelevant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag(String);

impl Tag {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Validates and wraps a raw tag name.
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

    /// Returns true if a raw string is a valid tag name.
    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Returns the tag name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}
