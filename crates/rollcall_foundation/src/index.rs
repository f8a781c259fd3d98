//! One-based indexes into displayed lists.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A one-based index into a displayed list of roster members.
///
/// User-facing commands address members by the position shown in the list,
/// counting from one. The wrapped value is guaranteed non-zero, so the
/// zero-based form never underflows.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Index(usize);

impl Index {
    /// Creates an index from a one-based position.
    ///
    /// # Errors
    /// Returns an error if `position` is zero.
    pub fn from_one_based(position: usize) -> Result<Self> {
        if position == 0 {
            return Err(Error::invalid_index("0"));
        }
        Ok(Self(position))
    }

    /// Parses a raw token as a one-based index.
    ///
    /// The token is trimmed first. Signs, zero, and non-numeric tokens are
    /// all rejected.
    ///
    /// # Errors
    /// Returns an error if the token is not a non-zero unsigned integer.
    pub fn parse(token: &str) -> Result<Self> {
        let trimmed = token.trim();
        // `usize::from_str` accepts a leading '+', which user input must not.
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(Error::invalid_index(trimmed));
        }
        let position: usize = trimmed
            .parse()
            .map_err(|_| Error::invalid_index(trimmed))?;
        Self::from_one_based(position)
    }

    /// Returns the one-based position.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0
    }

    /// Returns the zero-based position.
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Debug for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Index({})", self.0)
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
