//! A member's matriculation year.

use std::fmt;

use chrono::{Datelike, Local};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;

/// A member's matriculation year.
///
/// Exactly four digits, and numerically not after the current calendar
/// year. The current year itself is valid. There is deliberately no lower
/// bound: `0001` is accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatriculationYear(u16);

impl MatriculationYear {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Matriculation year should be in YYYY format and should not be in the future";

    /// Validates and wraps a raw matriculation year, judged against the
    /// current calendar year.
    ///
    /// # Errors
    /// Returns a [`FieldFormatError`] if the raw value is not four digits
    /// or lies after the current year.
    pub fn parse(raw: &str) -> Result<Self, FieldFormatError> {
        Self::parse_as_of(raw, Local::now().year())
    }

    /// Validates a raw matriculation year against an explicit current year.
    ///
    /// # Errors
    /// Returns a [`FieldFormatError`] if the raw value is not four digits
    /// or is numerically greater than `current_year`.
    pub fn parse_as_of(raw: &str, current_year: i32) -> Result<Self, FieldFormatError> {
        // Both checks are required: "99" is two digits, "02024" is five.
        if raw.len() != 4 || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(FieldFormatError::new(Self::MESSAGE_CONSTRAINTS));
        }
        let year: u16 = raw
            .parse()
            .map_err(|_| FieldFormatError::new(Self::MESSAGE_CONSTRAINTS))?;
        if i32::from(year) > current_year {
            return Err(FieldFormatError::new(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(year))
    }

    /// Returns the year as a number.
    #[must_use]
    pub const fn year(self) -> u16 {
        self.0
    }
}

impl fmt::Display for MatriculationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}
