//! A member's birthday.

use std::fmt;

use chrono::{Local, NaiveDate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;
use rollcall_foundation::date;

/// A member's birthday.
///
/// Parses under the fixed `yyyy-MM-dd` pattern and must not lie in the
/// future. Today itself is a valid birthday.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Birthdays should be a valid date in yyyy-MM-dd format and should not be in the future";

    /// Validates and wraps a raw birthday, judged against today's date.
    ///
    /// # Errors
    /// Returns a [`FieldFormatError`] if the raw value does not parse or
    /// lies in the future.
    pub fn parse(raw: &str) -> Result<Self, FieldFormatError> {
        Self::parse_as_of(raw, Local::now().date_naive())
    }

    /// Validates a raw birthday against an explicit evaluation date.
    ///
    /// # Errors
    /// Returns a [`FieldFormatError`] if the raw value does not parse or
    /// lies after `today`.
    pub fn parse_as_of(raw: &str, today: NaiveDate) -> Result<Self, FieldFormatError> {
        let parsed =
            date::parse_date(raw).map_err(|_| FieldFormatError::new(Self::MESSAGE_CONSTRAINTS))?;
        if parsed > today {
            return Err(FieldFormatError::new(Self::MESSAGE_CONSTRAINTS));
        }
        Ok(Self(parsed))
    }

    /// Returns the birthday as a calendar date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(date::DATE_PATTERN))
    }
}
