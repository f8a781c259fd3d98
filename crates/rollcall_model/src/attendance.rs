//! Date-keyed attendance records.

use std::fmt;

use chrono::NaiveDate;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::FieldFormatError;

/// A record of one session a member attended.
///
/// Keyed entirely by its calendar date: two attendances on the same date
/// are the same attendance, so a member's records form a set. Parses under
/// the fixed `yyyy-MM-dd` pattern; unlike [`Birthday`](crate::Birthday),
/// future dates are allowed (sessions can be recorded in advance).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Attendance(NaiveDate);

impl Attendance {
    /// Constraint description shown when validation fails.
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Attendance should be a valid date in yyyy-MM-dd format";

    /// Validates and wraps a raw attendance date.
    ///
    /// # Errors
    /// Returns a [`FieldFormatError`] if the raw value does not parse
    /// under the pattern.
    pub fn parse(raw: &str) -> Result<Self, FieldFormatError> {
        let parsed = rollcall_foundation::parse_date(raw)
            .map_err(|_| FieldFormatError::new(Self::MESSAGE_CONSTRAINTS))?;
        Ok(Self(parsed))
    }

    /// Returns the attended date.
    #[must_use]
    pub const fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Attendance {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for Attendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(rollcall_foundation::DATE_PATTERN))
    }
}
