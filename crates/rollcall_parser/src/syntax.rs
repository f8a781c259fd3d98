//! The prefix markers commands recognize.
//!
//! A prefix is a short literal marker that introduces a field value in a
//! command's argument string, such as `n/` for a name. This module is the
//! system-wide registry of markers.

use std::fmt;

/// A field marker in a command's argument string.
///
/// Copyable handle around the literal marker text. Equality and hashing
/// are by marker, so a `Prefix` works directly as a map key.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// Creates a prefix from its literal marker.
    #[must_use]
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    /// Returns the literal marker text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Debug for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Prefix({})", self.0)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Marker for a member's name.
pub const PREFIX_NAME: Prefix = Prefix::new("n/");
/// Marker for a member's phone number.
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
/// Marker for a member's email address.
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
/// Marker for a member's address.
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
/// Marker for a member's birthday.
pub const PREFIX_BIRTHDAY: Prefix = Prefix::new("bd/");
/// Marker for a member's matriculation year.
pub const PREFIX_MATRICULATION_YEAR: Prefix = Prefix::new("my/");
/// Marker for the instrument a member plays.
pub const PREFIX_INSTRUMENT: Prefix = Prefix::new("i/");
/// Marker for a tag. Repeatable.
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
/// Marker for an attendance record on a member. Repeatable.
pub const PREFIX_ATTENDANCE: Prefix = Prefix::new("att/");
/// Marker for the session date of an attendance command.
pub const PREFIX_ATTENDANCE_DATE: Prefix = Prefix::new("d/");

/// Every marker the system recognizes, across all commands.
pub const ALL_PREFIXES: [Prefix; 10] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_BIRTHDAY,
    PREFIX_MATRICULATION_YEAR,
    PREFIX_INSTRUMENT,
    PREFIX_TAG,
    PREFIX_ATTENDANCE,
    PREFIX_ATTENDANCE_DATE,
];
