//! The aggregate of one member's validated fields.

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::address::Address;
use crate::attendance::Attendance;
use crate::birthday::Birthday;
use crate::email::Email;
use crate::instrument::Instrument;
use crate::matriculation_year::MatriculationYear;
use crate::name::Name;
use crate::phone::Phone;
use crate::tag::Tag;

/// One roster member, assembled from already-validated field values.
///
/// Every field is valid by construction, so a `Member` can never be in an
/// invalid state. Immutable once built; the execution layer consumes it
/// whole.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Member {
    /// The member's name.
    pub name: Name,
    /// The member's phone number.
    pub phone: Phone,
    /// The member's email address.
    pub email: Email,
    /// The member's address.
    pub address: Address,
    /// The member's birthday.
    pub birthday: Birthday,
    /// The year the member matriculated.
    pub matriculation_year: MatriculationYear,
    /// The instrument the member plays.
    pub instrument: Instrument,
    /// Tags attached to the member. Duplicates collapse.
    pub tags: BTreeSet<Tag>,
    /// Sessions the member attended, keyed by date.
    pub attendances: BTreeSet<Attendance>,
}

impl Member {
    /// Assembles a member from validated parts.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        birthday: Birthday,
        matriculation_year: MatriculationYear,
        instrument: Instrument,
        tags: BTreeSet<Tag>,
        attendances: BTreeSet<Attendance>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            birthday,
            matriculation_year,
            instrument,
            tags,
            attendances,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Birthday: {}; Matriculation year: {}; Instrument: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.birthday,
            self.matriculation_year,
            self.instrument,
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: ")?;
            for tag in &self.tags {
                write!(f, "{tag}")?;
            }
        }
        if !self.attendances.is_empty() {
            write!(f, "; Attendances: ")?;
            let mut first = true;
            for attendance in &self.attendances {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{attendance}")?;
                first = false;
            }
        }
        Ok(())
    }
}
