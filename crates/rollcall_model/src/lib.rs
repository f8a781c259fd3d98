//! Validated field value objects and the member aggregate for Rollcall.
//!
//! Every field of a roster member is a newtype wrapper that can only be
//! constructed through a validating `parse` function, so a value of one of
//! these types is valid by construction and stays valid forever.
//!
//! # Modules
//!
//! - [`error`] - The field constraint violation error
//! - [`name`], [`phone`], [`email`], [`address`] - Identity and contact fields
//! - [`birthday`], [`matriculation_year`] - Calendar-checked fields
//! - [`instrument`], [`tag`] - Ensemble fields
//! - [`attendance`] - Date-keyed attendance records
//! - [`member`] - The aggregate of one member's validated fields

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod attendance;
pub mod birthday;
pub mod email;
pub mod error;
pub mod instrument;
pub mod matriculation_year;
pub mod member;
pub mod name;
pub mod phone;
pub mod tag;

pub use address::Address;
pub use attendance::Attendance;
pub use birthday::Birthday;
pub use email::Email;
pub use error::FieldFormatError;
pub use instrument::Instrument;
pub use matriculation_year::MatriculationYear;
pub use member::Member;
pub use name::Name;
pub use phone::Phone;
pub use tag::Tag;
