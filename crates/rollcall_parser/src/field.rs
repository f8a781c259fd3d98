//! Per-field validation helpers shared by the command parsers.
//!
//! Thin wrappers over the model's validating constructors: each helper
//! trims its input, delegates to the owning type, and lifts the failure
//! into a [`ParseError`]. Callers invoke a helper only after confirming
//! the field was actually supplied; an empty string is a present value
//! that simply fails its constraint.

use std::collections::BTreeSet;

use rollcall_foundation::{Index, Result as FoundationResult};
use rollcall_model::{
    Address, Attendance, Birthday, Email, Instrument, MatriculationYear, Name, Phone, Tag,
};

use crate::error::ParseError;

/// Parses a raw name.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is invalid.
pub fn parse_name(raw: &str) -> Result<Name, ParseError> {
    Ok(Name::parse(raw.trim())?)
}

/// Parses a raw phone number.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is invalid.
pub fn parse_phone(raw: &str) -> Result<Phone, ParseError> {
    Ok(Phone::parse(raw.trim())?)
}

/// Parses a raw email address.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is invalid.
pub fn parse_email(raw: &str) -> Result<Email, ParseError> {
    Ok(Email::parse(raw.trim())?)
}

/// Parses a raw address.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is invalid.
pub fn parse_address(raw: &str) -> Result<Address, ParseError> {
    Ok(Address::parse(raw.trim())?)
}

/// Parses a raw birthday.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is malformed
/// or in the future.
pub fn parse_birthday(raw: &str) -> Result<Birthday, ParseError> {
    Ok(Birthday::parse(raw.trim())?)
}

/// Parses a raw matriculation year.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is not four
/// digits or is after the current year.
pub fn parse_matriculation_year(raw: &str) -> Result<MatriculationYear, ParseError> {
    Ok(MatriculationYear::parse(raw.trim())?)
}

/// Parses a raw instrument.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is invalid.
pub fn parse_instrument(raw: &str) -> Result<Instrument, ParseError> {
    Ok(Instrument::parse(raw.trim())?)
}

/// Parses a raw tag name.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value is invalid.
pub fn parse_tag(raw: &str) -> Result<Tag, ParseError> {
    Ok(Tag::parse(raw.trim())?)
}

/// Parses a sequence of raw tag values into a set.
///
/// Each value is validated independently; duplicates collapse.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] on the first invalid value.
pub fn parse_tags(raws: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
    raws.iter().map(|raw| parse_tag(raw)).collect()
}

/// Parses a raw attendance date.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] if the trimmed value does not
/// parse under the fixed date pattern.
pub fn parse_attendance(raw: &str) -> Result<Attendance, ParseError> {
    Ok(Attendance::parse(raw.trim())?)
}

/// Parses a sequence of raw attendance dates into a set.
///
/// Attendance records are keyed by date, so duplicates collapse.
///
/// # Errors
/// Returns [`ParseError::InvalidField`] on the first invalid value.
pub fn parse_attendances(raws: &[String]) -> Result<BTreeSet<Attendance>, ParseError> {
    raws.iter().map(|raw| parse_attendance(raw)).collect()
}

/// Parses a single one-based index token.
///
/// # Errors
/// Returns a foundation error if the token is not a positive integer; the
/// calling parser maps it to its own usage message.
pub fn parse_index(token: &str) -> FoundationResult<Index> {
    Index::parse(token)
}

/// Parses a whitespace-separated sequence of one-based index tokens.
///
/// Duplicates collapse. An empty or all-whitespace input yields an empty
/// set; callers that require at least one target reject that themselves.
///
/// # Errors
/// Returns a foundation error on the first token that is not a positive
/// integer.
pub fn parse_indexes(preamble: &str) -> FoundationResult<BTreeSet<Index>> {
    preamble.split_whitespace().map(Index::parse).collect()
}
