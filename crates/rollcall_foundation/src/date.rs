//! Calendar date parsing bound to a single fixed pattern.
//!
//! Every date the system accepts goes through [`parse_date`], so the
//! textual format is identical everywhere a date appears.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// The one textual date pattern the system accepts: `yyyy-MM-dd`.
pub const DATE_PATTERN: &str = "%Y-%m-%d";

/// Parses a raw string as a calendar date under [`DATE_PATTERN`].
///
/// Wrong separators, wrong component order, unpadded components
/// (`2024-5-10`), and impossible calendar days (such as `2024-02-30`) all
/// fail. The input is not trimmed; callers own whitespace handling.
///
/// # Errors
/// Returns an error if `raw` does not parse under the pattern.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    if !has_pattern_shape(raw) {
        return Err(Error::invalid_date(raw));
    }
    NaiveDate::parse_from_str(raw, DATE_PATTERN).map_err(|_| Error::invalid_date(raw))
}

/// Returns true if the string is exactly four digits, a dash, two digits,
/// a dash, two digits.
///
/// chrono's numeric specifiers also accept unpadded and sign-prefixed
/// components, which the fixed pattern must not.
fn has_pattern_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}
