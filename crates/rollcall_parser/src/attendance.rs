//! The attendance-marking command parser.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use rollcall_foundation::{Index, parse_date};

use crate::command::CommandParser;
use crate::error::ParseError;
use crate::field;
use crate::syntax::PREFIX_ATTENDANCE_DATE;
use crate::tokenizer::ArgumentTokenizer;

/// A validated request to mark attendance for one or more members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceRequest {
    /// One-based positions of the target members in the displayed list.
    pub indexes: BTreeSet<Index>,
    /// The session date being marked.
    pub date: NaiveDate,
}

/// Parses `attendance` argument strings into [`AttendanceRequest`]s.
///
/// The preamble is a non-empty whitespace-separated list of one-based
/// indexes, followed by exactly one `d/` session date. Malformed indexes
/// and malformed dates are both structural here: the command's shape is
/// "indexes then a date", and input that misses it gets the usage message.
pub struct AttendanceCommandParser;

impl AttendanceCommandParser {
    /// The keyword the dispatcher routes to this parser.
    pub const COMMAND_WORD: &'static str = "attendance";

    /// Usage message carried by this command's structural errors.
    pub const USAGE: &'static str = "attendance: Marks the attendance of the members identified \
         by the index numbers used in the displayed member list. \
         Parameters: INDEX... (each must be a positive integer) d/DATE (in yyyy-MM-dd format)\n\
         Example: attendance 1 2 3 d/2024-02-02";
}

impl CommandParser for AttendanceCommandParser {
    type Request = AttendanceRequest;

    fn parse(&self, args: &str) -> Result<AttendanceRequest, ParseError> {
        let map = ArgumentTokenizer::tokenize(args, &[PREFIX_ATTENDANCE_DATE]);

        if map.preamble().is_empty() {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        if map.has_duplicates(&[PREFIX_ATTENDANCE_DATE]) {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        let Some(raw_date) = map.value(PREFIX_ATTENDANCE_DATE) else {
            return Err(ParseError::invalid_format(Self::USAGE));
        };

        let indexes = field::parse_indexes(map.preamble())
            .map_err(|_| ParseError::invalid_format(Self::USAGE))?;
        let date =
            parse_date(raw_date.trim()).map_err(|_| ParseError::invalid_format(Self::USAGE))?;

        Ok(AttendanceRequest { indexes, date })
    }
}
