//! The delete-member command parser.

use rollcall_foundation::Index;

use crate::command::CommandParser;
use crate::error::ParseError;
use crate::field;

/// A validated request to delete one member.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    /// One-based position of the target member in the displayed list.
    pub index: Index,
}

/// Parses `delete` argument strings into [`DeleteRequest`]s.
///
/// The whole argument string is a single one-based index; no prefixes.
pub struct DeleteCommandParser;

impl DeleteCommandParser {
    /// The keyword the dispatcher routes to this parser.
    pub const COMMAND_WORD: &'static str = "delete";

    /// Usage message carried by this command's structural errors.
    pub const USAGE: &'static str = "delete: Deletes the member identified by the index number \
         used in the displayed member list. \
         Parameters: INDEX (must be a positive integer)\n\
         Example: delete 1";
}

impl CommandParser for DeleteCommandParser {
    type Request = DeleteRequest;

    fn parse(&self, args: &str) -> Result<DeleteRequest, ParseError> {
        let index =
            field::parse_index(args).map_err(|_| ParseError::invalid_format(Self::USAGE))?;
        Ok(DeleteRequest { index })
    }
}
