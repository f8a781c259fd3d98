//! The add-member command parser.

use rollcall_model::Member;

use crate::command::CommandParser;
use crate::error::ParseError;
use crate::field;
use crate::syntax::{
    PREFIX_ADDRESS, PREFIX_ATTENDANCE, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_INSTRUMENT,
    PREFIX_MATRICULATION_YEAR, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG, Prefix,
};
use crate::tokenizer::ArgumentTokenizer;

/// A validated request to add one member to the roster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddRequest {
    /// The member to add, valid by construction.
    pub member: Member,
}

/// Parses `add` argument strings into [`AddRequest`]s.
///
/// Requires `n/ p/ e/ a/ bd/ my/ i/` exactly once each and an empty
/// preamble; `t/` and `att/` may repeat.
pub struct AddCommandParser;

impl AddCommandParser {
    /// The keyword the dispatcher routes to this parser.
    pub const COMMAND_WORD: &'static str = "add";

    /// Usage message carried by this command's structural errors.
    pub const USAGE: &'static str = "add: Adds a member to the roster. \
         Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS bd/BIRTHDAY my/MATRICULATION_YEAR i/INSTRUMENT [t/TAG]... [att/ATTENDANCE]...\n\
         Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 bd/2000-01-01 my/2019 i/Trumpet t/friends att/2024-02-02";

    /// Prefixes this command tokenizes against.
    const PREFIXES: [Prefix; 9] = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_BIRTHDAY,
        PREFIX_MATRICULATION_YEAR,
        PREFIX_INSTRUMENT,
        PREFIX_TAG,
        PREFIX_ATTENDANCE,
    ];

    /// Prefixes that must appear exactly once.
    const SINGLE_VALUED: [Prefix; 7] = [
        PREFIX_NAME,
        PREFIX_PHONE,
        PREFIX_EMAIL,
        PREFIX_ADDRESS,
        PREFIX_BIRTHDAY,
        PREFIX_MATRICULATION_YEAR,
        PREFIX_INSTRUMENT,
    ];
}

impl CommandParser for AddCommandParser {
    type Request = AddRequest;

    fn parse(&self, args: &str) -> Result<AddRequest, ParseError> {
        let map = ArgumentTokenizer::tokenize(args, &Self::PREFIXES);

        // Structural checks come first; no field is validated unless the
        // whole shape is right.
        let (
            Some(raw_name),
            Some(raw_phone),
            Some(raw_email),
            Some(raw_address),
            Some(raw_birthday),
            Some(raw_year),
            Some(raw_instrument),
        ) = (
            map.value(PREFIX_NAME),
            map.value(PREFIX_PHONE),
            map.value(PREFIX_EMAIL),
            map.value(PREFIX_ADDRESS),
            map.value(PREFIX_BIRTHDAY),
            map.value(PREFIX_MATRICULATION_YEAR),
            map.value(PREFIX_INSTRUMENT),
        )
        else {
            return Err(ParseError::invalid_format(Self::USAGE));
        };
        if !map.preamble().is_empty() {
            return Err(ParseError::invalid_format(Self::USAGE));
        }
        if map.has_duplicates(&Self::SINGLE_VALUED) {
            return Err(ParseError::invalid_format(Self::USAGE));
        }

        let name = field::parse_name(raw_name)?;
        let phone = field::parse_phone(raw_phone)?;
        let email = field::parse_email(raw_email)?;
        let address = field::parse_address(raw_address)?;
        let birthday = field::parse_birthday(raw_birthday)?;
        let matriculation_year = field::parse_matriculation_year(raw_year)?;
        let instrument = field::parse_instrument(raw_instrument)?;
        let tags = field::parse_tags(map.all_values(PREFIX_TAG))?;
        let attendances = field::parse_attendances(map.all_values(PREFIX_ATTENDANCE))?;

        Ok(AddRequest {
            member: Member::new(
                name,
                phone,
                email,
                address,
                birthday,
                matriculation_year,
                instrument,
                tags,
                attendances,
            ),
        })
    }
}
