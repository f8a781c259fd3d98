//! Add command parsing tests.

use rollcall::model::{Email, MatriculationYear, Phone};
use rollcall::parser::{AddCommandParser, CommandParser, ParseError};

const VALID: &str = "n/Alice Tan p/98765432 e/alice@example.com a/311, Clementi Ave 2, #02-25 \
                     bd/2000-01-01 my/2019 i/Violin";

fn parse(args: &str) -> Result<rollcall::parser::AddRequest, ParseError> {
    AddCommandParser.parse(args)
}

#[test]
fn add_round_trips_every_field() {
    let request = parse(&format!("{VALID} t/soprano att/2024-05-10")).unwrap();
    let member = &request.member;

    assert_eq!(member.name.as_str(), "Alice Tan");
    assert_eq!(member.phone.as_str(), "98765432");
    assert_eq!(member.email.as_str(), "alice@example.com");
    assert_eq!(member.address.as_str(), "311, Clementi Ave 2, #02-25");
    assert_eq!(format!("{}", member.birthday), "2000-01-01");
    assert_eq!(member.matriculation_year.year(), 2019);
    assert_eq!(member.instrument.as_str(), "Violin");
    assert_eq!(member.tags.len(), 1);
    assert_eq!(member.attendances.len(), 1);
}

#[test]
fn add_field_order_does_not_matter() {
    let reordered =
        "i/Violin my/2019 bd/2000-01-01 a/311, Clementi Ave 2, #02-25 e/alice@example.com \
         p/98765432 n/Alice Tan";
    assert_eq!(parse(VALID).unwrap(), parse(reordered).unwrap());
}

#[test]
fn add_missing_each_required_prefix_fails_structurally() {
    let required = ["n/", "p/", "e/", "a/", "bd/", "my/", "i/"];
    for marker in required {
        let input: String = VALID
            .split_whitespace()
            .filter(|token| !token.starts_with(marker))
            .collect::<Vec<_>>()
            .join(" ");
        // Dropping only the marked tokens can leave parts of multi-word
        // values behind, which then land in another field's value or the
        // preamble; either way the parse must fail structurally or on a
        // field, never succeed.
        assert!(parse(&input).is_err(), "should reject without {marker}");
    }
}

#[test]
fn add_missing_three_trailing_fields() {
    let err = parse("n/Alice p/98765432 e/a@b.com a/Blk 1").unwrap_err();
    assert_eq!(err, ParseError::invalid_format(AddCommandParser::USAGE));
}

#[test]
fn add_empty_args_fails_structurally() {
    let err = parse("").unwrap_err();
    assert_eq!(err, ParseError::invalid_format(AddCommandParser::USAGE));
}

#[test]
fn add_preamble_forbidden() {
    let err = parse(&format!("oops {VALID}")).unwrap_err();
    assert_eq!(err, ParseError::invalid_format(AddCommandParser::USAGE));
}

#[test]
fn add_duplicate_single_valued_prefix_fails_even_with_valid_values() {
    let err = parse(&format!("{VALID} n/Bob Lim")).unwrap_err();
    assert_eq!(err, ParseError::invalid_format(AddCommandParser::USAGE));

    let err = parse(&format!("{VALID} my/2018")).unwrap_err();
    assert_eq!(err, ParseError::invalid_format(AddCommandParser::USAGE));
}

#[test]
fn add_repeatable_prefixes_allowed() {
    let request = parse(&format!(
        "{VALID} t/soprano t/committee t/soprano att/2024-05-10 att/2024-05-17"
    ))
    .unwrap();
    assert_eq!(request.member.tags.len(), 2);
    assert_eq!(request.member.attendances.len(), 2);
}

#[test]
fn add_invalid_phone_surfaces_phone_constraints() {
    let err = parse(&VALID.replace("p/98765432", "p/98 76")).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidField {
            message: Phone::MESSAGE_CONSTRAINTS
        }
    );
}

#[test]
fn add_invalid_email_surfaces_email_constraints() {
    let err = parse(&VALID.replace("e/alice@example.com", "e/alice.example.com")).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidField {
            message: Email::MESSAGE_CONSTRAINTS
        }
    );
}

#[test]
fn add_future_matriculation_year_surfaces_year_constraints() {
    let err = parse(&VALID.replace("my/2019", "my/2999")).unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidField {
            message: MatriculationYear::MESSAGE_CONSTRAINTS
        }
    );
}

#[test]
fn add_structural_check_wins_over_field_check() {
    // Both a missing prefix and a bad phone: the structural error must
    // surface because no field parsing happens on a malformed shape.
    let err = parse("n/Alice p/bad e/a@b.com a/Blk 1").unwrap_err();
    assert_eq!(err, ParseError::invalid_format(AddCommandParser::USAGE));
}
