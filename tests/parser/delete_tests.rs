//! Delete command parsing tests.

use rollcall::parser::{CommandParser, DeleteCommandParser, ParseError};

#[test]
fn delete_parses_single_index() {
    let request = DeleteCommandParser.parse("1").unwrap();
    assert_eq!(request.index.one_based(), 1);
    assert_eq!(request.index.zero_based(), 0);
}

#[test]
fn delete_trims_whitespace() {
    let request = DeleteCommandParser.parse("  12  ").unwrap();
    assert_eq!(request.index.one_based(), 12);
}

#[test]
fn delete_rejects_everything_else() {
    for input in ["", "  ", "0", "-1", "+1", "abc", "1 2", "1a"] {
        assert_eq!(
            DeleteCommandParser.parse(input).unwrap_err(),
            ParseError::invalid_format(DeleteCommandParser::USAGE),
            "input: {input:?}"
        );
    }
}
