//! Tokenizer tests.
//!
//! Tests for splitting raw argument strings on prefix markers.

use rollcall::parser::syntax::{
    ALL_PREFIXES, PREFIX_ATTENDANCE, PREFIX_BIRTHDAY, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_TAG,
};
use rollcall::parser::ArgumentTokenizer;

#[test]
fn tokenize_full_add_style_input() {
    let map = ArgumentTokenizer::tokenize(
        "n/Alice p/98765432 e/alice@example.com a/123 Main St bd/2000-01-01 my/2023 i/violin t/soprano",
        &ALL_PREFIXES,
    );

    assert_eq!(map.preamble(), "");
    assert_eq!(map.value(PREFIX_NAME), Some("Alice"));
    assert_eq!(map.value(PREFIX_PHONE), Some("98765432"));
    assert_eq!(map.value(PREFIX_EMAIL), Some("alice@example.com"));
    assert_eq!(map.value(PREFIX_BIRTHDAY), Some("2000-01-01"));
    assert_eq!(map.all_values(PREFIX_TAG), ["soprano"]);
}

#[test]
fn tokenize_multiword_values_span_until_next_marker() {
    let map = ArgumentTokenizer::tokenize("n/Alice Jane Tan p/123", &ALL_PREFIXES);
    assert_eq!(map.value(PREFIX_NAME), Some("Alice Jane Tan"));
}

#[test]
fn tokenize_prefix_like_substring_in_value() {
    // The "e/" in the email value touches the text before it, so it is
    // not at a token boundary and must not split the value.
    let map = ArgumentTokenizer::tokenize("e/alice/e/x@example.com p/123", &ALL_PREFIXES);
    assert_eq!(map.value(PREFIX_EMAIL), Some("alice/e/x@example.com"));
    assert_eq!(map.value(PREFIX_PHONE), Some("123"));
}

#[test]
fn tokenize_repeatable_prefixes_preserve_encounter_order() {
    let map = ArgumentTokenizer::tokenize(
        "t/one att/2024-01-05 t/two att/2024-01-12 t/three",
        &ALL_PREFIXES,
    );
    assert_eq!(map.all_values(PREFIX_TAG), ["one", "two", "three"]);
    assert_eq!(
        map.all_values(PREFIX_ATTENDANCE),
        ["2024-01-05", "2024-01-12"]
    );
}

#[test]
fn tokenize_preamble_is_trimmed() {
    let map = ArgumentTokenizer::tokenize("   1 2 3   n/Alice", &ALL_PREFIXES);
    assert_eq!(map.preamble(), "1 2 3");
}

#[test]
fn tokenize_no_markers_everything_is_preamble() {
    let map = ArgumentTokenizer::tokenize("delete 3 please", &[PREFIX_NAME]);
    assert_eq!(map.preamble(), "delete 3 please");
    assert!(!map.contains(PREFIX_NAME));
}

#[test]
fn tokenize_marker_at_start_of_string_recognized() {
    let map = ArgumentTokenizer::tokenize("n/Alice", &ALL_PREFIXES);
    assert_eq!(map.value(PREFIX_NAME), Some("Alice"));
    assert_eq!(map.preamble(), "");
}

#[test]
fn tokenize_longer_marker_not_split_by_shorter() {
    // "att/" must not be read as preamble "at" plus marker "t/".
    let map = ArgumentTokenizer::tokenize("att/2024-01-05", &ALL_PREFIXES);
    assert_eq!(map.all_values(PREFIX_ATTENDANCE), ["2024-01-05"]);
    assert!(!map.contains(PREFIX_TAG));
    assert_eq!(map.preamble(), "");
}
