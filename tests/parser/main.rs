//! Integration tests for the rollcall_parser crate.
//!
//! Tests for the argument parsing pipeline:
//! - Tokenization
//! - Multimap semantics
//! - Add command parsing
//! - Attendance command parsing
//! - Delete command parsing
//! - Tokenizer properties

mod add_tests;
mod attendance_tests;
mod delete_tests;
mod tokenizer_tests;
