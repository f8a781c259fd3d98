//! Integration tests for the rollcall_model crate.
//!
//! Tests for field value objects and the member aggregate:
//! - Per-field constraint tables
//! - Calendar-checked fields against the real clock
//! - Aggregate assembly and round-trips

mod member_tests;
