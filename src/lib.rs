//! Rollcall - Roster command parsing and field validation
//!
//! This crate re-exports all layers of the Rollcall core for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: rollcall_parser     — Tokenizer, structural checks, command parsers
//! Layer 1: rollcall_model      — Validated field value objects, Member
//! Layer 0: rollcall_foundation — Error, Index, fixed-pattern dates
//! ```

pub use rollcall_foundation as foundation;
pub use rollcall_model as model;
pub use rollcall_parser as parser;
