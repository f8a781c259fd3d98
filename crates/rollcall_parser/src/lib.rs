//! Command-argument tokenization and parsing for Rollcall.
//!
//! This crate turns the argument string of a roster command into a fully
//! validated request object, or a precise error.
//!
//! # Architecture
//!
//! ```text
//! "n/Alice p/98765432 e/alice@example.com ... t/soprano"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → preamble + { n/ → ["Alice"], p/ → ["98765432"], ... }
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ STRUCTURAL      │  → required prefixes present, preamble empty,
//! │ CHECKS          │    no duplicate single-valued prefixes
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ FIELD           │  → Name, Phone, Email, ... (valid by construction)
//! │ VALIDATION      │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ REQUEST         │  → AddRequest { member }, AttendanceRequest { ... }
//! │ ASSEMBLY        │
//! └─────────────────┘
//! ```
//!
//! The dispatcher that maps command keywords to parsers, the data store,
//! and all rendering live outside this crate. Parsers are stateless pure
//! functions: the first detected error aborts the parse and nothing
//! partially validated ever escapes.
//!
//! # Modules
//!
//! - [`syntax`] - The prefix markers commands recognize
//! - [`tokenizer`] - Lexical split of an argument string into a multimap
//! - [`multimap`] - The tokenizer's output, preamble plus values per prefix
//! - [`field`] - Per-field validation helpers shared by the parsers
//! - [`error`] - The two parse-error kinds
//! - [`command`] - The parser trait
//! - [`add`], [`attendance`], [`delete`] - One parser per command kind

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod add;
pub mod attendance;
pub mod command;
pub mod delete;
pub mod error;
pub mod field;
pub mod multimap;
pub mod syntax;
pub mod tokenizer;

// Re-export main types for convenience
pub use add::{AddCommandParser, AddRequest};
pub use attendance::{AttendanceCommandParser, AttendanceRequest};
pub use command::CommandParser;
pub use delete::{DeleteCommandParser, DeleteRequest};
pub use error::ParseError;
pub use multimap::ArgumentMultimap;
pub use syntax::Prefix;
pub use tokenizer::ArgumentTokenizer;
