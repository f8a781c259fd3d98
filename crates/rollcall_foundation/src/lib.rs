//! Core types and errors for Rollcall.
//!
//! This crate provides:
//! - [`Error`] - Error types shared across the workspace
//! - [`Index`] - One-based indexes into displayed lists
//! - [`date`] - Calendar date parsing bound to a single fixed pattern

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod date;
pub mod error;
pub mod index;

pub use date::{DATE_PATTERN, parse_date};
pub use error::{Error, ErrorKind, Result};
pub use index::Index;
