//! The parser trait.

use crate::error::ParseError;

/// A stateless parser from one command's argument string to its request.
///
/// The dispatcher strips the command keyword and routes the remaining
/// argument string to the right implementor. Each call is a pure function
/// of its input; implementors carry no state across invocations, so a
/// single instance may serve any number of calls from any thread.
pub trait CommandParser {
    /// The fully validated request this parser produces.
    type Request;

    /// Parses an argument string into a validated request.
    ///
    /// # Errors
    /// Returns [`ParseError::InvalidFormat`] when the argument string does
    /// not fit the command's shape, or [`ParseError::InvalidField`] when a
    /// supplied field value violates its constraint.
    fn parse(&self, args: &str) -> Result<Self::Request, ParseError>;
}
