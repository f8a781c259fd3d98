//! Lexical split of an argument string into a multimap.
//!
//! Purely lexical: no field semantics, no validation, no side effects.

use std::collections::HashMap;

use crate::multimap::ArgumentMultimap;
use crate::syntax::Prefix;

/// One recognized prefix occurrence in the argument string.
#[derive(Copy, Clone, Debug)]
struct PrefixPosition {
    /// Byte offset of the marker's first character.
    at: usize,
    prefix: Prefix,
}

/// Splits raw argument strings on prefix markers.
pub struct ArgumentTokenizer;

impl ArgumentTokenizer {
    /// Tokenizes an argument string against the given prefix set.
    ///
    /// A marker is recognized only at a token boundary, i.e. at the start
    /// of the string or directly after whitespace, so a marker-shaped
    /// substring inside a value (`alice@a/b.com`) is left alone. Text
    /// before the first recognized marker becomes the trimmed preamble;
    /// each value runs until the next recognized marker or the end of
    /// input, trimmed of surrounding whitespace. Repeated markers keep
    /// encounter order.
    #[must_use]
    pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
        let mut positions = Self::find_positions(args, prefixes);
        positions.sort_unstable_by_key(|position| position.at);
        Self::extract(args, &positions)
    }

    /// Finds every boundary-anchored occurrence of every prefix.
    fn find_positions(args: &str, prefixes: &[Prefix]) -> Vec<PrefixPosition> {
        let mut positions = Vec::new();
        for &prefix in prefixes {
            let marker = prefix.as_str();
            let mut from = 0;
            while let Some(found) = args[from..].find(marker) {
                let at = from + found;
                if Self::at_token_boundary(args, at) {
                    positions.push(PrefixPosition { at, prefix });
                }
                from = at + marker.len();
            }
        }
        positions
    }

    /// Returns true if position `at` starts a token.
    fn at_token_boundary(args: &str, at: usize) -> bool {
        at == 0
            || args[..at]
                .chars()
                .next_back()
                .is_some_and(char::is_whitespace)
    }

    /// Splits the string at the recognized positions.
    fn extract(args: &str, positions: &[PrefixPosition]) -> ArgumentMultimap {
        let preamble_end = positions.first().map_or(args.len(), |position| position.at);
        let preamble = args[..preamble_end].trim().to_string();

        let mut values: HashMap<Prefix, Vec<String>> = HashMap::new();
        for (i, position) in positions.iter().enumerate() {
            let value_start = position.at + position.prefix.as_str().len();
            let value_end = positions.get(i + 1).map_or(args.len(), |next| next.at);
            values
                .entry(position.prefix)
                .or_default()
                .push(args[value_start..value_end].trim().to_string());
        }

        ArgumentMultimap::new(preamble, values)
    }
}
