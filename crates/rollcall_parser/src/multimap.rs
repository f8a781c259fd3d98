//! The tokenizer's output: preamble plus ordered values per prefix.

use std::collections::HashMap;

use crate::syntax::Prefix;

/// Raw argument values grouped by the prefix that introduced them.
///
/// Built only by the tokenizer. Holds the trimmed preamble (untagged text
/// before the first recognized prefix) and, for each prefix that appeared,
/// its values in encounter order. A prefix absent from the input maps to
/// no entry at all, which keeps "field never supplied" distinct from
/// "field supplied as an empty string".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Creates a multimap from the tokenizer's split.
    #[must_use]
    pub(crate) fn new(preamble: String, values: HashMap<Prefix, Vec<String>>) -> Self {
        Self { preamble, values }
    }

    /// Returns the trimmed text before the first recognized prefix.
    #[must_use]
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value of the given prefix, or `None` if the prefix
    /// never appeared.
    ///
    /// Last-wins matches how single-valued fields behave when users retype
    /// a marker; commands that forbid repetition reject duplicates before
    /// reading values.
    #[must_use]
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|values| values.last())
            .map(String::as_str)
    }

    /// Returns every value of the given prefix in encounter order, or an
    /// empty slice if the prefix never appeared.
    #[must_use]
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    /// Returns true if the prefix appeared at least once.
    #[must_use]
    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Returns true if any of the given prefixes appeared more than once.
    #[must_use]
    pub fn has_duplicates(&self, prefixes: &[Prefix]) -> bool {
        prefixes
            .iter()
            .any(|prefix| self.all_values(*prefix).len() > 1)
    }
}
