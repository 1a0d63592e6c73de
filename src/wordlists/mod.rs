//! Word list capability and its backends
//!
//! The core only ever sees the [`WordList`] trait: an ordered word sequence
//! plus one filtering method. Backends are interchangeable adapters behind a
//! trait object — in-memory matching for the common case, a grep subprocess
//! for the traditionalists — and the core never inspects which one it holds.

mod grep;
pub mod loader;
mod memory;

pub use grep::GrepWordList;
pub use memory::StringWordList;

use crate::core::Pattern;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// The word-list backend could not execute a filter.
///
/// Facts derived before the failure remain valid; only the narrowed-list
/// computation failed, so callers retry the filter without re-deriving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchBackendError {
    message: String,
}

impl MatchBackendError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MatchBackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word matching failed: {}", self.message)
    }
}

impl std::error::Error for MatchBackendError {}

/// A candidate word list.
///
/// Implementations are interchangeable adapters behind `Box<dyn WordList>`;
/// callers never learn which backend they hold.
///
/// Filtering never mutates: each call produces a new list value. Duplicates
/// are allowed and order is display-relevant only.
pub trait WordList {
    /// The words, in display order.
    fn words(&self) -> &[String];

    /// Keep the words matching `pattern` — or, with `invert`, the words that
    /// do not.
    ///
    /// # Errors
    /// [`MatchBackendError`] when the backend cannot run the match. No
    /// partial result is produced.
    fn filter_matching(
        &self,
        pattern: &Pattern,
        invert: bool,
    ) -> Result<Box<dyn WordList>, MatchBackendError>;
}

/// For each letter, the number of words containing it at least once.
///
/// Word-wise, not occurrence-wise: "seedy" contributes one to 'e', not two.
#[must_use]
pub fn letter_histogram(words: &[String]) -> FxHashMap<char, usize> {
    let mut histogram = FxHashMap::default();
    for word in words {
        let letters: FxHashSet<char> = word.chars().collect();
        for letter in letters {
            *histogram.entry(letter).or_insert(0) += 1;
        }
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_words_not_occurrences() {
        let words: Vec<String> = ["renet", "seedy", "teems", "weedy", "belie", "bells", "zeeep"]
            .iter()
            .map(ToString::to_string)
            .collect();
        let histogram = letter_histogram(&words);

        // Every word contains 'e', several more than once.
        assert_eq!(histogram.get(&'e'), Some(&7));
        assert_eq!(histogram.get(&'s'), Some(&3));
        assert_eq!(histogram.get(&'d'), Some(&2));
        assert_eq!(histogram.get(&'l'), Some(&2));
        assert_eq!(histogram.get(&'b'), Some(&2));
        assert_eq!(histogram.get(&'y'), Some(&2));
        assert_eq!(histogram.get(&'t'), Some(&2));
        assert_eq!(histogram.get(&'z'), Some(&1));
        assert_eq!(histogram.get(&'r'), Some(&1));
        assert_eq!(histogram.get(&'q'), None);
        assert_eq!(histogram.len(), 14);
    }

    #[test]
    fn histogram_of_empty_list_is_empty() {
        assert!(letter_histogram(&[]).is_empty());
    }
}
