//! In-memory word list backend
//!
//! Matches the pattern algebra directly, no regex engine involved. Filtering
//! runs in parallel; system dictionaries are a few hundred thousand lines.

use super::{MatchBackendError, WordList};
use crate::core::Pattern;
use rayon::prelude::*;

/// A word list held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringWordList {
    words: Vec<String>,
}

impl StringWordList {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }
}

impl WordList for StringWordList {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn filter_matching(
        &self,
        pattern: &Pattern,
        invert: bool,
    ) -> Result<Box<dyn WordList>, MatchBackendError> {
        let words: Vec<String> = self
            .words
            .par_iter()
            .filter(|word| pattern.matches(word) != invert)
            .cloned()
            .collect();

        Ok(Box::new(Self::new(words)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Slot;

    fn list(words: &[&str]) -> StringWordList {
        StringWordList::new(words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn filter_keeps_matches_in_order() {
        let list = list(&["crane", "slate", "irate", "caste"]);
        let filtered = list.filter_matching(&Pattern::Contains('r'), false).unwrap();

        assert_eq!(filtered.words(), &["crane", "irate"]);
    }

    #[test]
    fn invert_keeps_non_matches() {
        let list = list(&["crane", "slate", "irate", "caste"]);
        let filtered = list.filter_matching(&Pattern::Contains('r'), true).unwrap();

        assert_eq!(filtered.words(), &["slate", "caste"]);
    }

    #[test]
    fn positional_filter_is_anchored() {
        let list = list(&["crane", "cranes", "brane"]);
        let pattern = Pattern::Positional(vec![
            Slot::Literal('c'),
            Slot::Any,
            Slot::Any,
            Slot::Any,
            Slot::Any,
        ]);
        let filtered = list.filter_matching(&pattern, false).unwrap();

        assert_eq!(filtered.words(), &["crane"]);
    }

    #[test]
    fn filtering_returns_a_new_list() {
        let original = list(&["crane", "slate"]);
        let _ = original.filter_matching(&Pattern::Contains('r'), false).unwrap();

        // The input survives untouched.
        assert_eq!(original.words(), &["crane", "slate"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let list = list(&["crane", "crane", "slate"]);
        let filtered = list.filter_matching(&Pattern::Contains('c'), false).unwrap();

        assert_eq!(filtered.words(), &["crane", "crane"]);
    }
}
