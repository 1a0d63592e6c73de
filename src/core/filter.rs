//! The word filter pipeline
//!
//! Applies accumulated facts to a word list: the positional pattern first
//! (the most selective step), then one intersecting filter per residual fact.
//! Filters compose by intersection, so the application order of the residual
//! facts cannot change the final word set.

use super::{Fact, Pattern, resolver::positional_pattern};
use crate::wordlists::{MatchBackendError, WordList};

/// The extra filter a fact contributes beyond the positional pattern, as a
/// (pattern, invert) pair. `None` for facts the positional pattern already
/// captures in full.
#[must_use]
pub fn fact_filter(fact: &Fact) -> Option<(Pattern, bool)> {
    match *fact {
        // Absent everywhere: keep the non-matches.
        Fact::Exclude(letter) => Some((Pattern::Contains(letter), true)),
        // Position exclusion is already in the pattern; enforce presence.
        Fact::MisplacedAt(letter, _) => Some((Pattern::Contains(letter), false)),
        Fact::MinimumOccurrenceCount(letter, count) => {
            Some((Pattern::MinOccurrences(letter, count), false))
        }
        Fact::PlacedAt(..) | Fact::ExcludeWhereNotPlaced(_) => None,
    }
}

/// Narrow `list` to the words consistent with every fact.
///
/// The result is exactly the intersection of each fact's predicate over the
/// starting list. A fresh list is produced; the input is never mutated.
///
/// # Errors
/// Returns [`MatchBackendError`] when the underlying matching capability
/// cannot execute a filter. No partial result is produced — callers must not
/// assume anything about a failed call beyond their own retained input.
pub fn filter_with_facts<'a, F>(
    list: &dyn WordList,
    facts: F,
    word_length: usize,
) -> Result<Box<dyn WordList>, MatchBackendError>
where
    F: IntoIterator<Item = &'a Fact> + Clone,
{
    let pattern = positional_pattern(facts.clone(), word_length);
    let mut narrowed = list.filter_matching(&pattern, false)?;

    for fact in facts {
        if let Some((pattern, invert)) = fact_filter(fact) {
            narrowed = narrowed.filter_matching(&pattern, invert)?;
        }
    }

    Ok(narrowed)
}
