//! Positional constraint resolution
//!
//! Folds an unordered collection of facts into one constraint per word
//! position and renders it as a single whole-word [`Pattern`]. The pattern is
//! necessary but not sufficient: it cannot say "at least N occurrences" or
//! "absent everywhere" — those facts stay with the filter pipeline.

use super::{Fact, Pattern, Slot};
use std::collections::BTreeSet;

/// Per-position state while resolving.
#[derive(Debug, Clone)]
enum Positional {
    Placed(char),
    Misplaced(BTreeSet<char>),
}

/// Resolve accumulated facts into an anchored positional pattern of
/// `word_length` slots.
///
/// Facts are applied in stages rather than in collection order, so the result
/// does not depend on how the fact set iterates:
///
/// 1. every `PlacedAt` claims its slot (contradictory placements are not
///    validated; the last one seen wins);
/// 2. every `MisplacedAt` adds its letter to the slot's exclusion set, unless
///    the slot is already placed — placement takes precedence;
/// 3. every `ExcludeWhereNotPlaced` adds its letter to all non-placed slots.
///
/// `Exclude` and `MinimumOccurrenceCount` have no positional content and are
/// ignored here.
///
/// # Panics
/// Panics if a fact's position is outside `0..word_length`. Facts produced by
/// [`Turn::facts`](super::Turn::facts) on a length-checked turn never are.
#[must_use]
pub fn positional_pattern<'a, I>(facts: I, word_length: usize) -> Pattern
where
    I: IntoIterator<Item = &'a Fact> + Clone,
{
    let mut slots = vec![Positional::Misplaced(BTreeSet::new()); word_length];

    for fact in facts.clone() {
        if let Fact::PlacedAt(letter, index) = fact {
            slots[*index] = Positional::Placed(*letter);
        }
    }

    for fact in facts.clone() {
        if let Fact::MisplacedAt(letter, index) = fact
            && let Positional::Misplaced(excluded) = &mut slots[*index]
        {
            excluded.insert(*letter);
        }
    }

    for fact in facts {
        if let Fact::ExcludeWhereNotPlaced(letter) = fact {
            for slot in &mut slots {
                if let Positional::Misplaced(excluded) = slot {
                    excluded.insert(*letter);
                }
            }
        }
    }

    Pattern::Positional(
        slots
            .into_iter()
            .map(|slot| match slot {
                Positional::Placed(letter) => Slot::Literal(letter),
                Positional::Misplaced(excluded) if excluded.is_empty() => Slot::Any,
                Positional::Misplaced(excluded) => Slot::NoneOf(excluded),
            })
            .collect(),
    )
}
