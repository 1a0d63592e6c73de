//! Atomic knowledge about a single letter
//!
//! Every observation the assistant works with is reduced to a `Fact`. Raw
//! feedback produces the first three variants; the last two are derived by
//! cross-referencing observations within one turn (see `Turn::facts`).

use std::fmt;

/// One constraint on a single letter's presence or position in the answer.
///
/// Facts are plain values: hashable, comparable, and cheap to copy. A solving
/// session accumulates them into a set, so duplicates collapse and insertion
/// order carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Fact {
    /// The letter is confirmed at exactly this position.
    PlacedAt(char, usize),
    /// The letter does not occur anywhere in the answer.
    Exclude(char),
    /// The letter occurs in the answer, but not at this position.
    MisplacedAt(char, usize),
    /// The letter occurs at one or more already-placed positions and is
    /// confirmed absent at every other position. Never produced directly by
    /// feedback; derived when a miss and a hit for the same letter land in
    /// one turn.
    ExcludeWhereNotPlaced(char),
    /// The letter occurs at least this many times. Derived when a letter is
    /// both placed and misplaced in one turn.
    MinimumOccurrenceCount(char, usize),
}

impl Fact {
    /// The letter this fact constrains.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::PlacedAt(c, _)
            | Self::Exclude(c)
            | Self::MisplacedAt(c, _)
            | Self::ExcludeWhereNotPlaced(c)
            | Self::MinimumOccurrenceCount(c, _) => c,
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlacedAt(c, i) => write!(f, "'{c}' is at position {i}"),
            Self::Exclude(c) => write!(f, "'{c}' is not in the word"),
            Self::MisplacedAt(c, i) => write!(f, "'{c}' is in the word, but not at position {i}"),
            Self::ExcludeWhereNotPlaced(c) => {
                write!(f, "'{c}' appears only where already placed")
            }
            Self::MinimumOccurrenceCount(c, n) => {
                write!(f, "'{c}' appears at least {n} times")
            }
        }
    }
}
