//! Pattern algebra for word matching
//!
//! The core never hands regex strings around. It builds patterns in a small
//! intermediate representation that carries its own matching semantics, and
//! compiles that representation to a concrete regex dialect only for backends
//! that want one (the grep adapter). This keeps the constraint logic decoupled
//! from any particular matching engine's syntax.

use std::collections::BTreeSet;
use std::fmt;

/// Constraint on a single word position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// Exactly this letter.
    Literal(char),
    /// Any single letter.
    Any,
    /// Any single letter except these.
    NoneOf(BTreeSet<char>),
}

impl Slot {
    fn matches(&self, letter: char) -> bool {
        match self {
            Self::Literal(c) => *c == letter,
            Self::Any => true,
            Self::NoneOf(excluded) => !excluded.contains(&letter),
        }
    }
}

/// A word-matching pattern.
///
/// `Positional` is anchored: it matches the entire word, never a substring.
/// The other variants express the non-positional constraints facts need —
/// presence anywhere, and minimum occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// One constraint per position, whole-word.
    Positional(Vec<Slot>),
    /// The letter occurs somewhere in the word.
    Contains(char),
    /// The letter occurs at least this many times.
    MinOccurrences(char, usize),
}

impl Pattern {
    /// Whether `word` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        match self {
            Self::Positional(slots) => {
                word.chars().count() == slots.len()
                    && word.chars().zip(slots).all(|(c, slot)| slot.matches(c))
            }
            Self::Contains(letter) => word.contains(*letter),
            Self::MinOccurrences(letter, count) => {
                word.chars().filter(|c| c == letter).count() >= *count
            }
        }
    }

    /// Compile to a regex the grep family understands.
    ///
    /// Positional patterns gain explicit `^`/`$` anchors. Letters are the only
    /// literals this algebra produces, so no escaping is needed.
    #[must_use]
    pub fn to_regex(&self) -> String {
        match self {
            Self::Positional(slots) => {
                let mut pattern = String::with_capacity(slots.len() + 2);
                pattern.push('^');
                for slot in slots {
                    match slot {
                        Slot::Literal(c) => pattern.push(*c),
                        Slot::Any => pattern.push('.'),
                        Slot::NoneOf(excluded) => {
                            pattern.push_str("[^");
                            // BTreeSet iteration keeps the class stable.
                            pattern.extend(excluded.iter());
                            pattern.push(']');
                        }
                    }
                }
                pattern.push('$');
                pattern
            }
            Self::Contains(letter) => letter.to_string(),
            Self::MinOccurrences(letter, count) => {
                let mut pattern = String::new();
                for i in 0..*count {
                    if i > 0 {
                        pattern.push_str(".*");
                    }
                    pattern.push(*letter);
                }
                pattern
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_regex())
    }
}
