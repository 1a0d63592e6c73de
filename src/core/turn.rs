//! One guess and its per-letter feedback
//!
//! A `Turn` pairs a guess with the feedback the game reported for it, and
//! knows how to derive `Fact`s from that pairing. Single-turn feedback
//! under-determines occurrence counts when a letter appears more than once in
//! the guess, so derivation does a consolidation pass over the turn's own base
//! facts to recover what the per-letter feedback cannot express alone.

use super::Fact;
use std::fmt;

/// Per-position feedback for one guessed letter.
///
/// The input dialect is one character per position: `=` hit, `.` misplaced,
/// `-` miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Right letter, right position (green).
    Hit,
    /// Letter is in the word, wrong position (yellow).
    Misplaced,
    /// Letter is not in the word (gray).
    Miss,
}

impl Feedback {
    /// Parse one feedback character.
    ///
    /// Accepts the `=` / `.` / `-` dialect, plus `g`/`y` aliases for people
    /// used to typing colors.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            '=' | 'g' => Some(Self::Hit),
            '.' | 'y' => Some(Self::Misplaced),
            '-' | '_' => Some(Self::Miss),
            _ => None,
        }
    }

    /// The canonical input character for this feedback.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Hit => '=',
            Self::Misplaced => '.',
            Self::Miss => '-',
        }
    }
}

/// Error constructing a [`Turn`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// Guess and feedback have different lengths.
    LengthMismatch { guess: usize, feedback: usize },
    /// The turn does not match the session's configured word length.
    WrongLength { expected: usize, actual: usize },
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, feedback } => write!(
                f,
                "Guess has {guess} letters but feedback has {feedback} entries"
            ),
            Self::WrongLength { expected, actual } => {
                write!(f, "Turn must be {expected} characters, got {actual}")
            }
        }
    }
}

impl std::error::Error for TurnError {}

/// One guess plus its feedback. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Turn {
    guess: String,
    feedback: Vec<Feedback>,
}

impl Turn {
    /// Pair a guess with its feedback.
    ///
    /// # Errors
    /// Returns [`TurnError::LengthMismatch`] when the guess and feedback
    /// lengths differ. No partial inference is performed on a malformed turn.
    pub fn new(guess: impl Into<String>, feedback: Vec<Feedback>) -> Result<Self, TurnError> {
        let guess: String = guess.into();
        let guess_len = guess.chars().count();

        if guess_len != feedback.len() {
            return Err(TurnError::LengthMismatch {
                guess: guess_len,
                feedback: feedback.len(),
            });
        }

        Ok(Self { guess, feedback })
    }

    /// The guessed word.
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// The feedback, one entry per guess position.
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// Number of letters in this turn.
    #[must_use]
    pub fn len(&self) -> usize {
        self.feedback.len()
    }

    /// Whether the turn has no letters at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.feedback.is_empty()
    }

    /// Derive the facts this turn establishes.
    ///
    /// Step 1 maps each position to a base fact: miss → `Exclude`,
    /// hit → `PlacedAt`, misplaced → `MisplacedAt`. Step 2 consolidates
    /// across this turn's base facts:
    ///
    /// - a `MisplacedAt(c, _)` with k `PlacedAt(c, _)` siblings additionally
    ///   yields `MinimumOccurrenceCount(c, k + 1)` (k > 0 only);
    /// - an `Exclude(c)` with any `PlacedAt(c, _)` sibling becomes
    ///   `ExcludeWhereNotPlaced(c)` — the letter is in the word, just not
    ///   anywhere beyond its placed positions.
    ///
    /// The returned order follows guess positions, with derived facts
    /// appended right after their source. Order matters for display only;
    /// filtering treats the result as a set.
    #[must_use]
    pub fn facts(&self) -> Vec<Fact> {
        let base: Vec<Fact> = self
            .guess
            .chars()
            .zip(&self.feedback)
            .enumerate()
            .map(|(index, (letter, feedback))| match feedback {
                Feedback::Miss => Fact::Exclude(letter),
                Feedback::Hit => Fact::PlacedAt(letter, index),
                Feedback::Misplaced => Fact::MisplacedAt(letter, index),
            })
            .collect();

        let placed_count = |letter: char| {
            base.iter()
                .filter(|fact| matches!(fact, Fact::PlacedAt(c, _) if *c == letter))
                .count()
        };

        let mut facts = Vec::with_capacity(base.len());
        for fact in &base {
            match *fact {
                Fact::MisplacedAt(letter, _) => {
                    facts.push(*fact);
                    let placed = placed_count(letter);
                    if placed > 0 {
                        facts.push(Fact::MinimumOccurrenceCount(letter, placed + 1));
                    }
                }
                Fact::Exclude(letter) => {
                    if placed_count(letter) > 0 {
                        facts.push(Fact::ExcludeWhereNotPlaced(letter));
                    } else {
                        facts.push(*fact);
                    }
                }
                _ => facts.push(*fact),
            }
        }
        facts
    }
}
