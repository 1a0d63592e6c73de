//! Solving-session state
//!
//! A session owns the accumulated fact set and the current candidate frontier.
//! Facts only ever grow; the frontier is replaced by a narrowed list after
//! each turn. The session does not prompt or print — interaction lives in the
//! command layer.

use super::{Fact, Turn, TurnError, filter::filter_with_facts};
use crate::wordlists::{MatchBackendError, WordList};
use rustc_hash::FxHashSet;
use std::fmt;

/// Where the session stands after a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// This many candidates remain. Zero is representable; the caller decides
    /// how to react (usually: the feedback was mistyped).
    Candidates(usize),
    /// Exactly one candidate remains — the answer.
    Solved(String),
}

/// Error advancing a session by one turn.
#[derive(Debug)]
pub enum SessionError {
    /// The turn's length does not fit the session.
    MalformedTurn(TurnError),
    /// The word-list backend could not run a filter. The turn's facts are
    /// kept (they were valid regardless of backend availability) and the
    /// frontier stays at its previous value; retry with [`Session::refilter`].
    MatchBackend(MatchBackendError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTurn(e) => write!(f, "{e}"),
            Self::MatchBackend(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedTurn(e) => Some(e),
            Self::MatchBackend(e) => Some(e),
        }
    }
}

impl From<TurnError> for SessionError {
    fn from(e: TurnError) -> Self {
        Self::MalformedTurn(e)
    }
}

impl From<MatchBackendError> for SessionError {
    fn from(e: MatchBackendError) -> Self {
        Self::MatchBackend(e)
    }
}

/// One puzzle-solving session over a dictionary.
pub struct Session {
    word_length: usize,
    facts: FxHashSet<Fact>,
    turns: Vec<Turn>,
    frontier: Box<dyn WordList>,
}

impl Session {
    /// Start a session over `dictionary` for words of `word_length` letters.
    #[must_use]
    pub fn new(dictionary: Box<dyn WordList>, word_length: usize) -> Self {
        Self {
            word_length,
            facts: FxHashSet::default(),
            turns: Vec::new(),
            frontier: dictionary,
        }
    }

    /// The configured word length.
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Current candidate words.
    #[must_use]
    pub fn candidates(&self) -> &[String] {
        self.frontier.words()
    }

    /// The candidate frontier as a word list.
    #[must_use]
    pub fn frontier(&self) -> &dyn WordList {
        self.frontier.as_ref()
    }

    /// Every turn taken so far, in order.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Accumulated facts, sorted for stable display.
    #[must_use]
    pub fn facts_sorted(&self) -> Vec<Fact> {
        let mut facts: Vec<Fact> = self.facts.iter().copied().collect();
        facts.sort_unstable();
        facts
    }

    /// Consume one turn: merge its facts, narrow the frontier, and report
    /// where the session stands.
    ///
    /// # Errors
    /// [`SessionError::MalformedTurn`] if the turn's length differs from the
    /// session's word length (nothing is merged). On
    /// [`SessionError::MatchBackend`] the facts stay merged but the frontier
    /// is unchanged; call [`Self::refilter`] to retry the narrowing.
    pub fn advance(&mut self, turn: Turn) -> Result<SessionStatus, SessionError> {
        if turn.len() != self.word_length {
            return Err(TurnError::WrongLength {
                expected: self.word_length,
                actual: turn.len(),
            }
            .into());
        }

        self.facts.extend(turn.facts());
        self.turns.push(turn);
        self.refilter().map_err(Into::into)
    }

    /// Re-run the filter pipeline against the current frontier. Harmless to
    /// repeat: filtering with the same fact set is idempotent.
    ///
    /// # Errors
    /// [`MatchBackendError`] when the backend cannot execute; the frontier is
    /// left as it was.
    pub fn refilter(&mut self) -> Result<SessionStatus, MatchBackendError> {
        let narrowed = filter_with_facts(self.frontier.as_ref(), self.facts.iter(), self.word_length)?;
        self.frontier = narrowed;
        Ok(self.status())
    }

    /// Status derived from the current frontier.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        let words = self.frontier.words();
        if let [only] = words {
            SessionStatus::Solved(only.clone())
        } else {
            SessionStatus::Candidates(words.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, Pattern};
    use crate::wordlists::StringWordList;

    fn dictionary() -> Box<dyn WordList> {
        Box::new(StringWordList::new(
            ["renet", "seedy", "teems", "weedy", "belie", "bells", "zeeep"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        ))
    }

    fn turn(guess: &str, feedback: &str) -> Turn {
        let feedback = feedback.chars().map(|c| Feedback::from_char(c).unwrap()).collect();
        Turn::new(guess, feedback).unwrap()
    }

    #[test]
    fn advance_narrows_candidates() {
        let mut session = Session::new(dictionary(), 5);
        // 'z' missed, 'e' placed at 1: zeeep and anything without e-at-1 drop.
        let status = session.advance(turn("zealy", "-=---")).unwrap();

        assert!(matches!(status, SessionStatus::Candidates(_)));
        assert!(session.candidates().iter().all(|w| w.chars().nth(1) == Some('e')));
        assert!(!session.candidates().iter().any(|w| w.contains('z')));
    }

    #[test]
    fn candidates_never_grow() {
        let mut session = Session::new(dictionary(), 5);
        let mut previous = session.candidates().len();

        for (guess, feedback) in [("zzzzz", "-----"), ("beeee", "-=---"), ("renet", "-=---")] {
            session.advance(turn(guess, feedback)).unwrap();
            let now = session.candidates().len();
            assert!(now <= previous, "{now} > {previous} after {guess}");
            previous = now;
        }
    }

    #[test]
    fn single_candidate_is_solved() {
        let mut session = Session::new(dictionary(), 5);
        // Target "renet": r placed, e placed, n placed pins it down.
        let status = session.advance(turn("renet", "=====")).unwrap();

        assert_eq!(status, SessionStatus::Solved("renet".into()));
    }

    #[test]
    fn zero_candidates_is_reported_not_special_cased() {
        let mut session = Session::new(dictionary(), 5);
        let status = session.advance(turn("qqqqq", "=====")).unwrap();

        assert_eq!(status, SessionStatus::Candidates(0));
    }

    #[test]
    fn wrong_length_turn_is_rejected_before_merging() {
        let mut session = Session::new(dictionary(), 5);
        let result = session.advance(turn("tal", "---"));

        assert!(matches!(
            result,
            Err(SessionError::MalformedTurn(TurnError::WrongLength {
                expected: 5,
                actual: 3
            }))
        ));
        assert!(session.facts_sorted().is_empty());
        assert_eq!(session.candidates().len(), 7);
    }

    #[test]
    fn facts_accumulate_across_turns() {
        let mut session = Session::new(dictionary(), 5);
        session.advance(turn("zzzzz", "-----")).unwrap();
        session.advance(turn("qqqqq", "-----")).unwrap();

        let facts = session.facts_sorted();
        assert!(facts.contains(&Fact::Exclude('z')));
        assert!(facts.contains(&Fact::Exclude('q')));
    }

    /// Backend that always fails, for exercising the error path.
    struct BrokenBackend(Vec<String>);

    impl WordList for BrokenBackend {
        fn words(&self) -> &[String] {
            &self.0
        }

        fn filter_matching(
            &self,
            _pattern: &Pattern,
            _invert: bool,
        ) -> Result<Box<dyn WordList>, MatchBackendError> {
            Err(MatchBackendError::new("backend unavailable"))
        }
    }

    #[test]
    fn backend_failure_keeps_facts_and_frontier() {
        let words: Vec<String> = ["renet", "seedy"].iter().map(ToString::to_string).collect();
        let mut session = Session::new(Box::new(BrokenBackend(words)), 5);

        let result = session.advance(turn("zzzzz", "-----"));
        assert!(matches!(result, Err(SessionError::MatchBackend(_))));

        // Facts survived the failure; the frontier did not advance.
        assert!(session.facts_sorted().contains(&Fact::Exclude('z')));
        assert_eq!(session.candidates().len(), 2);
    }
}
