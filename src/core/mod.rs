//! Core constraint-inference and filtering engine
//!
//! Turns per-letter feedback into facts, resolves facts into a positional
//! pattern, and narrows candidate word lists. Performs no I/O; word lists are
//! reached only through the [`WordList`](crate::wordlists::WordList)
//! capability.

mod fact;
pub mod filter;
mod pattern;
pub mod resolver;
mod session;
mod turn;

pub use fact::Fact;
pub use filter::filter_with_facts;
pub use pattern::{Pattern, Slot};
pub use resolver::positional_pattern;
pub use session::{Session, SessionError, SessionStatus};
pub use turn::{Feedback, Turn, TurnError};
