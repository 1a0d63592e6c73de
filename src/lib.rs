//! Wordle Assistant
//!
//! An interactive assistant for Wordle-style games: you supply guesses and
//! the feedback the game gave you, and it narrows the dictionary to the words
//! still consistent with everything observed.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assistant::core::{Feedback, Turn};
//!
//! let feedback: Vec<Feedback> = "-=---".chars().filter_map(Feedback::from_char).collect();
//! let turn = Turn::new("belie", feedback).unwrap();
//!
//! for fact in turn.facts() {
//!     println!("{fact}");
//! }
//! ```

// Constraint inference and filtering engine
pub mod core;

// Word list capability and backends
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
