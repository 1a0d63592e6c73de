//! Terminal output formatting
//!
//! Layout helpers and colored printing for the interactive session.

pub mod display;
pub mod formatters;

pub use display::{
    feedback_legend, format_turn, print_facts, print_histogram, print_session, print_welcome,
};
pub use formatters::{histogram_rows, wrap_words};
