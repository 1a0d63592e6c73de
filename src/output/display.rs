//! Colored terminal output
//!
//! Everything that touches color or the live terminal. The layout work is
//! delegated to `formatters`.

use super::formatters::{histogram_rows, wrap_words};
use crate::core::{Feedback, Session};
use crate::wordlists::letter_histogram;
use colored::{ColoredString, Colorize};

const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Columns available on the attached terminal, with a fallback for pipes.
#[must_use]
pub fn terminal_columns() -> usize {
    crossterm::terminal::size().map_or(80, |(columns, _rows)| usize::from(columns))
}

/// Color a piece of text the way its feedback colors a tile: green background
/// for a hit, yellow background for a misplaced letter, bold for a miss.
#[must_use]
pub fn paint(text: &str, feedback: Feedback) -> ColoredString {
    match feedback {
        Feedback::Hit => text.on_green().bold(),
        Feedback::Misplaced => text.on_yellow(),
        Feedback::Miss => text.bold(),
    }
}

/// The `=` / `.` / `-` legend, each glyph in its own color.
#[must_use]
pub fn feedback_legend() -> String {
    format!(
        "{}{}{}",
        paint("=", Feedback::Hit),
        paint(".", Feedback::Misplaced),
        paint("-", Feedback::Miss)
    )
}

/// A guess with each letter colored by its feedback.
#[must_use]
pub fn format_turn(guess: &str, feedback: &[Feedback]) -> String {
    guess
        .chars()
        .zip(feedback)
        .map(|(letter, &fb)| paint(&letter.to_string(), fb).to_string())
        .collect()
}

pub fn print_welcome() {
    println!("Welcome to the WORDLE assistant.");
    println!(
        "{}",
        "https://www.nytimes.com/games/wordle/".blue().underline()
    );
}

/// Print the current candidates wrapped to the terminal width, then every
/// turn so far with colored letters.
pub fn print_session(session: &Session) {
    println!(
        "{}",
        wrap_words(
            session.candidates(),
            session.word_length(),
            terminal_columns()
        )
    );
    for turn in session.turns() {
        println!("{}", format_turn(turn.guess(), turn.feedback()));
    }
}

/// Print the letter histogram of the current candidates as a bar chart.
pub fn print_histogram(session: &Session) {
    let histogram = letter_histogram(session.candidates());
    for row in histogram_rows(&histogram, HISTOGRAM_BAR_WIDTH) {
        println!("{row}");
    }
}

/// Print the accumulated facts, one per line in stable order.
pub fn print_facts(session: &Session) {
    for fact in session.facts_sorted() {
        println!("{fact}");
    }
}
