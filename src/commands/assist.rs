//! Interactive assistant loop
//!
//! Line-oriented prompting: one guess, one feedback line, then the narrowed
//! candidate list and the colored turn history. A line starting with `?` is a
//! query against the current session instead of a guess.

use crate::core::{Feedback, Session, SessionError, SessionStatus, Turn};
use crate::output::{feedback_legend, print_facts, print_histogram, print_session, print_welcome};
use crate::wordlists::WordList;
use anyhow::Result;
use std::io::{self, Write};

/// What a guess prompt produced.
enum Input {
    Guess(String),
    Query(String),
}

/// Run the assistant until one candidate remains or the user quits.
///
/// # Errors
/// Returns an error only for I/O failures on stdin/stdout; game-level
/// problems (bad feedback, a failing backend) are reported and re-prompted.
pub fn run_assist(dictionary: Box<dyn WordList>, word_length: usize) -> Result<()> {
    let mut session = Session::new(dictionary, word_length);
    print_welcome();

    loop {
        let guess = match read_guess(word_length)? {
            None => return Ok(()),
            Some(Input::Query(query)) => {
                if handle_query(&query, &session) {
                    return Ok(());
                }
                continue;
            }
            Some(Input::Guess(guess)) => guess,
        };

        let Some(feedback) = read_feedback(word_length)? else {
            return Ok(());
        };

        // Lengths were validated at the prompts, so construction succeeds.
        let turn = match Turn::new(guess, feedback) {
            Ok(turn) => turn,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        match session.advance(turn) {
            Ok(status) => {
                print_session(&session);
                match status {
                    SessionStatus::Solved(_) => return Ok(()),
                    SessionStatus::Candidates(0) => {
                        println!("No candidates remain. Was some feedback mistyped?");
                    }
                    SessionStatus::Candidates(_) => {}
                }
            }
            Err(SessionError::MalformedTurn(e)) => println!("{e}"),
            Err(SessionError::MatchBackend(e)) => {
                // The turn's facts are kept; the next turn refilters with all
                // of them.
                println!("{e}");
            }
        }
    }
}

/// Prompt for a guess. `None` means stdin closed.
fn read_guess(word_length: usize) -> Result<Option<Input>> {
    loop {
        let Some(input) = prompt("Guess:")? else {
            return Ok(None);
        };

        if let Some(query) = input.strip_prefix('?') {
            return Ok(Some(Input::Query(query.trim().to_string())));
        }
        if input.chars().count() == word_length {
            return Ok(Some(Input::Guess(input)));
        }
        println!("Guess must be {word_length} characters, or a query starting with ?");
    }
}

/// Prompt for feedback until a well-formed line arrives. `None` means stdin
/// closed.
fn read_feedback(word_length: usize) -> Result<Option<Vec<Feedback>>> {
    loop {
        let Some(input) = prompt(&format!("Feedback: {}", feedback_legend()))? else {
            return Ok(None);
        };

        if input.chars().count() != word_length {
            println!("Feedback must be {word_length} characters.");
            continue;
        }

        let parsed: Vec<Feedback> = input.chars().filter_map(Feedback::from_char).collect();
        if parsed.len() == word_length {
            return Ok(Some(parsed));
        }
        println!("Feedback should be in the form: {}", feedback_legend());
    }
}

/// Answer a `?` query. Returns true when the session should end.
fn handle_query(query: &str, session: &Session) -> bool {
    match query {
        "words" | "w" => print_session(session),
        "histogram" | "hist" | "h" => print_histogram(session),
        "facts" | "f" => print_facts(session),
        "quit" | "q" | "exit" => return true,
        _ => {
            println!("Queries:");
            println!("  ?words      remaining candidates and turn history");
            println!("  ?histogram  letter frequency across the candidates");
            println!("  ?facts      everything learned so far");
            println!("  ?quit       leave the assistant");
        }
    }
    false
}

fn prompt(text: &str) -> Result<Option<String>> {
    println!("{text}");
    io::stdout().flush()?;

    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
