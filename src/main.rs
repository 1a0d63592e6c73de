//! Wordle Assistant - CLI
//!
//! Loads a dictionary, picks a word-list backend, and runs the interactive
//! assistant loop.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use wordle_assistant::{
    commands::run_assist,
    wordlists::{GrepWordList, StringWordList, WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_assistant",
    about = "Interactive Wordle assistant: feed it your guesses and feedback, it narrows the dictionary",
    version
)]
struct Cli {
    /// The number of letters in the word
    #[arg(short, long, default_value_t = 5)]
    letter_count: usize,

    /// Path to a newline-delimited word file
    #[arg(short, long, default_value = loader::DEFAULT_WORDS_PATH)]
    words_list_path: String,

    /// Matching backend for word filtering
    #[arg(short, long, value_enum, default_value_t = Backend::Memory)]
    backend: Backend,

    /// Grep executable, for the grep backend
    #[arg(long, default_value = "/usr/bin/grep")]
    grep_path: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum Backend {
    /// Match words in memory
    Memory,
    /// Pipe words through a grep subprocess
    Grep,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = loader::load_words(&cli.words_list_path, cli.letter_count)
        .with_context(|| format!("unable to read word list at {}", cli.words_list_path))?;
    anyhow::ensure!(
        !words.is_empty(),
        "no {}-letter words in {}",
        cli.letter_count,
        cli.words_list_path
    );

    let dictionary: Box<dyn WordList> = match cli.backend {
        Backend::Memory => Box::new(StringWordList::new(words)),
        Backend::Grep => Box::new(GrepWordList::new(words, cli.grep_path)),
    };

    run_assist(dictionary, cli.letter_count)
}
