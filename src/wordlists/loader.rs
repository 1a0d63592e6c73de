//! Dictionary loading
//!
//! Reads a newline-delimited word file and keeps only the words a puzzle of
//! the configured length can use: exactly that many letters, all ASCII
//! lowercase. Capitalized proper nouns and possessives in system dictionaries
//! drop out here.

use std::fs;
use std::io;
use std::path::Path;

/// Default system dictionary.
pub const DEFAULT_WORDS_PATH: &str = "/usr/share/dict/words";

/// Load the words of exactly `word_length` lowercase letters from `path`.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_words<P: AsRef<Path>>(path: P, word_length: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter(|line| is_candidate(line, word_length))
        .map(ToString::to_string)
        .collect();

    Ok(words)
}

fn is_candidate(word: &str, word_length: usize) -> bool {
    word.len() == word_length && word.bytes().all(|b| b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn candidate_predicate() {
        assert!(is_candidate("crane", 5));
        assert!(!is_candidate("cranes", 5));
        assert!(!is_candidate("cran", 5));
        assert!(!is_candidate("Crane", 5));
        assert!(!is_candidate("cran3", 5));
        assert!(!is_candidate("don't", 5));
        assert!(is_candidate("abcdef", 6));
    }

    #[test]
    fn load_filters_length_and_case() {
        let mut file = tempfile();
        writeln!(file.1, "crane\nCrane\nslate\ntoo\ncranes\nzesty").unwrap();

        let words = load_words(&file.0, 5).unwrap();
        assert_eq!(words, vec!["crane", "slate", "zesty"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(load_words("/nonexistent/words-file", 5).is_err());
    }

    fn tempfile() -> (std::path::PathBuf, fs::File) {
        let path = std::env::temp_dir().join(format!(
            "wordle_assistant_loader_test_{}",
            std::process::id()
        ));
        let file = fs::File::create(&path).unwrap();
        (path, file)
    }
}
