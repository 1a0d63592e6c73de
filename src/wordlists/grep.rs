//! Subprocess word list backend
//!
//! Pipes the word list through `grep`, one word per line, compiling the
//! pattern algebra to grep's regex dialect. Each invocation is a single
//! blocking operation: spawn, feed stdin, collect stdout. Grep exiting with
//! status 1 means no lines matched — an empty result, not a failure.

use super::{MatchBackendError, WordList};
use crate::core::Pattern;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

/// A word list filtered by invoking `grep`.
#[derive(Debug, Clone)]
pub struct GrepWordList {
    words: Vec<String>,
    grep_path: PathBuf,
}

impl GrepWordList {
    /// Wrap `words`, using the grep executable at `grep_path` for filtering.
    #[must_use]
    pub fn new(words: Vec<String>, grep_path: impl Into<PathBuf>) -> Self {
        Self {
            words,
            grep_path: grep_path.into(),
        }
    }

    /// The grep executable this list filters through.
    #[must_use]
    pub fn grep_path(&self) -> &Path {
        &self.grep_path
    }

    fn run_grep(&self, regex: &str, invert: bool) -> Result<Vec<String>, MatchBackendError> {
        let mut command = Command::new(&self.grep_path);
        if invert {
            command.arg("-v");
        }
        let mut child = command
            .arg(regex)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| MatchBackendError::new(format!("could not run grep: {e}")))?;

        // Feed stdin from its own thread; grep writes stdout while we are
        // still writing, and a full pipe in either direction would deadlock.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| MatchBackendError::new("grep stdin unavailable"))?;
        let input = {
            let mut buffer = self.words.join("\n");
            buffer.push('\n');
            buffer
        };
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| MatchBackendError::new(format!("grep did not finish: {e}")))?;
        writer
            .join()
            .map_err(|_| MatchBackendError::new("grep stdin writer panicked"))?
            .map_err(|e| MatchBackendError::new(format!("could not write to grep: {e}")))?;

        // 0: matches found, 1: none. Anything else is a real grep error.
        match output.status.code() {
            Some(0 | 1) => {}
            code => {
                return Err(MatchBackendError::new(format!(
                    "grep exited with status {code:?}"
                )));
            }
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| MatchBackendError::new(format!("grep output was not UTF-8: {e}")))?;
        Ok(stdout.lines().map(ToString::to_string).collect())
    }
}

impl WordList for GrepWordList {
    fn words(&self) -> &[String] {
        &self.words
    }

    fn filter_matching(
        &self,
        pattern: &Pattern,
        invert: bool,
    ) -> Result<Box<dyn WordList>, MatchBackendError> {
        let words = self.run_grep(&pattern.to_regex(), invert)?;
        Ok(Box::new(Self {
            words,
            grep_path: self.grep_path.clone(),
        }))
    }
}
