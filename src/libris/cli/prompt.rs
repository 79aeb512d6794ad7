use libris::validation::validate_book_id;
use std::io::{self, BufRead, Write};

pub const INVALID_BOOK_ID: &str = "圖書編號無效，請重新輸入: ";

/// Line-based prompts over any reader/writer pair.
///
/// Every `ask*` method returns `Ok(None)` once input is exhausted.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `prompt` and read one line, trimmed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`Prompter::ask`], but blank lines are skipped.
    pub fn ask_non_empty(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            match self.ask(prompt)? {
                Some(answer) if answer.is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    /// Ask for a book ID, re-prompting until it is well formed.
    pub fn ask_book_id(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut answer = self.ask_non_empty(prompt)?;
        while let Some(candidate) = answer {
            match validate_book_id(&candidate) {
                Ok(()) => return Ok(Some(candidate)),
                Err(reason) => {
                    tracing::debug!(%candidate, %reason, "book id rejected");
                    answer = self.ask_non_empty(INVALID_BOOK_ID)?;
                }
            }
        }
        Ok(None)
    }
}
