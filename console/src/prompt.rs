//! Token- and line-oriented console input.
//!
//! Numbers and single words are read as whitespace-separated tokens, so
//! `3 4` on one line answers two prompts. Free text (titles, authors) is read
//! as a whole line after dropping whatever is left of the current one.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

/// Failure while reading an answer from the console.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Input stream ended.
    #[error("end of input")]
    Eof,
    /// A number was expected but the token did not parse.
    #[error("expected a number, got {0:?}")]
    InvalidNumber(String),
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// Reads answers from `input` and writes prompts and messages to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    /// Unread tokens from the current input line.
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Write `text` followed by a newline.
    pub fn say(&mut self, text: impl fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// Write `prompt` without a newline and flush so it shows before input.
    pub fn ask(&mut self, prompt: &str) -> Result<(), PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Prompt for one whitespace-delimited token.
    pub fn read_word(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)?;
        self.next_token()
    }

    /// Prompt for one token and parse it as a number.
    ///
    /// A malformed token is consumed and reported as
    /// [`PromptError::InvalidNumber`]; the rest of the line stays pending
    /// until the caller discards it.
    pub fn read_number<T: FromStr>(&mut self, prompt: &str) -> Result<T, PromptError> {
        let token = self.read_word(prompt)?;
        match token.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(PromptError::InvalidNumber(token)),
        }
    }

    pub fn read_int(&mut self, prompt: &str) -> Result<i64, PromptError> {
        self.read_number(prompt)
    }

    pub fn read_float(&mut self, prompt: &str) -> Result<f64, PromptError> {
        self.read_number(prompt)
    }

    /// Drop the rest of the current line, then read the next full line.
    ///
    /// The trailing line terminator is stripped; inner whitespace is kept.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.ask(prompt)?;
        self.discard_line();
        self.next_line()
    }

    /// Forget any unread tokens from the current line.
    pub fn discard_line(&mut self) {
        self.pending.clear();
    }

    /// Print the continue prompt and wait for one more line.
    pub fn pause(&mut self) -> Result<(), PromptError> {
        self.ask("Press Enter to continue...")?;
        self.discard_line();
        self.next_line().map(|_| ())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    fn next_token(&mut self) -> Result<String, PromptError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.next_line()?;
            self.pending.extend(line.split_whitespace().map(str::to_owned));
        }
    }

    fn next_line(&mut self) -> Result<String, PromptError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}
