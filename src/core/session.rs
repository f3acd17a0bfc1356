//! # Interactive Session
//!
//! A `Session` owns everything an interactive prompt needs: the buffered
//! input reader, the output the prompts are written to, and the screen
//! used by clear-before-run menus. The host builds one at startup
//! (`StdioSession::stdio()`) and threads it through its calls.
//!
//! Reading operations take `&mut self`, so one session is driven by one
//! caller at a time.
//!
//! ```text
//!   choose_and_run_option ─► choose_option ─► choose_number_from_range ─┐
//!                                                  confirm ─────────────┤
//!                                                                       ▼
//!                                                     prompt ─► reader.read_line
//! ```

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::{error, warn};

use super::screen::{Screen, SystemScreen};

// ============================================================================
// Error Type
// ============================================================================

/// Errors surfaced by session operations.
#[derive(Debug)]
pub enum PromptError {
    /// The input stream returned an error.
    Read(io::Error),
    /// The input stream is exhausted (nothing left to read).
    EndOfInput,
    /// Writing a prompt or menu to the output failed.
    Write(io::Error),
    /// A chooser was asked for `[1, 0]`: no input could ever be accepted.
    EmptyRange,
    /// A retry limit was configured and every attempt was rejected.
    AttemptsExhausted { attempts: u32 },
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::Read(e) => write!(f, "failed to read input: {e}"),
            PromptError::EndOfInput => write!(f, "end of input"),
            PromptError::Write(e) => write!(f, "failed to write prompt: {e}"),
            PromptError::EmptyRange => write!(f, "nothing to choose from"),
            PromptError::AttemptsExhausted { attempts } => {
                write!(f, "gave up after {attempts} invalid attempts")
            }
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::Read(e) | PromptError::Write(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Options
// ============================================================================

/// Tunables for the retry loops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Give up after this many rejected attempts. `None` retries forever.
    /// At least one attempt is always made.
    pub max_attempts: Option<u32>,
}

// ============================================================================
// Session
// ============================================================================

pub struct Session<R, W> {
    reader: R,
    writer: W,
    screen: Box<dyn Screen>,
    options: SessionOptions,
    rejected: usize,
}

/// The process-wide session over the real terminal.
pub type StdioSession = Session<StdinLock<'static>, Stdout>;

impl StdioSession {
    /// Locks stdin for the lifetime of the session and writes to stdout.
    pub fn stdio() -> Self {
        Session::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Builds a session with the platform clear command and unbounded retries.
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            screen: Box::new(SystemScreen::detect()),
            options: SessionOptions::default(),
            rejected: 0,
        }
    }

    pub fn with_screen(mut self, screen: impl Screen + 'static) -> Self {
        self.screen = Box::new(screen);
        self
    }

    pub fn with_options(mut self, options: SessionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.options.max_attempts = Some(max_attempts);
        self
    }

    pub fn options(&self) -> SessionOptions {
        self.options
    }

    /// Total rejected attempts (read or validation failures) so far.
    pub fn rejected_inputs(&self) -> usize {
        self.rejected
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn clear_screen(&mut self) {
        self.screen.clear();
    }

    /// Writes `prompt` (no newline) and reads one line, trimmed.
    ///
    /// Never retries. An exhausted stream is `PromptError::EndOfInput`;
    /// a final line without a trailing newline is still returned.
    pub fn prompt(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.writer, "{prompt}").map_err(PromptError::Write)?;
        self.writer.flush().map_err(PromptError::Write)?;

        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Err(PromptError::EndOfInput),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) => Err(PromptError::Read(e)),
        }
    }

    /// `prompt` with an empty prompt.
    pub fn input(&mut self) -> Result<String, PromptError> {
        self.prompt("")
    }

    /// Prompts until `accept` takes a line.
    ///
    /// Read failures are logged at error level, rejections from `accept`
    /// at warn level; both count as one rejected attempt. Write failures
    /// end the loop since nothing the user types can fix them.
    pub(crate) fn prompt_until<T>(
        &mut self,
        prompt: &str,
        mut accept: impl FnMut(&str) -> Result<T, String>,
    ) -> Result<T, PromptError> {
        let mut attempts: u32 = 0;
        loop {
            attempts = attempts.saturating_add(1);
            match self.prompt(prompt) {
                Ok(line) => match accept(&line) {
                    Ok(value) => return Ok(value),
                    Err(message) => warn!("{message}"),
                },
                Err(e @ PromptError::Write(_)) => return Err(e),
                Err(e) => error!("{e}"),
            }
            self.rejected += 1;

            if self.options.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(PromptError::AttemptsExhausted { attempts });
            }
        }
    }
}
