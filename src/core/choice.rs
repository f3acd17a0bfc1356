//! # Choosers
//!
//! Retry-until-valid prompts: a number in `[1, n]` and a yes/no answer.
//! Neither gives up on bad input unless the session has a retry limit.

use std::io::{BufRead, Write};

use log::debug;

use super::session::{PromptError, Session};

const CONFIRM_INVALID: &str = "Invalid input. Input should be 'y', 'yes', 'n' or 'no'.";

/// Logged when a range answer is not an integer in `[1, upper]`.
fn range_invalid(upper: usize) -> String {
    format!("Invalid input. Input should be a number between 1 and {upper}.")
}

/// Parses a yes/no answer, ignoring case and surrounding whitespace.
pub fn parse_confirmation(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Prompts until the user enters an integer in `[1, upper]`.
    ///
    /// `upper == 0` is `PromptError::EmptyRange` without reading anything.
    pub fn choose_number_from_range(
        &mut self,
        upper: usize,
        prompt: &str,
    ) -> Result<usize, PromptError> {
        if upper == 0 {
            return Err(PromptError::EmptyRange);
        }

        let choice = self.prompt_until(prompt, |line| match line.parse::<usize>() {
            Ok(n) if (1..=upper).contains(&n) => Ok(n),
            _ => Err(range_invalid(upper)),
        })?;
        debug!("Chose {choice} of {upper}");
        Ok(choice)
    }

    /// Prompts until the user answers `y`, `yes`, `n` or `no` (any case).
    /// Empty input is rejected like any other unknown answer.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        self.prompt_until(prompt, |line| {
            parse_confirmation(line).ok_or_else(|| CONFIRM_INVALID.to_string())
        })
    }
}
