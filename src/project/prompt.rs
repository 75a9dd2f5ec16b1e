//! Yes/no confirmation before reusing an existing directory

use std::io::IsTerminal;

use inquire::{InquireError, Text};

use crate::error::Result;

/// Asks the user a yes/no question
pub trait Confirm {
    /// `true` only when the user answered `y`
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Interactive prompt on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Confirm for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool> {
        if !std::io::stdin().is_terminal() {
            tracing::debug!("stdin is not a terminal, treating as no");
            return Ok(false);
        }
        match Text::new(message).with_help_message("y/n").prompt() {
            Ok(answer) => Ok(is_yes(&answer)),
            Err(
                InquireError::NotTTY
                | InquireError::OperationCanceled
                | InquireError::OperationInterrupted,
            ) => {
                tracing::debug!("confirmation not given, treating as no");
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}
