//! Confirmation prompts.
//!
//! The generate command only needs a yes/no answer, so the terminal UI sits
//! behind a small trait that tests can replace.

use anyhow::{Context, Result};
use dialoguer::Confirm;

/// Source of yes/no answers.
pub trait Prompter {
    /// Asks `message` and returns the answer. Blocks until one is given.
    fn confirm(&self, message: &str) -> Result<bool>;
}

/// Interactive prompt on the controlling terminal.
///
/// Pressing enter accepts the default answer, which is yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&self, message: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(true)
            .interact()
            .context("Failed to get confirmation (use --yes when not running in a terminal)")
    }
}
