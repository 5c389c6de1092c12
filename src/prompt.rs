//! User prompting behind an injectable provider.
//!
//! Handlers never talk to the terminal directly; they ask a [`Prompter`], so
//! automation and tests can script the answers.

use anyhow::{bail, Context, Result};
use inquire::{Confirm, Text};

/// Source of interactive answers.
pub trait Prompter {
    /// Ask for a free-form line of text.
    fn text(&self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Prompter backed by the interactive terminal.
///
/// Refuses to prompt when stdin is not a TTY so that scripted invocations
/// fail with a clear message instead of hanging.
pub struct TerminalPrompter;

impl TerminalPrompter {
    fn require_tty(message: &str) -> Result<()> {
        if !atty::is(atty::Stream::Stdin) {
            bail!("stdin is not a terminal; cannot prompt for: {message}");
        }
        Ok(())
    }
}

impl Prompter for TerminalPrompter {
    fn text(&self, message: &str) -> Result<String> {
        Self::require_tty(message)?;
        Text::new(message)
            .prompt()
            .with_context(|| format!("Failed to read answer for: {message}"))
    }

    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Self::require_tty(message)?;
        Confirm::new(message)
            .with_default(default)
            .prompt()
            .with_context(|| format!("Failed to read answer for: {message}"))
    }
}
