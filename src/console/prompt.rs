//! User confirmation capability.
//!
//! Alert mode blocks on explicit user confirmation before each retry. The
//! wait is behind the [`Prompt`] trait so non-interactive deployments can
//! substitute an automated policy instead of a terminal read.

use console::Term;

/// Blocking confirmation capability used by alert mode.
pub trait Prompt: Send + Sync {
    /// Asks the user to confirm, returning `true` to proceed.
    ///
    /// Implementations may block; the fetcher runs them on the blocking
    /// thread pool.
    fn confirm(&self, message: &str) -> bool;
}

/// Prompt reading a `Y/n` answer from the terminal.
///
/// An empty answer counts as yes, matching the usual terminal convention.
/// A read error counts as no, so headless environments fail closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermPrompt;

impl Prompt for TermPrompt {
    fn confirm(&self, message: &str) -> bool {
        let term = Term::stderr();
        if term.write_str(&format!("{message} (Y/n): ")).is_err() {
            return false;
        }
        match term.read_line() {
            Ok(answer) => matches!(
                answer.trim().to_ascii_lowercase().as_str(),
                "" | "y" | "yes"
            ),
            Err(_) => false,
        }
    }
}

/// Prompt that always answers the same way, for automation.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt {
    answer: bool,
}

impl FixedPrompt {
    /// Creates a prompt that always answers `answer`.
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl Prompt for FixedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }
}
