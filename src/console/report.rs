//! Console reporting capability.
//!
//! Progress and diagnostic messages go through a [`Reporter`] so embedders
//! can redirect or silence them. Reporting is never the sole error channel:
//! every failure is also surfaced as a structured
//! [`Failure`](crate::error::Failure) value.

use console::style;

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine progress information.
    Info,
    /// Something recoverable happened, such as a retry being scheduled.
    Warn,
    /// An attempt or operation failed.
    Error,
}

/// Renders progress and diagnostic messages.
pub trait Reporter: Send + Sync {
    /// Renders a message with the given severity.
    fn report(&self, severity: Severity, message: &str);
}

/// Reporter writing styled, colored messages to the terminal.
///
/// Info goes to stdout; warnings and errors go to stderr in yellow and
/// bright red respectively.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermReporter;

impl Reporter for TermReporter {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("{message}"),
            Severity::Warn => eprintln!("{}", style(message).yellow()),
            Severity::Error => eprintln!("{}", style(message).red().bright()),
        }
    }
}

/// Reporter that discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn report(&self, _severity: Severity, _message: &str) {}
}
