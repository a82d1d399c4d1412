//! Error classification for retry decisions.
//!
//! Failures fall into two classes: retryable ones where another attempt may
//! succeed (network hiccups, server-side status errors), and fatal ones where
//! retrying cannot help (bad inputs, local I/O problems, a user decline).

use crate::error::Error;

/// Whether a failed attempt is worth repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A later attempt may succeed.
    Retryable,
    /// Retrying would not help.
    Fatal,
}

/// Classifies an error for the retry controller.
///
/// Transient network errors and non-success HTTP statuses are retryable.
/// Validation, local I/O, user declines, and internal errors are fatal, as
/// are client errors raised while *building* a request: those indicate a
/// malformed request, not a flaky network.
pub fn classify(error: &Error) -> ErrorClass {
    match error {
        Error::Transient { source, .. } => classify_network(source),
        Error::HttpStatus { .. } => ErrorClass::Retryable,
        Error::Validation { .. } | Error::Io { .. } | Error::UserDeclined | Error::Internal(_) => {
            ErrorClass::Fatal
        }
    }
}

fn classify_network(error: &reqwest_middleware::Error) -> ErrorClass {
    match error {
        reqwest_middleware::Error::Reqwest(e) if e.is_builder() => ErrorClass::Fatal,
        _ => ErrorClass::Retryable,
    }
}
