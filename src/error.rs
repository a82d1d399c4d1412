//! Error handling for the stubborn library.
//!
//! Errors are split along the retry boundary: [`Error`] describes what went
//! wrong with a single operation, and [`Failure`] is the terminal outcome of
//! a fetch or download, pairing the last error with the number of attempts
//! that were made before giving up.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when fetching or downloading.
#[derive(Error, Debug)]
pub enum Error {
    /// A call parameter was rejected before any network activity.
    ///
    /// Validation errors never consume a retry attempt: the request
    /// capability is not invoked at all.
    #[error("invalid {param}: {reason}")]
    Validation {
        /// Name of the offending parameter.
        param: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A transient network failure: connection refused, DNS failure,
    /// timeout, or an interrupted transfer.
    #[error("network error requesting {url}")]
    Transient {
        /// The URL that failed.
        url: String,
        /// The underlying client error.
        #[source]
        source: reqwest_middleware::Error,
    },

    /// The server answered with a non-success status code.
    ///
    /// Non-2xx responses are failures in this design; they are retried only
    /// under the automatic and alert modes.
    #[error("HTTP {status} for {url}")]
    HttpStatus {
        /// The URL that returned the status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// Local I/O failure while writing a downloaded file.
    ///
    /// Terminal: re-fetching cannot fix a local storage problem.
    #[error("I/O error writing {path}")]
    Io {
        /// Destination path of the failed write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The user declined to retry in alert mode.
    #[error("retry declined by user")]
    UserDeclined,

    /// Error from an underlying system, such as HTTP client construction.
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates an [`Error::Validation`] for the given parameter.
    pub(crate) fn validation(param: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            param,
            reason: reason.into(),
        }
    }
}

/// Terminal outcome of a fetch or download that did not succeed.
///
/// Carries the last [`Error`] observed together with the number of attempts
/// made. Validation failures report zero attempts since the request
/// capability was never invoked.
#[derive(Error, Debug)]
#[error("{error} (after {attempts} attempt(s))")]
pub struct Failure {
    /// The last error observed.
    #[source]
    pub error: Error,
    /// Number of attempts made before giving up.
    pub attempts: u32,
}

impl Failure {
    /// Pairs an error with the number of attempts already made.
    pub fn new(error: Error, attempts: u32) -> Self {
        Self { error, attempts }
    }
}

/// Result type alias for operations that can fail with a stubborn error.
pub type Result<T> = std::result::Result<T, Error>;
