//! Retry policy and attempt bookkeeping.
//!
//! The policy answers a single question after each failed attempt: retry
//! after a pause, ask the user first, or give up. The invariants it enforces:
//!
//! - Total attempts never exceed `retries + 1`.
//! - `retries == 0` means exactly one attempt, in every mode.
//! - Manual mode gives up after the first attempt regardless of the
//!   configured count.
//! - Fatal errors are never retried.

use std::time::Duration;

use tracing::debug;

use super::classify::ErrorClass;
use super::mode::RetryMode;

/// Default number of retries after the first attempt.
pub const DEFAULT_RETRIES: u32 = 3;

/// Default pause between automatic retries.
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(5);

/// What the attempt loop should do after a failed attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryDecision {
    /// Pause for the given delay, then attempt again.
    Retry {
        /// How long to wait before the next attempt.
        delay: Duration,
    },
    /// Ask the user for confirmation before attempting again.
    Confirm,
    /// Stop and surface the last error.
    GiveUp {
        /// Human-readable reason why no further attempt is made.
        reason: String,
    },
}

/// Configuration for the attempt loop.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Number of re-attempts allowed after the first attempt.
    retries: u32,
    /// Fixed pause between automatic retries.
    pause: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            pause: DEFAULT_PAUSE,
        }
    }
}

impl RetryPolicy {
    /// Creates a policy allowing `retries` re-attempts with a fixed pause
    /// between automatic ones.
    pub fn new(retries: u32, pause: Duration) -> Self {
        Self { retries, pause }
    }

    /// Returns the configured number of retries.
    pub fn retries(&self) -> u32 {
        self.retries
    }

    /// Returns the pause between automatic retries.
    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Returns the maximum number of attempts, including the first.
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }

    /// Decides what to do after attempt number `attempt` (1-indexed) failed
    /// with an error of the given class.
    pub fn decide(&self, mode: RetryMode, class: ErrorClass, attempt: u32) -> RetryDecision {
        if class == ErrorClass::Fatal {
            return RetryDecision::GiveUp {
                reason: "error is not retryable".to_string(),
            };
        }

        if mode == RetryMode::Manual {
            return RetryDecision::GiveUp {
                reason: "manual mode makes a single attempt".to_string(),
            };
        }

        if attempt >= self.max_attempts() {
            debug!(attempt, max = self.max_attempts(), "attempts exhausted");
            return RetryDecision::GiveUp {
                reason: format!("all {} attempt(s) exhausted", self.max_attempts()),
            };
        }

        debug!(
            attempt,
            next_attempt = attempt + 1,
            pause_ms = self.pause.as_millis(),
            %mode,
            "will retry"
        );

        match mode {
            RetryMode::Automatic => RetryDecision::Retry { delay: self.pause },
            RetryMode::Alert => RetryDecision::Confirm,
            RetryMode::Manual => unreachable!("manual mode handled above"),
        }
    }
}
