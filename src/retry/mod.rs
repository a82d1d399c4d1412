//! Retry modes, policy, and error classification.
//!
//! This module holds the pieces the attempt loop is built from:
//!
//! - [`mode`] - The [`RetryMode`] selector (automatic / alert / manual)
//! - [`policy`] - The [`RetryPolicy`] driving retry decisions
//! - [`classify`] - Splitting errors into retryable and fatal classes
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use stubborn::retry::{ErrorClass, RetryDecision, RetryMode, RetryPolicy};
//!
//! let policy = RetryPolicy::new(2, Duration::from_secs(5));
//! match policy.decide(RetryMode::Automatic, ErrorClass::Retryable, 1) {
//!     RetryDecision::Retry { delay } => println!("retrying in {delay:?}"),
//!     RetryDecision::Confirm => println!("waiting for the user"),
//!     RetryDecision::GiveUp { reason } => println!("giving up: {reason}"),
//! }
//! ```

pub mod classify;
pub mod mode;
pub mod policy;

pub use classify::{classify, ErrorClass};
pub use mode::RetryMode;
pub use policy::{RetryDecision, RetryPolicy, DEFAULT_PAUSE, DEFAULT_RETRIES};
