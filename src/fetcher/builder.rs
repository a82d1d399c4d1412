//! Builder pattern implementation for creating [`Fetcher`] instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use std::time::Duration;
//! use stubborn::{FetcherBuilder, RetryMode};
//!
//! let fetcher = FetcherBuilder::new()
//!     .retries(5)
//!     .pause(Duration::from_secs(2))
//!     .mode(RetryMode::Automatic)
//!     .build();
//! ```
//!
//! ## Injecting Capabilities
//!
//! ```rust
//! use stubborn::console::{FixedPrompt, TermChime};
//! use stubborn::{FetcherBuilder, RetryMode};
//!
//! let fetcher = FetcherBuilder::new()
//!     .mode(RetryMode::Alert)
//!     .chime(TermChime)
//!     .prompt(FixedPrompt::new(true))
//!     .build();
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};

use super::config::FetcherConfig;
use super::fetcher::Fetcher;
use crate::console::{Chime, Prompt, Reporter};
use crate::progress::ProgressOpts;
use crate::retry::{RetryMode, RetryPolicy};

/// A builder used to create a [`Fetcher`].
///
/// ```rust
/// use stubborn::FetcherBuilder;
///
/// let fetcher = FetcherBuilder::new().retries(2).build();
/// ```
#[derive(Debug, Default)]
pub struct FetcherBuilder {
    config: FetcherConfig,
}

impl FetcherBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        FetcherBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = FetcherBuilder::default();
        builder.config.progress = ProgressOpts::hidden();
        builder
    }

    /// Sets the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the number of retries after the first attempt.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.policy = RetryPolicy::new(retries, self.config.policy.pause());
        self
    }

    /// Sets the pause between automatic retries.
    pub fn pause(mut self, pause: Duration) -> Self {
        self.config.policy = RetryPolicy::new(self.config.policy.retries(), pause);
        self
    }

    /// Sets the retry mode.
    pub fn mode(mut self, mode: RetryMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Replaces the header overrides applied to every request.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config.headers = headers;
        self
    }

    /// Adds a single header override applied to every request.
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config.headers.insert(name, value);
        self
    }

    /// Sets the progress display options.
    pub fn progress(mut self, progress: ProgressOpts) -> Self {
        self.config.progress = progress;
        self
    }

    /// Sets the console reporting capability.
    pub fn reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.config.reporter = Arc::new(reporter);
        self
    }

    /// Sets the confirmation capability used by alert mode.
    pub fn prompt(mut self, prompt: impl Prompt + 'static) -> Self {
        self.config.prompt = Arc::new(prompt);
        self
    }

    /// Sets the audible cue capability used by alert mode.
    pub fn chime(mut self, chime: impl Chime + 'static) -> Self {
        self.config.chime = Arc::new(chime);
        self
    }

    /// Creates the [`Fetcher`] with the specified options.
    pub fn build(self) -> Fetcher {
        Fetcher::new(self.config)
    }
}
