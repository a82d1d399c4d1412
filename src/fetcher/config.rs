//! Configuration structure and defaults for the fetcher.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;

use crate::console::{Chime, Prompt, Reporter, SilentChime, TermPrompt, TermReporter};
use crate::progress::ProgressOpts;
use crate::retry::{RetryMode, RetryPolicy};

/// Default per-attempt timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(45);

/// Configuration structure for the fetcher.
#[derive(Clone)]
pub struct FetcherConfig {
    /// Timeout applied to each individual attempt.
    pub timeout: Duration,
    /// Retry count and pause.
    pub policy: RetryPolicy,
    /// Retry mode driving the attempt loop.
    pub mode: RetryMode,
    /// Header overrides merged over the crate defaults for every request.
    pub headers: HeaderMap,
    /// Progress display options.
    pub progress: ProgressOpts,
    /// Console reporting capability.
    pub reporter: Arc<dyn Reporter>,
    /// Confirmation capability used by alert mode.
    pub prompt: Arc<dyn Prompt>,
    /// Audible cue capability used by alert mode.
    pub chime: Arc<dyn Chime>,
}

impl fmt::Debug for FetcherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetcherConfig")
            .field("timeout", &self.timeout)
            .field("policy", &self.policy)
            .field("mode", &self.mode)
            .field("headers", &self.headers)
            .field("progress", &self.progress)
            .finish()
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            policy: RetryPolicy::default(),
            mode: RetryMode::default(),
            headers: HeaderMap::new(),
            progress: ProgressOpts::default(),
            reporter: Arc::new(TermReporter),
            prompt: Arc::new(TermPrompt),
            chime: Arc::new(SilentChime),
        }
    }
}
