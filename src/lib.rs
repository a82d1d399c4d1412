//! Stubborn is a crate aiming at providing a simple way to fetch and
//! download resources over HTTP(S) with selectable retry behavior.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use stubborn::{FetchRequest, FetcherBuilder, RetryMode};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new()
//!     .retries(2)
//!     .mode(RetryMode::Automatic)
//!     .build();
//!
//! let request = FetchRequest::try_from("https://example.com/api/data")?;
//! match fetcher.fetch(&request).await {
//!     Ok(response) => println!("{}", response.text()),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Retry Modes
//!
//! - **Automatic** retries silently up to the configured count, pausing
//!   between attempts.
//! - **Alert** rings an audible cue and waits for the user to confirm each
//!   retry.
//! - **Manual** makes exactly one attempt and reports failure immediately.
//!
//! # Module Organization
//!
//! The stubborn crate is organized into several modules:
//!
//! - [`request`] - Validated request descriptors and outcome types
//! - [`fetcher`] - The main `Fetcher` and `FetcherBuilder` driving the attempt loop
//! - [`retry`] - Retry modes, the retry policy, and error classification
//! - [`error`] - Centralized error handling with the `Error` and `Failure` types
//! - [`http`] - HTTP client construction and header merging
//! - [`console`] - Reporting, confirmation, and chime capabilities
//! - [`progress`] - Progress bar styling and display options

pub mod console;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod progress;
pub mod request;
pub mod retry;

pub use console::{
    Chime, FixedPrompt, Prompt, Reporter, Severity, SilentChime, SilentReporter, TermChime,
    TermPrompt, TermReporter,
};
pub use error::{Error, Failure, Result};
pub use fetcher::{Fetcher, FetcherBuilder};
pub use http::{create_http_client, default_headers, merge, HttpClientConfig, DEFAULT_USER_AGENT};
pub use progress::ProgressOpts;
pub use request::{DownloadReport, DownloadRequest, FetchRequest, FetchResponse};
pub use retry::{classify, ErrorClass, RetryDecision, RetryMode, RetryPolicy};
