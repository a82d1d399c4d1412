//! Console capabilities: reporting, confirmation, and the audible cue.
//!
//! The fetcher talks to the outside world through three small traits so each
//! one can be swapped independently:
//!
//! - [`Reporter`] - renders progress and diagnostic messages
//! - [`Prompt`] - blocks for user confirmation in alert mode
//! - [`Chime`] - emits the optional audible cue
//!
//! Terminal implementations are provided for interactive use, along with
//! silent/no-op ones for embedding and automation.
//!
//! # Examples
//!
//! ```rust
//! use stubborn::console::{FixedPrompt, SilentChime, SilentReporter};
//! use stubborn::FetcherBuilder;
//!
//! // A fully non-interactive fetcher: no output, retries auto-confirmed.
//! let fetcher = FetcherBuilder::new()
//!     .reporter(SilentReporter)
//!     .prompt(FixedPrompt::new(true))
//!     .chime(SilentChime)
//!     .build();
//! ```

pub mod chime;
pub mod prompt;
pub mod report;

pub use chime::{Chime, SilentChime, TermChime};
pub use prompt::{FixedPrompt, Prompt, TermPrompt};
pub use report::{Reporter, Severity, SilentReporter, TermReporter};
