//! Fetcher module containing the retry controller.
//!
//! The fetcher module is organized into three components:
//!
//! - [`builder`] - The [`FetcherBuilder`] for configuring a fetcher
//! - [`config`] - The configuration structure and defaults
//! - [`fetcher`] - The [`Fetcher`] driving the attempt loop
//!
//! # Examples
//!
//! ```rust,no_run
//! use stubborn::{FetchRequest, FetcherBuilder, RetryMode};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new()
//!     .retries(2)
//!     .mode(RetryMode::Automatic)
//!     .build();
//!
//! let request = FetchRequest::try_from("https://example.com/data.json")?;
//! let response = fetcher.fetch(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::{FetcherConfig, DEFAULT_TIMEOUT};
pub use fetcher::Fetcher;
