//! HTTP module containing client setup and header handling.
//!
//! The HTTP module is organized into two components:
//!
//! - [`client`] - HTTP client creation and middleware configuration
//! - [`headers`] - Default header set and header merging
//!
//! # Examples
//!
//! ```rust
//! use stubborn::http::{create_http_client, default_headers, merge, HttpClientConfig};
//! use reqwest::header::{HeaderMap, ACCEPT};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut overrides = HeaderMap::new();
//! overrides.insert(ACCEPT, "application/json".parse()?);
//!
//! let config = HttpClientConfig {
//!     timeout: std::time::Duration::from_secs(10),
//!     headers: merge(&default_headers(), &overrides),
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod headers;

pub use client::{create_http_client, HttpClientConfig};
pub use headers::{default_headers, merge, DEFAULT_USER_AGENT};
