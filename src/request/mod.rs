//! Request descriptors and outcomes.
//!
//! This module contains the input and output types of the fetch/download
//! operations:
//!
//! - [`request`] - Validated request descriptors
//! - [`outcome`] - Successful outcomes carrying attempt counts
//!
//! # Examples
//!
//! ```rust
//! use stubborn::request::{DownloadRequest, FetchRequest};
//!
//! # fn example() -> Result<(), stubborn::Error> {
//! // The file name is inferred from the URL.
//! let download = DownloadRequest::try_from("https://example.com/file.zip")?;
//! assert_eq!(download.target.to_str(), Some("file.zip"));
//!
//! let fetch = FetchRequest::try_from("https://example.com/api")?.param("page", "1");
//! # Ok(())
//! # }
//! ```

pub mod outcome;
pub mod request;

pub use outcome::{DownloadReport, FetchResponse};
pub use request::{DownloadRequest, FetchRequest};
