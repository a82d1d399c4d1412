//! Successful fetch and download outcomes.
//!
//! Both outcome types record how many attempts were consumed, so callers can
//! observe retry behavior programmatically instead of parsing console output.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use reqwest::header::HeaderMap;
use reqwest::{StatusCode, Url};

/// The in-memory result of a successful fetch.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code of the final response.
    status: StatusCode,
    /// Response headers.
    headers: HeaderMap,
    /// Buffered response body.
    body: Vec<u8>,
    /// Final URL after redirects.
    url: Url,
    /// Number of attempts consumed, including the successful one.
    attempts: u32,
}

impl FetchResponse {
    pub(crate) fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
        url: Url,
        attempts: u32,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            url,
            attempts,
        }
    }

    /// Get the response's status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the response's headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Get the response's body bytes.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the response, returning the body bytes.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// Get the body as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Get the final URL the response was served from.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get the number of attempts made, including the successful one.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

/// The result of a successful download.
#[derive(Debug, Clone)]
pub struct DownloadReport {
    /// HTTP status code of the final response.
    status: StatusCode,
    /// Path the body was written to.
    target: PathBuf,
    /// Number of body bytes written to disk.
    bytes_written: u64,
    /// Number of attempts consumed, including the successful one.
    attempts: u32,
}

impl DownloadReport {
    pub(crate) fn new(
        status: StatusCode,
        target: PathBuf,
        bytes_written: u64,
        attempts: u32,
    ) -> Self {
        Self {
            status,
            target,
            bytes_written,
            attempts,
        }
    }

    /// Get the report's status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the path the file was written to.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Get the number of bytes written.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Get the number of attempts made, including the successful one.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}
