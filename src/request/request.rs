//! Request descriptors and input validation.
//!
//! A [`FetchRequest`] is validated at construction: the URL must be a
//! well-formed absolute `http`/`https` URL, header names and values must be
//! legal, and query parameters are kept as plain pairs until the request is
//! sent. Nothing here touches the network, so a descriptor that fails to
//! build has consumed zero attempts.
//!
//! # Examples
//!
//! ```rust
//! use stubborn::request::FetchRequest;
//!
//! # fn example() -> Result<(), stubborn::Error> {
//! let request = FetchRequest::try_from("https://example.com/api/items")?
//!     .header("accept", "application/json")?
//!     .param("page", "2");
//! # Ok(())
//! # }
//! ```

use std::convert::TryFrom;
use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Url;

use crate::error::{Error, Result};

/// Describes a single HTTP GET to perform.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Validated absolute URL of the resource.
    pub url: Url,
    /// Query parameters appended to the URL when the request is sent.
    pub params: Vec<(String, String)>,
    /// Per-request header overrides, merged over the client defaults.
    pub headers: HeaderMap,
}

impl FetchRequest {
    /// Creates a new [`FetchRequest`] from an already-parsed URL.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(url: &Url) -> Result<Self> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::validation(
                "url",
                format!("unsupported scheme \"{}\"", url.scheme()),
            ));
        }
        Ok(Self {
            url: url.clone(),
            params: Vec::new(),
            headers: HeaderMap::new(),
        })
    }

    /// Adds a header override, validating the name and value.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::try_from(name)
            .map_err(|e| Error::validation("headers", format!("bad header name: {e}")))?;
        let value = HeaderValue::try_from(value)
            .map_err(|e| Error::validation("headers", format!("bad header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Appends a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns the URL with the query parameters applied.
    pub(crate) fn effective_url(&self) -> Url {
        if self.params.is_empty() {
            return self.url.clone();
        }
        let mut url = self.url.clone();
        url.query_pairs_mut().extend_pairs(self.params.iter());
        url
    }
}

impl TryFrom<&Url> for FetchRequest {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self> {
        FetchRequest::new(value)
    }
}

impl TryFrom<&str> for FetchRequest {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::validation("url", "must not be empty"));
        }
        Url::parse(value)
            .map_err(|e| Error::validation("url", format!("\"{value}\" cannot be parsed: {e}")))
            .and_then(|u| FetchRequest::new(&u))
    }
}

/// Describes a fetch whose body is streamed to a local destination.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// The request to perform.
    pub request: FetchRequest,
    /// Destination path for the downloaded body.
    pub target: PathBuf,
}

impl DownloadRequest {
    /// Creates a new [`DownloadRequest`] with an explicit destination.
    pub fn new(request: FetchRequest, target: impl Into<PathBuf>) -> Self {
        Self {
            request,
            target: target.into(),
        }
    }

    /// Replaces the destination path.
    pub fn target(mut self, target: impl Into<PathBuf>) -> Self {
        self.target = target.into();
        self
    }

    /// Keeps the inferred file name but places it inside `directory`.
    pub fn in_directory(mut self, directory: &Path) -> Self {
        if let Some(filename) = self.target.file_name() {
            self.target = directory.join(filename);
        }
        self
    }
}

impl TryFrom<&Url> for DownloadRequest {
    type Error = crate::error::Error;

    /// Infers the destination file name from the last URL path segment,
    /// percent-decoded.
    fn try_from(value: &Url) -> Result<Self> {
        let request = FetchRequest::new(value)?;
        let filename = value
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .ok_or_else(|| {
                Error::validation(
                    "url",
                    format!("\"{value}\" does not contain a usable file name"),
                )
            })?;
        let filename: String = form_urlencoded::parse(filename.as_bytes())
            .map(|(key, val)| [key, val].concat())
            .collect();
        Ok(Self {
            request,
            target: PathBuf::from(filename),
        })
    }
}

impl TryFrom<&str> for DownloadRequest {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Err(Error::validation("url", "must not be empty"));
        }
        Url::parse(value)
            .map_err(|e| Error::validation("url", format!("\"{value}\" cannot be parsed: {e}")))
            .and_then(|u| DownloadRequest::try_from(&u))
    }
}
