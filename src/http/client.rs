//! HTTP client setup and middleware configuration.
//!
//! This module builds the reqwest client used for every attempt. The client
//! carries the merged default headers, the per-attempt timeout, and the
//! tracing middleware. It deliberately carries *no* retry middleware: the
//! attempt loop lives in [`crate::fetcher`], where it can honor the
//! interactive retry modes.

use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;

use crate::error::{Error, Result};
use crate::http::headers::default_headers;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Timeout applied to each individual attempt.
    pub timeout: Duration,
    /// Default headers to include with all requests.
    pub headers: HeaderMap,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(45),
            headers: default_headers(),
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// The client is set up with:
/// - Tracing middleware for request/response logging
/// - The configured default headers
/// - A per-attempt timeout
pub fn create_http_client(config: HttpClientConfig) -> Result<ClientWithMiddleware> {
    let inner_client = reqwest::Client::builder()
        .default_headers(config.headers)
        .timeout(config.timeout)
        .build()
        .map_err(|e| Error::Internal(format!("failed to build HTTP client: {e}")))?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
