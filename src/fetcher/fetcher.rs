//! Core fetcher implementation with the retry-driven attempt loop.
//!
//! This module contains the main [`Fetcher`] struct that drives fetches and
//! downloads through the attempt loop: validate inputs, perform a GET, and
//! on retryable failures pause, prompt, or give up according to the selected
//! [`RetryMode`].
//!
//! # Examples
//!
//! ## Basic Fetch
//!
//! ```rust,no_run
//! use stubborn::{FetchRequest, FetcherBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().retries(2).build();
//! let request = FetchRequest::try_from("https://example.com/api/data")?;
//!
//! let response = fetcher.fetch(&request).await?;
//! println!("{} after {} attempt(s)", response.status(), response.attempts());
//! # Ok(())
//! # }
//! ```
//!
//! ## Download to Disk
//!
//! ```rust,no_run
//! use std::path::Path;
//! use stubborn::{DownloadRequest, FetcherBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new().build();
//! let request =
//!     DownloadRequest::try_from("https://example.com/file.zip")?.in_directory(Path::new("out"));
//!
//! let report = fetcher.download(&request).await?;
//! println!("saved {} bytes to {:?}", report.bytes_written(), report.target());
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use reqwest::header::HeaderMap;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use tokio::fs;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use super::config::FetcherConfig;
use crate::console::Severity;
use crate::error::{Error, Failure};
use crate::http::{create_http_client, default_headers, merge, HttpClientConfig};
use crate::request::{DownloadReport, DownloadRequest, FetchRequest, FetchResponse};
use crate::retry::{classify, RetryDecision, RetryMode};

/// Performs HTTP GET fetches and downloads with retry logic.
///
/// A fetcher is created via its builder:
///
/// ```rust
/// use stubborn::FetcherBuilder;
///
/// let fetcher = FetcherBuilder::new().build();
/// ```
///
/// Each call is independent: the fetcher holds configuration and the
/// injected console capabilities, but no per-call state.
#[derive(Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fetcher")
            .field("config", &self.config)
            .finish()
    }
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets the number of retries after the first attempt.
    pub fn retries(&self) -> u32 {
        self.config.policy.retries()
    }

    /// Gets the pause between automatic retries.
    pub fn pause(&self) -> Duration {
        self.config.policy.pause()
    }

    /// Gets the retry mode.
    pub fn mode(&self) -> RetryMode {
        self.config.mode
    }

    /// Gets the header overrides applied to every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.config.headers
    }

    /// Fetches a URL, buffering the response body in memory.
    ///
    /// Success means a 2xx status (206 included). Any other status is an
    /// [`Error::HttpStatus`] failure, retried only under the automatic and
    /// alert modes. The returned [`Failure`] carries the last error and the
    /// number of attempts made; validation failures report zero attempts.
    pub async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, Failure> {
        let client = self.client()?;
        let url = request.effective_url();

        let (response, attempts) = self.request_with_retries(&client, request, &url).await?;

        let status = response.status();
        let headers = response.headers().clone();
        let final_url = response.url().clone();
        let body = response.bytes().await.map_err(|source| {
            Failure::new(
                Error::Transient {
                    url: url.to_string(),
                    source: reqwest_middleware::Error::Reqwest(source),
                },
                attempts,
            )
        })?;

        self.report(
            Severity::Info,
            &format!("fetched {url} ({status}, {} bytes)", body.len()),
        );
        Ok(FetchResponse::new(
            status,
            headers,
            body.to_vec(),
            final_url,
            attempts,
        ))
    }

    /// Downloads a URL, streaming the response body to the request's target
    /// path and creating intermediate directories as needed.
    ///
    /// The request phase goes through the same attempt loop as
    /// [`Fetcher::fetch`]. Once a successful response arrives, any failure
    /// while writing is a terminal [`Error::Io`]: the fetch is not repeated,
    /// since re-fetching cannot fix a local storage problem. A transfer
    /// interrupted mid-body is likewise terminal.
    pub async fn download(&self, request: &DownloadRequest) -> Result<DownloadReport, Failure> {
        let client = self.client()?;
        let url = request.request.effective_url();

        let (response, attempts) = self
            .request_with_retries(&client, &request.request, &url)
            .await?;

        let status = response.status();
        let content_length = response.content_length();
        let target = &request.target;

        // Prepare the destination directory/file.
        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() {
                debug!("creating destination directory {:?}", parent);
                fs::create_dir_all(parent)
                    .await
                    .map_err(|source| self.io_failure(target, source, attempts))?;
            }
        }

        debug!("creating destination file {:?}", target);
        let mut file = OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .open(target)
            .await
            .map_err(|source| self.io_failure(target, source, attempts))?;

        let bar = self.config.progress.transfer_bar(content_length);
        bar.set_message(url.to_string());

        let mut bytes_written: u64 = 0;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|source| {
                Failure::new(
                    Error::Transient {
                        url: url.to_string(),
                        source: reqwest_middleware::Error::Reqwest(source),
                    },
                    attempts,
                )
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|source| self.io_failure(target, source, attempts))?;
            bytes_written += chunk.len() as u64;
            bar.inc(chunk.len() as u64);
        }

        file.flush()
            .await
            .map_err(|source| self.io_failure(target, source, attempts))?;
        bar.finish_and_clear();

        self.report(
            Severity::Info,
            &format!("saved {url} to {target:?} ({bytes_written} bytes)"),
        );
        Ok(DownloadReport::new(
            status,
            target.clone(),
            bytes_written,
            attempts,
        ))
    }

    /// Validates the configuration and builds the HTTP client.
    fn client(&self) -> Result<ClientWithMiddleware, Failure> {
        if self.config.timeout.is_zero() {
            return Err(Failure::new(
                Error::validation("timeout", "must be positive"),
                0,
            ));
        }
        let config = HttpClientConfig {
            timeout: self.config.timeout,
            headers: merge(&default_headers(), &self.config.headers),
        };
        create_http_client(config).map_err(|error| Failure::new(error, 0))
    }

    /// Drives the attempt loop until a successful response, a fatal error,
    /// exhausted attempts, or a user decline.
    async fn request_with_retries(
        &self,
        client: &ClientWithMiddleware,
        request: &FetchRequest,
        url: &Url,
    ) -> Result<(reqwest::Response, u32), Failure> {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;
            debug!(attempt = attempts, %url, "requesting");

            let error = match self.attempt(client, request, url).await {
                Ok(response) => return Ok((response, attempts)),
                Err(error) => error,
            };

            self.report(
                Severity::Error,
                &format!("attempt {attempts} failed: {error}"),
            );

            let decision = self
                .config
                .policy
                .decide(self.config.mode, classify(&error), attempts);
            match decision {
                RetryDecision::Retry { delay } => self.pause_before_retry(delay).await,
                RetryDecision::Confirm => {
                    if !self.confirm_retry(url).await {
                        return Err(Failure::new(Error::UserDeclined, attempts));
                    }
                }
                RetryDecision::GiveUp { reason } => {
                    warn!(%url, attempts, %reason, "giving up");
                    return Err(Failure::new(error, attempts));
                }
            }
        }
    }

    /// Performs a single GET attempt.
    async fn attempt(
        &self,
        client: &ClientWithMiddleware,
        request: &FetchRequest,
        url: &Url,
    ) -> Result<reqwest::Response, Error> {
        let response = client
            .get(url.clone())
            .headers(request.headers.clone())
            .send()
            .await
            .map_err(|source| Error::Transient {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        debug!(%status, %url, "response received");

        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            })
        }
    }

    /// Waits out the fixed pause before an automatic retry, with a visible
    /// countdown when progress display is enabled.
    async fn pause_before_retry(&self, delay: Duration) {
        let seconds = delay.as_secs();
        if seconds == 0 {
            tokio::time::sleep(delay).await;
            return;
        }

        self.report(Severity::Warn, &format!("retrying in {seconds}s..."));
        let bar = self.config.progress.countdown_bar(seconds);
        bar.set_message("waiting to retry");
        for _ in 0..seconds {
            tokio::time::sleep(Duration::from_secs(1)).await;
            bar.inc(1);
        }
        bar.finish_and_clear();
    }

    /// Rings the chime and blocks on the confirmation capability.
    ///
    /// The prompt may block on a terminal read, so it runs on the blocking
    /// thread pool.
    async fn confirm_retry(&self, url: &Url) -> bool {
        self.config.chime.ring();
        let prompt = Arc::clone(&self.config.prompt);
        let message = format!("Retry request to {url}?");
        tokio::task::spawn_blocking(move || prompt.confirm(&message))
            .await
            .unwrap_or(false)
    }

    fn io_failure(&self, path: &Path, source: std::io::Error, attempts: u32) -> Failure {
        Failure::new(
            Error::Io {
                path: path.to_path_buf(),
                source,
            },
            attempts,
        )
    }

    fn report(&self, severity: Severity, message: &str) {
        self.config.reporter.report(severity, message);
    }
}
