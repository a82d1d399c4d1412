#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use stubborn::console::{Chime, Prompt, SilentReporter};
use stubborn::{FetcherBuilder, RetryMode};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_PATH: &str = "/data";
pub const TEST_BODY: &[u8] = b"payload-bytes";

/// Creates a fetcher builder suitable for tests: silent, no progress bars,
/// and no pause between retries.
pub fn quick_fetcher(mode: RetryMode, retries: u32) -> FetcherBuilder {
    FetcherBuilder::hidden()
        .reporter(SilentReporter)
        .mode(mode)
        .retries(retries)
        .pause(Duration::ZERO)
        .timeout(Duration::from_secs(5))
}

/// Builds the test URL for a server's `TEST_PATH`.
pub fn data_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), TEST_PATH)
}

/// Starts a stub server that answers `TEST_PATH` with `failures` error
/// responses before succeeding with `TEST_BODY`.
pub async fn server_failing_n_times(failures: u64, status: u16) -> MockServer {
    let server = MockServer::start().await;
    if failures > 0 {
        Mock::given(method("GET"))
            .and(path(TEST_PATH))
            .respond_with(ResponseTemplate::new(status))
            .up_to_n_times(failures)
            .expect(failures)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(TEST_BODY))
        .mount(&server)
        .await;
    server
}

/// Starts a stub server that always answers `TEST_PATH` with the given
/// status, expecting exactly `expected_hits` requests.
pub async fn server_always_failing(status: u16, expected_hits: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .respond_with(ResponseTemplate::new(status))
        .expect(expected_hits)
        .mount(&server)
        .await;
    server
}

/// Returns a URL pointing at a local port with nothing listening on it, so
/// connections are refused (a transient network error).
pub fn refused_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}{TEST_PATH}")
}

/// A scripted confirmation capability counting how often it is consulted.
pub struct CountingPrompt {
    answer: bool,
    calls: Arc<AtomicUsize>,
}

impl CountingPrompt {
    pub fn new(answer: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                answer,
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

impl Prompt for CountingPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

/// A chime counting how often it rings.
pub struct CountingChime {
    rings: Arc<AtomicUsize>,
}

impl CountingChime {
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let rings = Arc::new(AtomicUsize::new(0));
        (
            Self {
                rings: Arc::clone(&rings),
            },
            rings,
        )
    }
}

impl Chime for CountingChime {
    fn ring(&self) {
        self.rings.fetch_add(1, Ordering::SeqCst);
    }
}
