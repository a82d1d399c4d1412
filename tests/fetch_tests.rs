//! Tests for the fetch operation and its retry behavior.
//!
//! These tests drive the attempt loop against stub servers, covering:
//! - Attempt counting under every retry mode
//! - Transient network and HTTP status failures
//! - Header defaults, overrides, and query parameters
//! - The alert-mode confirmation and chime capabilities

use std::sync::atomic::Ordering;

use stubborn::{Error, FetchRequest, RetryMode, DEFAULT_USER_AGENT};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_fetch_succeeds_on_first_attempt() {
    let server = server_failing_n_times(0, 500).await;
    let fetcher = quick_fetcher(RetryMode::Automatic, 3).build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let response = fetcher.fetch(&request).await.expect("fetch should succeed");

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(response.attempts(), 1);
    assert_eq!(response.body(), TEST_BODY);
}

#[tokio::test]
async fn test_fetch_retries_until_success() {
    // Fails twice, succeeds on the third call: with retries=2 the outcome
    // is success with attempt count 3.
    let server = server_failing_n_times(2, 500).await;
    let fetcher = quick_fetcher(RetryMode::Automatic, 2).build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let response = fetcher.fetch(&request).await.expect("fetch should succeed");

    assert_eq!(response.attempts(), 3);
    assert_eq!(response.body(), TEST_BODY);
}

#[tokio::test]
async fn test_fetch_exhausts_attempts_on_persistent_failure() {
    // retries=1 means two attempts total.
    let server = server_always_failing(503, 2).await;
    let fetcher = quick_fetcher(RetryMode::Automatic, 1).build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let failure = fetcher.fetch(&request).await.expect_err("fetch should fail");

    assert_eq!(failure.attempts, 2);
    assert!(matches!(failure.error, Error::HttpStatus { status: 503, .. }));
}

#[tokio::test]
async fn test_zero_retries_makes_exactly_one_attempt() {
    for mode in [RetryMode::Automatic, RetryMode::Alert, RetryMode::Manual] {
        let server = server_always_failing(500, 1).await;
        let fetcher = quick_fetcher(mode, 0).build();
        let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

        let failure = fetcher.fetch(&request).await.expect_err("fetch should fail");
        assert_eq!(failure.attempts, 1, "mode {mode} should make one attempt");
    }
}

#[tokio::test]
async fn test_manual_mode_never_retries_or_prompts() {
    let server = server_always_failing(500, 1).await;
    let (prompt, prompt_calls) = CountingPrompt::new(true);
    let (chime, rings) = CountingChime::new();
    let fetcher = quick_fetcher(RetryMode::Manual, 5)
        .prompt(prompt)
        .chime(chime)
        .build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let failure = fetcher.fetch(&request).await.expect_err("fetch should fail");

    assert_eq!(failure.attempts, 1);
    assert!(matches!(failure.error, Error::HttpStatus { status: 500, .. }));
    assert_eq!(prompt_calls.load(Ordering::SeqCst), 0);
    assert_eq!(rings.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_alert_mode_stops_when_user_declines() {
    let server = server_always_failing(500, 1).await;
    let (prompt, prompt_calls) = CountingPrompt::new(false);
    let (chime, rings) = CountingChime::new();
    let fetcher = quick_fetcher(RetryMode::Alert, 3)
        .prompt(prompt)
        .chime(chime)
        .build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let failure = fetcher.fetch(&request).await.expect_err("fetch should fail");

    assert_eq!(failure.attempts, 1);
    assert!(matches!(failure.error, Error::UserDeclined));
    assert_eq!(prompt_calls.load(Ordering::SeqCst), 1);
    assert_eq!(rings.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_alert_mode_retries_after_confirmation() {
    let server = server_failing_n_times(1, 500).await;
    let (prompt, prompt_calls) = CountingPrompt::new(true);
    let (chime, rings) = CountingChime::new();
    let fetcher = quick_fetcher(RetryMode::Alert, 3)
        .prompt(prompt)
        .chime(chime)
        .build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let response = fetcher.fetch(&request).await.expect("fetch should succeed");

    assert_eq!(response.attempts(), 2);
    assert_eq!(prompt_calls.load(Ordering::SeqCst), 1);
    assert_eq!(rings.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_transient_error_consumes_all_attempts() {
    let url = refused_url();
    let fetcher = quick_fetcher(RetryMode::Automatic, 2).build();
    let request = FetchRequest::try_from(url.as_str()).unwrap();

    let failure = fetcher.fetch(&request).await.expect_err("fetch should fail");

    assert_eq!(failure.attempts, 3);
    assert!(matches!(failure.error, Error::Transient { .. }));
}

#[tokio::test]
async fn test_default_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = quick_fetcher(RetryMode::Manual, 0).build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    fetcher.fetch(&request).await.expect("fetch should succeed");
}

#[tokio::test]
async fn test_header_overrides_reach_the_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .and(header("user-agent", "custom/1.0"))
        .and(header("x-token", "abc123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = quick_fetcher(RetryMode::Manual, 0)
        .header("user-agent", "custom/1.0".parse().unwrap())
        .build();
    let request = FetchRequest::try_from(data_url(&server).as_str())
        .unwrap()
        .header("x-token", "abc123")
        .unwrap();

    fetcher.fetch(&request).await.expect("fetch should succeed");
}

#[tokio::test]
async fn test_query_params_are_appended() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .and(query_param("page", "2"))
        .and(query_param("q", "stubborn"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = quick_fetcher(RetryMode::Manual, 0).build();
    let request = FetchRequest::try_from(data_url(&server).as_str())
        .unwrap()
        .param("page", "2")
        .param("q", "stubborn");

    fetcher.fetch(&request).await.expect("fetch should succeed");
}

#[tokio::test]
async fn test_partial_content_counts_as_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TEST_PATH))
        .respond_with(ResponseTemplate::new(206).set_body_bytes(&TEST_BODY[..4]))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = quick_fetcher(RetryMode::Automatic, 2).build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let response = fetcher.fetch(&request).await.expect("206 is a success");
    assert_eq!(response.status().as_u16(), 206);
    assert_eq!(response.attempts(), 1);
}

#[tokio::test]
async fn test_non_success_status_carries_body_free_failure() {
    let server = server_always_failing(404, 1).await;
    let fetcher = quick_fetcher(RetryMode::Manual, 0).build();
    let request = FetchRequest::try_from(data_url(&server).as_str()).unwrap();

    let failure = fetcher.fetch(&request).await.expect_err("fetch should fail");

    match failure.error {
        Error::HttpStatus { status, ref url } => {
            assert_eq!(status, 404);
            assert!(url.contains(TEST_PATH));
        }
        ref other => panic!("expected HttpStatus, got {other:?}"),
    }
}
