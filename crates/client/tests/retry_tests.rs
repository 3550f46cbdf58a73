//! Retry behavior tests.
//!
//! This module tests the transport's retry logic:
//! - Rate limiting (429) retried with exponential backoff
//! - Retry budget exhaustion
//! - No retry on non-retryable statuses
//!
//! # Invariants
//! - 429 triggers retry with exponential backoff (1s, 2s, 4s)
//! - 4xx and 500 fail immediately without retry

mod common;

use common::*;
use rollup_client::ClientError;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let mock_server = MockServer::start().await;

    // 429 twice, then 200.
    Mock::given(method("GET"))
        .and(path("/_rollup/job/_all"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/_rollup/job/_all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"jobs": []})))
        .mount(&mock_server)
        .await;

    let start = std::time::Instant::now();
    let result = endpoints::get_jobs(
        &Client::new(),
        &mock_server.uri(),
        &Credentials::Anonymous,
        &requests::GetRollupJobs::all(),
        3,
    )
    .await;
    let elapsed = start.elapsed();

    assert!(result.is_ok());

    // Backoff slept 1s + 2s before the third attempt. Timing assertions can
    // be flaky, so use a generous threshold.
    assert!(elapsed >= std::time::Duration::from_secs(2));
}

#[tokio::test]
async fn test_retry_exhaustion_on_persistent_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_rollup/job/_all"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let result = endpoints::get_jobs(
        &Client::new(),
        &mock_server.uri(),
        &Credentials::Anonymous,
        &requests::GetRollupJobs::all(),
        2,
    )
    .await;

    // 2 retries + 1 initial attempt = 3 total.
    assert!(matches!(result, Err(ClientError::MaxRetriesExceeded(3))));
}

#[tokio::test]
async fn test_no_retry_on_400() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_rollup/job/_all"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"type": "parse_exception", "reason": "bad request"},
            "status": 400
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let start = std::time::Instant::now();
    let result = endpoints::get_jobs(
        &Client::new(),
        &mock_server.uri(),
        &Credentials::Anonymous,
        &requests::GetRollupJobs::all(),
        3,
    )
    .await;

    assert!(matches!(
        result,
        Err(ClientError::ApiError { status: 400, .. })
    ));
    // Failed fast: no backoff sleeps happened.
    assert!(start.elapsed() < std::time::Duration::from_secs(1));
}
