//! Request dispatch and retry.
//!
//! Responsibilities:
//! - Build the HTTP request from a descriptor's method, path, and parameter
//!   store, and enforce the body-eligibility contract before any I/O.
//! - Retry HTTP 429 responses with exponential backoff.
//! - Map non-success responses to [`ClientError::ApiError`], extracting the
//!   service's structured error body when present.
//!
//! Does NOT handle:
//! - Response body parsing (each endpoint function decodes its own model).
//! - Which parameters or body an endpoint takes (see [`crate::requests`]).

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::debug;

use crate::auth::Credentials;
use crate::error::{ClientError, Result};
use crate::models::ErrorResponse;
use crate::requests::RollupRequest;

/// Maximum number of retry attempts for rate-limited requests.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Build and send the HTTP request described by `request`.
///
/// The method and body-eligibility come from the descriptor's constants; the
/// query string comes from its parameter store. A `Some(body)` on an endpoint
/// whose `SUPPORTS_BODY` is false is a caller bug and is rejected with
/// [`ClientError::BodyNotSupported`] before anything is sent.
pub async fn dispatch<R: RollupRequest>(
    http: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &R,
    body: Option<&Value>,
    max_retries: usize,
) -> Result<Response> {
    if body.is_some() && !R::SUPPORTS_BODY {
        return Err(ClientError::BodyNotSupported {
            path: request.path(),
        });
    }

    let url = format!("{}{}", base_url, request.path());
    let mut builder = credentials.apply(http.request(R::METHOD, &url));
    if !request.params().is_empty() {
        builder = builder.query(request.params().pairs());
    }
    if let Some(body) = body {
        builder = builder.json(body);
    }

    send_request_with_retry(builder, max_retries).await
}

/// Send an HTTP request, retrying 429 responses with exponential backoff
/// (1s, 2s, 4s = 2^attempt).
///
/// # Errors
///
/// Returns [`ClientError::MaxRetriesExceeded`] when retries are exhausted,
/// [`ClientError::ApiError`] for non-success statuses, and propagates
/// `reqwest` errors as [`ClientError::HttpError`].
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                // Non-clonable builders (streaming bodies) get exactly one
                // attempt.
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    let response = builder.send().await?;
                    return check_status(response).await;
                } else {
                    debug!("Cannot clone request builder for retry");
                    return Err(ClientError::MaxRetriesExceeded(attempt));
                }
            }
        };

        match attempt_builder.send().await {
            Ok(response) if response.status().as_u16() == 429 => {
                if attempt < max_retries {
                    let backoff_secs = 2u64.pow(attempt as u32);
                    debug!(
                        attempt = attempt + 1,
                        max_retries = max_retries + 1,
                        backoff_secs = backoff_secs,
                        "Rate limited (HTTP 429), retrying with exponential backoff"
                    );
                    tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                } else {
                    debug!(
                        attempts = attempt + 1,
                        "Max retries exhausted for rate-limited request"
                    );
                    return Err(ClientError::MaxRetriesExceeded(max_retries + 1));
                }
            }
            Ok(response) => {
                if attempt > 0 && response.status().is_success() {
                    debug!(attempt = attempt + 1, "Request succeeded after retry");
                }
                return check_status(response).await;
            }
            Err(e) => {
                // Transport-level failures are not retried here.
                return Err(ClientError::from(e));
            }
        }
    }

    // Unreachable: the loop always returns.
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Map a non-success response to [`ClientError::ApiError`].
///
/// The service reports failures as `{"error": {"type", "reason", ...},
/// "status"}`; older endpoints may return a bare string under `error`. Fall
/// back to the raw body when neither shape parses.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let (error_type, message) = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(parsed) => (parsed.error_type(), parsed.reason()),
        Err(_) => (None, body),
    };

    Err(ClientError::ApiError {
        status,
        url,
        error_type,
        message,
    })
}
