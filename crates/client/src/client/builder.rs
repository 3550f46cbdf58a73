//! Client builder for constructing [`RollupClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating the required `base_url` and normalizing it (no trailing
//!   slashes, so path concatenation never produces `//`)
//! - Configuring the underlying HTTP client (timeout, redirects, TLS
//!   verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`RollupClient`] methods)
//! - Retry behavior at request time (see `endpoints::send_request_with_retry`)

use std::time::Duration;

use crate::auth::Credentials;
use crate::client::RollupClient;
use crate::error::{ClientError, Result};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default retry budget for rate-limited requests.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Redirect ceiling for the underlying HTTP client.
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Builder for creating a new [`RollupClient`].
///
/// All options have defaults except `base_url`, which is required.
/// Credentials default to [`Credentials::Anonymous`].
pub struct RollupClientBuilder {
    base_url: Option<String>,
    credentials: Credentials,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for RollupClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: Credentials::Anonymous,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RollupClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the cluster, including protocol and port, e.g.
    /// `https://localhost:9200`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials attached to every request.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle
    /// attacks.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`RollupClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided and
    /// `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<RollupClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification; it
                // has no effect on plain HTTP connections.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(RollupClient {
            http,
            base_url,
            credentials: self.credentials,
            max_retries: self.max_retries,
        })
    }
}
