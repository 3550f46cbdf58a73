//! Main rollup API client and API methods.
//!
//! This module provides the primary [`RollupClient`] for driving the rollup
//! subsystem over its REST API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `jobs`: Job lifecycle methods
//! - `capabilities`: Capability lookup methods
//! - `search`: Rollup search methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Request parameter encoding (delegated to [`crate::params`] via the
//!   request descriptors)

pub mod builder;

// API method submodules
mod capabilities;
mod jobs;
mod search;

use crate::auth::Credentials;

/// Rollup REST API client.
///
/// # Creating a Client
///
/// Use [`RollupClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use rollup_client::{Credentials, RollupClient};
/// use secrecy::SecretString;
///
/// let client = RollupClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .credentials(Credentials::ApiKey(SecretString::from("my-key")))
///     .build()?;
/// ```
///
/// The client is cheap to share: it holds a pooled HTTP client internally
/// and all methods take `&self`.
#[derive(Debug)]
pub struct RollupClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) max_retries: usize,
}

impl RollupClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RollupClientBuilder {
        builder::RollupClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
