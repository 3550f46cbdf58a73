//! Error types for the rollup client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during rollup client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from the service.
    #[error("API error ({status}) at {url}: {message}{}", .error_type.as_ref().map(|t| format!(" [{t}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        error_type: Option<String>,
        message: String,
    },

    /// A request body was supplied for an endpoint that does not accept one.
    #[error("endpoint {path} does not accept a request body")]
    BodyNotSupported { path: String },

    /// Invalid response format from the service.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// JSON serialization failure when building a request body.
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(_) => true,
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (transient server error)
    /// - 504: Gateway Timeout (transient server error)
    ///
    /// 4xx client errors and 500/501 fail immediately.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }
}
