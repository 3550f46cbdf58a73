//! Rollup search endpoint.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::dispatch;
use crate::error::{ClientError, Result};
use crate::models::SearchResponse;
use crate::requests::RollupSearch;

/// Search rolled-up data. `query` is a standard query DSL body; only
/// aggregations supported by the backing rollup jobs will answer.
pub async fn search(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &RollupSearch,
    query: &Value,
    max_retries: usize,
) -> Result<SearchResponse> {
    debug!("Rollup search on: {}", request.index());

    let response = dispatch(
        client,
        base_url,
        credentials,
        request,
        Some(query),
        max_retries,
    )
    .await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse search response: {}", e)))
}
