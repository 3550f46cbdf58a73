//! Rollup capability endpoints.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::dispatch;
use crate::error::{ClientError, Result};
use crate::models::RollupCapsResponse;
use crate::requests::{GetRollupCaps, GetRollupIndexCaps};

/// Find rollup jobs by the index pattern they roll up.
pub async fn get_caps(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetRollupCaps,
    max_retries: usize,
) -> Result<RollupCapsResponse> {
    let response = dispatch(client, base_url, credentials, request, None, max_retries).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse capabilities: {}", e)))
}

/// Find the rollup capabilities stored inside a concrete rollup index.
pub async fn get_index_caps(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetRollupIndexCaps,
    max_retries: usize,
) -> Result<RollupCapsResponse> {
    debug!("Getting rollup index capabilities: {}", request.index());

    let response = dispatch(client, base_url, credentials, request, None, max_retries).await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse index capabilities: {}", e))
    })
}
