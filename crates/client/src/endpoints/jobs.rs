//! Rollup job lifecycle endpoints.
//!
//! Responsibilities:
//! - Low-level HTTP calls for creating, inspecting, starting, stopping, and
//!   deleting rollup jobs.
//!
//! Does NOT handle:
//! - Credential selection or retry budgets (the caller passes both in).
//! - Business logic around job state transitions.

use reqwest::Client;
use tracing::debug;

use crate::auth::Credentials;
use crate::endpoints::dispatch;
use crate::error::{ClientError, Result};
use crate::models::{
    AcknowledgedResponse, GetRollupJobsResponse, RollupJobConfig, StartedResponse, StoppedResponse,
};
use crate::requests::{
    CreateRollupJob, DeleteRollupJob, GetRollupJobs, StartRollupJob, StopRollupJob,
};

/// Create a rollup job from its configuration.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &CreateRollupJob,
    config: &RollupJobConfig,
    max_retries: usize,
) -> Result<AcknowledgedResponse> {
    debug!("Creating rollup job: {}", request.id());

    let body = serde_json::to_value(config)?;
    let response = dispatch(
        client,
        base_url,
        credentials,
        request,
        Some(&body),
        max_retries,
    )
    .await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse create response: {}", e))
    })
}

/// Get configuration, status, and stats for one job or all jobs.
///
/// A job id that matches nothing yields an empty `jobs` list, not an error;
/// the service reserves 404 for malformed targets.
pub async fn get_jobs(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetRollupJobs,
    max_retries: usize,
) -> Result<GetRollupJobsResponse> {
    let response = dispatch(client, base_url, credentials, request, None, max_retries).await?;

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse jobs: {}", e)))
}

/// Delete a stopped rollup job.
pub async fn delete_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &DeleteRollupJob,
    max_retries: usize,
) -> Result<AcknowledgedResponse> {
    debug!("Deleting rollup job: {}", request.id());

    match dispatch(client, base_url, credentials, request, None, max_retries).await {
        Ok(response) => response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse delete response: {}", e))
        }),
        Err(ClientError::ApiError { status: 404, .. }) => Err(ClientError::NotFound(format!(
            "Rollup job '{}' not found",
            request.id()
        ))),
        Err(e) => Err(e),
    }
}

/// Start a stopped rollup job.
pub async fn start_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &StartRollupJob,
    max_retries: usize,
) -> Result<StartedResponse> {
    debug!("Starting rollup job: {}", request.id());

    match dispatch(client, base_url, credentials, request, None, max_retries).await {
        Ok(response) => response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse start response: {}", e))
        }),
        Err(ClientError::ApiError { status: 404, .. }) => Err(ClientError::NotFound(format!(
            "Rollup job '{}' not found",
            request.id()
        ))),
        Err(e) => Err(e),
    }
}

/// Stop a running rollup job, optionally blocking until it has stopped.
pub async fn stop_job(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &StopRollupJob,
    max_retries: usize,
) -> Result<StoppedResponse> {
    debug!("Stopping rollup job: {}", request.id());

    match dispatch(client, base_url, credentials, request, None, max_retries).await {
        Ok(response) => response.json().await.map_err(|e| {
            ClientError::InvalidResponse(format!("Failed to parse stop response: {}", e))
        }),
        Err(ClientError::ApiError { status: 404, .. }) => Err(ClientError::NotFound(format!(
            "Rollup job '{}' not found",
            request.id()
        ))),
        Err(e) => Err(e),
    }
}
