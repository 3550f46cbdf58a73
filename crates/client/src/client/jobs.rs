//! Job lifecycle API methods for [`RollupClient`].
//!
//! # What this module handles:
//! - Creating, inspecting, starting, stopping, and deleting rollup jobs
//!
//! # What this module does NOT handle:
//! - Capability lookups (in [`crate::client::capabilities`])
//! - Searching rolled-up data (in [`crate::client::search`])
//! - Low-level HTTP calls (in [`crate::endpoints::jobs`])

use crate::client::RollupClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetRollupJobsResponse, RollupJobConfig, StartedResponse, StoppedResponse,
};
use crate::requests::{
    CreateRollupJob, DeleteRollupJob, GetRollupJobs, StartRollupJob, StopRollupJob,
};

impl RollupClient {
    /// Create a rollup job. The job starts in the stopped state.
    pub async fn create_job(
        &self,
        id: &str,
        config: &RollupJobConfig,
    ) -> Result<AcknowledgedResponse> {
        endpoints::create_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            &CreateRollupJob::new(id),
            config,
            self.max_retries,
        )
        .await
    }

    /// Get configuration, status, and stats for one job.
    pub async fn get_job(&self, id: &str) -> Result<GetRollupJobsResponse> {
        endpoints::get_jobs(
            &self.http,
            &self.base_url,
            &self.credentials,
            &GetRollupJobs::new(id),
            self.max_retries,
        )
        .await
    }

    /// Get configuration, status, and stats for every job.
    pub async fn get_jobs(&self) -> Result<GetRollupJobsResponse> {
        endpoints::get_jobs(
            &self.http,
            &self.base_url,
            &self.credentials,
            &GetRollupJobs::all(),
            self.max_retries,
        )
        .await
    }

    /// Delete a stopped rollup job.
    pub async fn delete_job(&self, id: &str) -> Result<AcknowledgedResponse> {
        endpoints::delete_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            &DeleteRollupJob::new(id),
            self.max_retries,
        )
        .await
    }

    /// Start a stopped rollup job.
    pub async fn start_job(&self, id: &str) -> Result<StartedResponse> {
        endpoints::start_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            &StartRollupJob::new(id),
            self.max_retries,
        )
        .await
    }

    /// Stop a running rollup job.
    ///
    /// Takes the full descriptor so callers can opt into
    /// [`StopRollupJob::wait_for_completion`] and [`StopRollupJob::timeout`].
    pub async fn stop_job(&self, request: StopRollupJob) -> Result<StoppedResponse> {
        endpoints::stop_job(
            &self.http,
            &self.base_url,
            &self.credentials,
            &request,
            self.max_retries,
        )
        .await
    }
}
