//! Rollup job models.
//!
//! Responsibilities:
//! - Define the job configuration sent when creating a job and echoed back
//!   by job lookups, plus the per-job status and indexer statistics.
//!
//! Non-responsibilities:
//! - Does not handle HTTP requests (see endpoints module).
//! - Does not validate cron expressions or interval tokens; the service is
//!   the authority on those.

use serde::{Deserialize, Serialize};

/// Configuration of a rollup job.
///
/// This is both the create-job request body and the `config` block of job
/// lookups. The job id travels in the URL path on create, so it serializes
/// only when echoed back by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupJobConfig {
    /// Job id; populated on read, omitted from the create body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Pattern matching the indices to roll up.
    pub index_pattern: String,
    /// Destination index for the rolled-up documents.
    pub rollup_index: String,
    /// Cron expression controlling when the job runs.
    pub cron: String,
    /// Number of bucket results processed per indexer batch.
    pub page_size: u32,
    /// Grouping configuration for the rollup aggregations.
    pub groups: RollupGroups,
    /// Metrics collected per group.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metrics: Vec<MetricConfig>,
    /// Search timeout for each indexer batch, as a duration token (`20s`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

/// Grouping dimensions of a rollup job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupGroups {
    pub date_histogram: DateHistogramGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<TermsGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramGroup>,
}

/// Time-bucketing dimension. Exactly one of the interval forms is set;
/// `interval` is the deprecated spelling still echoed by older jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateHistogramGroup {
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// How long to wait before rolling up new documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Terms dimension: keeps the listed fields queryable as exact values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TermsGroup {
    pub fields: Vec<String>,
}

/// Numeric histogram dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramGroup {
    pub fields: Vec<String>,
    pub interval: u64,
}

/// Metrics collected for one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricConfig {
    pub field: String,
    /// Aggregations to pre-compute: `min`, `max`, `sum`, `avg`, `value_count`.
    pub metrics: Vec<String>,
}

/// Response from job lookups.
#[derive(Debug, Clone, Deserialize)]
pub struct GetRollupJobsResponse {
    #[serde(default)]
    pub jobs: Vec<RollupJobInfo>,
}

/// One job entry: configuration plus runtime state.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupJobInfo {
    pub config: RollupJobConfig,
    pub status: RollupJobStatus,
    pub stats: RollupJobStats,
}

/// Runtime status of a job's indexer.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupJobStatus {
    pub job_state: IndexerState,
    /// Position within the source data the indexer has reached; only present
    /// while the job has made progress.
    #[serde(default)]
    pub current_position: Option<serde_json::Value>,
    #[serde(default)]
    pub upgraded_doc_id: Option<bool>,
}

/// Lifecycle state of a rollup job's indexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexerState {
    /// Scheduled and waiting for the next trigger.
    Started,
    /// Actively rolling up a batch.
    Indexing,
    /// Stop requested, finishing the in-flight batch.
    Stopping,
    Stopped,
    Aborting,
}

impl std::fmt::Display for IndexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IndexerState::Started => "started",
            IndexerState::Indexing => "indexing",
            IndexerState::Stopping => "stopping",
            IndexerState::Stopped => "stopped",
            IndexerState::Aborting => "aborting",
        };
        write!(f, "{}", s)
    }
}

/// Indexer statistics for one job.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupJobStats {
    #[serde(default)]
    pub pages_processed: u64,
    #[serde(default)]
    pub documents_processed: u64,
    #[serde(default)]
    pub rollups_indexed: u64,
    #[serde(default)]
    pub trigger_count: u64,
    #[serde(default)]
    pub index_time_in_ms: u64,
    #[serde(default)]
    pub index_total: u64,
    #[serde(default)]
    pub index_failures: u64,
    #[serde(default)]
    pub search_time_in_ms: u64,
    #[serde(default)]
    pub search_total: u64,
    #[serde(default)]
    pub search_failures: u64,
    #[serde(default)]
    pub processing_time_in_ms: u64,
    #[serde(default)]
    pub processing_total: u64,
}

/// Response from starting a job.
#[derive(Debug, Clone, Deserialize)]
pub struct StartedResponse {
    pub started: bool,
}

/// Response from stopping a job.
#[derive(Debug, Clone, Deserialize)]
pub struct StoppedResponse {
    pub stopped: bool,
}
