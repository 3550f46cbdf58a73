//! Response models for the rollup API.

mod capabilities;
mod common;
mod jobs;
mod search;

pub use capabilities::{FieldCapability, RollupCapsResponse, RollupIndexCaps, RollupJobCaps};
pub use common::{AcknowledgedResponse, ErrorCause, ErrorPayload, ErrorResponse};
pub use jobs::{
    DateHistogramGroup, GetRollupJobsResponse, HistogramGroup, IndexerState, MetricConfig,
    RollupGroups, RollupJobConfig, RollupJobInfo, RollupJobStats, RollupJobStatus, StartedResponse,
    StoppedResponse, TermsGroup,
};
pub use search::{Hits, SearchResponse, Shards, TotalHits, TotalHitsRelation};
