//! Rollup REST API client.
//!
//! This crate provides a type-safe client for the rollup subsystem of an
//! Elasticsearch-compatible search/analytics engine: job lifecycle
//! management, capability lookups, and searching rolled-up data.
//!
//! Every endpoint is described by a request descriptor (see [`requests`])
//! that fixes its HTTP method and body-eligibility at compile time and
//! carries its query parameters in a typed store (see [`params`]). The
//! transport dispatches on the descriptor alone.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod params;
pub mod requests;

pub use auth::Credentials;
pub use client::RollupClient;
pub use client::builder::RollupClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    AcknowledgedResponse, GetRollupJobsResponse, IndexerState, RollupCapsResponse,
    RollupJobConfig, SearchResponse, StartedResponse, StoppedResponse, TotalHits,
};
pub use params::{Params, WireParam};
pub use requests::{
    CreateRollupJob, DeleteRollupJob, GetRollupCaps, GetRollupIndexCaps, GetRollupJobs,
    RollupRequest, RollupSearch, StartRollupJob, StopRollupJob,
};
