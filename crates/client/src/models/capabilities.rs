//! Rollup capability models.
//!
//! Capability lookups answer "which rollup jobs cover this index pattern,
//! and which aggregations did they preserve per field". The wire shape is a
//! top-level map keyed by index pattern (or by rollup index for the
//! index-caps variant).

use std::collections::HashMap;

use serde::Deserialize;

/// Response from capability lookups: index pattern (or rollup index) to the
/// jobs that serve it.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct RollupCapsResponse(pub HashMap<String, RollupIndexCaps>);

impl RollupCapsResponse {
    /// Capabilities recorded under one index pattern or rollup index.
    pub fn get(&self, key: &str) -> Option<&RollupIndexCaps> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Jobs attached to one index pattern.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupIndexCaps {
    #[serde(default)]
    pub rollup_jobs: Vec<RollupJobCaps>,
}

/// What one job preserved: per-field lists of aggregation capabilities.
#[derive(Debug, Clone, Deserialize)]
pub struct RollupJobCaps {
    pub job_id: String,
    pub rollup_index: String,
    pub index_pattern: String,
    #[serde(default)]
    pub fields: HashMap<String, Vec<FieldCapability>>,
}

/// One aggregation a field supports, plus its settings (interval, time zone,
/// delay) as recorded by the job.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldCapability {
    pub agg: String,
    #[serde(flatten)]
    pub settings: HashMap<String, serde_json::Value>,
}
