//! Rollup search response models.
//!
//! Rollup searches return the standard search response envelope. Hits are
//! always empty (rolled-up data only answers aggregations), but the envelope
//! is modeled in full so callers can reuse familiar accessors.

use serde::Deserialize;

/// Search response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub took: u64,
    pub timed_out: bool,
    #[serde(rename = "_shards")]
    pub shards: Shards,
    pub hits: Hits,
    /// Aggregation results, keyed by aggregation name. Kept as raw JSON: the
    /// shape is caller-defined by the query body.
    #[serde(default)]
    pub aggregations: Option<serde_json::Value>,
}

/// Shard accounting for the search.
#[derive(Debug, Clone, Deserialize)]
pub struct Shards {
    pub total: u32,
    pub successful: u32,
    #[serde(default)]
    pub skipped: u32,
    pub failed: u32,
}

/// Hit metadata. Rollup searches report totals but never documents.
#[derive(Debug, Clone, Deserialize)]
pub struct Hits {
    #[serde(default)]
    pub total: Option<TotalHits>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub hits: Vec<serde_json::Value>,
}

/// Total hit count.
///
/// The wire form depends on the request: an object by default, a bare
/// integer when `rest_total_hits_as_int=true` was sent.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TotalHits {
    Object {
        value: u64,
        relation: TotalHitsRelation,
    },
    Count(u64),
}

impl TotalHits {
    /// The count, regardless of wire form.
    pub fn value(&self) -> u64 {
        match self {
            TotalHits::Object { value, .. } => *value,
            TotalHits::Count(count) => *count,
        }
    }
}

/// Whether the total is exact or a lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalHitsRelation {
    Eq,
    Gte,
}
