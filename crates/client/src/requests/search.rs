//! Descriptor for the rollup search endpoint.

use reqwest::Method;

use crate::endpoints::encode_path_segment;
use crate::params::Params;
use crate::requests::RollupRequest;

/// Search rolled-up data with a standard query DSL body.
///
/// The search body travels as the request body; only the response-shaping
/// options live in the query string.
#[derive(Debug, Clone)]
pub struct RollupSearch {
    index: String,
    params: Params,
}

impl RollupSearch {
    /// Search the given rollup index, concrete index, or pattern.
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            params: Params::new(),
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Render `hits.total` as an integer rather than an object in the
    /// response.
    pub fn total_hits_as_integer(mut self, value: Option<bool>) -> Self {
        self.params.set("rest_total_hits_as_int", value);
        self
    }

    /// Prefix aggregation and suggester names with their types in the
    /// response.
    pub fn typed_keys(mut self, value: Option<bool>) -> Self {
        self.params.set("typed_keys", value);
        self
    }
}

impl RollupRequest for RollupSearch {
    const METHOD: Method = Method::POST;
    const SUPPORTS_BODY: bool = true;

    fn path(&self) -> String {
        format!("/{}/_rollup_search", encode_path_segment(&self.index))
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}
