//! Rollup search API methods for [`RollupClient`].

use crate::client::RollupClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SearchResponse;
use crate::requests::RollupSearch;

impl RollupClient {
    /// Search rolled-up data.
    ///
    /// Takes the full descriptor so callers can opt into
    /// [`RollupSearch::typed_keys`] and
    /// [`RollupSearch::total_hits_as_integer`]; `query` is a standard query
    /// DSL body.
    pub async fn search(
        &self,
        request: RollupSearch,
        query: &serde_json::Value,
    ) -> Result<SearchResponse> {
        endpoints::search(
            &self.http,
            &self.base_url,
            &self.credentials,
            &request,
            query,
            self.max_retries,
        )
        .await
    }
}
