//! Capability lookup API methods for [`RollupClient`].

use crate::client::RollupClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::RollupCapsResponse;
use crate::requests::{GetRollupCaps, GetRollupIndexCaps};

impl RollupClient {
    /// Find rollup jobs by the index pattern they roll up. `None` returns
    /// capabilities for every configured job.
    pub async fn get_capabilities(
        &self,
        index_pattern: Option<&str>,
    ) -> Result<RollupCapsResponse> {
        let request = match index_pattern {
            Some(pattern) => GetRollupCaps::new(pattern),
            None => GetRollupCaps::all(),
        };
        endpoints::get_caps(
            &self.http,
            &self.base_url,
            &self.credentials,
            &request,
            self.max_retries,
        )
        .await
    }

    /// Find the rollup capabilities stored inside a concrete rollup index.
    pub async fn get_index_capabilities(&self, index: &str) -> Result<RollupCapsResponse> {
        endpoints::get_index_caps(
            &self.http,
            &self.base_url,
            &self.credentials,
            &GetRollupIndexCaps::new(index),
            self.max_retries,
        )
        .await
    }
}
