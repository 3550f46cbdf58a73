//! Request descriptors for rollup endpoints.
//!
//! Each endpoint variant is a small value type that fixes the HTTP method and
//! body-eligibility at compile time and exposes its query parameters as typed
//! properties backed by a [`Params`] store. A descriptor is built fresh per
//! API call, mutated by the caller through its setters, then handed to the
//! transport, which reads [`RollupRequest::METHOD`] and
//! [`RollupRequest::SUPPORTS_BODY`] without inspecting endpoint identity.
//!
//! Does NOT handle:
//! - HTTP dispatch or retries (see [`crate::endpoints`]).
//! - Body payloads; body content belongs to the job/search models.

mod capabilities;
mod jobs;
mod search;

pub use capabilities::{GetRollupCaps, GetRollupIndexCaps};
pub use jobs::{CreateRollupJob, DeleteRollupJob, GetRollupJobs, StartRollupJob, StopRollupJob};
pub use search::RollupSearch;

use reqwest::Method;

use crate::params::Params;

/// A fully-described rollup API request.
///
/// `METHOD` and `SUPPORTS_BODY` are per-endpoint constants: they never change
/// across reads and are independent of any property mutation. The transport
/// rejects a body on any endpoint whose `SUPPORTS_BODY` is false.
pub trait RollupRequest: Sized {
    /// HTTP method for this endpoint.
    const METHOD: Method;

    /// Whether this endpoint accepts a request body.
    const SUPPORTS_BODY: bool;

    /// URL path for this request, with path segments already escaped.
    fn path(&self) -> String;

    /// Query parameters set so far.
    fn params(&self) -> &Params;

    /// Mutable access for property setters.
    fn params_mut(&mut self) -> &mut Params;

    /// Pretty-print the JSON response.
    fn pretty(mut self, pretty: Option<bool>) -> Self {
        self.params_mut().set("pretty", pretty);
        self
    }

    /// Return human-readable values for statistics.
    fn human(mut self, human: Option<bool>) -> Self {
        self.params_mut().set("human", human);
        self
    }

    /// Include stack traces in error responses.
    fn error_trace(mut self, error_trace: Option<bool>) -> Self {
        self.params_mut().set("error_trace", error_trace);
        self
    }

    /// Comma-separated list of filters for the response fields.
    fn filter_path(mut self, filter_path: Option<Vec<String>>) -> Self {
        self.params_mut().set("filter_path", filter_path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_params_available_on_every_descriptor() {
        let request = GetRollupCaps::all()
            .pretty(Some(true))
            .filter_path(Some(vec!["*.rollup_jobs".to_string()]));
        assert_eq!(
            request.params().to_query_string(),
            "pretty=true&filter_path=*.rollup_jobs"
        );
    }

    #[test]
    fn test_common_params_clear_with_none() {
        let request = StartRollupJob::new("sensor").error_trace(Some(true));
        assert!(request.params().contains("error_trace"));

        let request = request.error_trace(None);
        assert!(request.params().is_empty());
    }
}
