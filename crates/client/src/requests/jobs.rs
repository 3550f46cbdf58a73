//! Descriptors for the rollup job lifecycle endpoints.

use std::time::Duration;

use reqwest::Method;

use crate::endpoints::encode_path_segment;
use crate::params::Params;
use crate::requests::RollupRequest;

/// Delete a rollup job. The job must be stopped first.
#[derive(Debug, Clone)]
pub struct DeleteRollupJob {
    id: String,
    params: Params,
}

impl DeleteRollupJob {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: Params::new(),
        }
    }

    /// Job id this request targets.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl RollupRequest for DeleteRollupJob {
    const METHOD: Method = Method::DELETE;
    const SUPPORTS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/_rollup/job/{}", encode_path_segment(&self.id))
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

/// Get the configuration, status, and stats of one rollup job, or of all jobs.
#[derive(Debug, Clone)]
pub struct GetRollupJobs {
    id: Option<String>,
    params: Params,
}

impl GetRollupJobs {
    /// Target a single job by id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            params: Params::new(),
        }
    }

    /// Target every job on the cluster.
    pub fn all() -> Self {
        Self {
            id: None,
            params: Params::new(),
        }
    }
}

impl RollupRequest for GetRollupJobs {
    const METHOD: Method = Method::GET;
    const SUPPORTS_BODY: bool = false;

    fn path(&self) -> String {
        match &self.id {
            Some(id) => format!("/_rollup/job/{}", encode_path_segment(id)),
            None => "/_rollup/job/_all".to_string(),
        }
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

/// Create a rollup job. The job configuration travels in the request body.
#[derive(Debug, Clone)]
pub struct CreateRollupJob {
    id: String,
    params: Params,
}

impl CreateRollupJob {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: Params::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl RollupRequest for CreateRollupJob {
    const METHOD: Method = Method::PUT;
    const SUPPORTS_BODY: bool = true;

    fn path(&self) -> String {
        format!("/_rollup/job/{}", encode_path_segment(&self.id))
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

/// Start a stopped rollup job.
#[derive(Debug, Clone)]
pub struct StartRollupJob {
    id: String,
    params: Params,
}

impl StartRollupJob {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: Params::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl RollupRequest for StartRollupJob {
    const METHOD: Method = Method::POST;
    const SUPPORTS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/_rollup/job/{}/_start", encode_path_segment(&self.id))
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

/// Stop a running rollup job.
#[derive(Debug, Clone)]
pub struct StopRollupJob {
    id: String,
    params: Params,
}

impl StopRollupJob {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            params: Params::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Block for at most this long while waiting for the job to stop.
    ///
    /// Unset means the service's own default (30s) applies; the client never
    /// injects it.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.params.set("timeout", timeout);
        self
    }

    /// Block until the job has fully stopped instead of returning
    /// immediately. The service defaults to false when unset.
    pub fn wait_for_completion(mut self, wait: Option<bool>) -> Self {
        self.params.set("wait_for_completion", wait);
        self
    }
}

impl RollupRequest for StopRollupJob {
    const METHOD: Method = Method::POST;
    const SUPPORTS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/_rollup/job/{}/_stop", encode_path_segment(&self.id))
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}
