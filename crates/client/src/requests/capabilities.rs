//! Descriptors for the rollup capability endpoints.

use reqwest::Method;

use crate::endpoints::encode_path_segment;
use crate::params::Params;
use crate::requests::RollupRequest;

/// Find rollup jobs by the index pattern they roll up.
#[derive(Debug, Clone)]
pub struct GetRollupCaps {
    index_pattern: Option<String>,
    params: Params,
}

impl GetRollupCaps {
    /// Capabilities for jobs whose source matches `index_pattern`.
    pub fn new(index_pattern: impl Into<String>) -> Self {
        Self {
            index_pattern: Some(index_pattern.into()),
            params: Params::new(),
        }
    }

    /// Capabilities for every configured job.
    pub fn all() -> Self {
        Self {
            index_pattern: None,
            params: Params::new(),
        }
    }
}

impl RollupRequest for GetRollupCaps {
    const METHOD: Method = Method::GET;
    const SUPPORTS_BODY: bool = false;

    fn path(&self) -> String {
        match &self.index_pattern {
            Some(pattern) => format!("/_rollup/data/{}", encode_path_segment(pattern)),
            None => "/_rollup/data/_all".to_string(),
        }
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}

/// Find the rollup capabilities stored inside a concrete rollup index.
#[derive(Debug, Clone)]
pub struct GetRollupIndexCaps {
    index: String,
    params: Params,
}

impl GetRollupIndexCaps {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            params: Params::new(),
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }
}

impl RollupRequest for GetRollupIndexCaps {
    const METHOD: Method = Method::GET;
    const SUPPORTS_BODY: bool = false;

    fn path(&self) -> String {
        format!("/{}/_rollup/data", encode_path_segment(&self.index))
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }
}
