//! Common test utilities for integration tests.
//!
//! Re-exports the types every integration test needs, consumed via
//! `use common::*;`. Fixtures are built inline with `serde_json::json!`:
//! the payloads are small enough that files would only hide them.

#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use rollup_client::auth::Credentials;
#[allow(unused_imports)]
pub use rollup_client::{endpoints, requests};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};
