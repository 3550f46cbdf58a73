//! Capability endpoint tests.
//!
//! Covers the two capability lookups: by source index pattern and by rollup
//! index, including the empty-map response for patterns no job covers.

mod common;

use common::*;
use rollup_client::RollupClient;
use wiremock::matchers::{method, path};

fn caps_fixture() -> serde_json::Value {
    serde_json::json!({
        "sensor-*": {
            "rollup_jobs": [{
                "job_id": "sensor",
                "rollup_index": "sensor_rollup",
                "index_pattern": "sensor-*",
                "fields": {
                    "node": [{"agg": "terms"}],
                    "temperature": [{"agg": "min"}, {"agg": "max"}, {"agg": "avg"}],
                    "timestamp": [{"agg": "date_histogram", "fixed_interval": "1h", "time_zone": "UTC"}]
                }
            }]
        }
    })
}

#[tokio::test]
async fn test_get_caps_for_pattern() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_rollup/data/sensor-*"))
        .respond_with(ResponseTemplate::new(200).set_body_json(caps_fixture()))
        .mount(&mock_server)
        .await;

    let result = endpoints::get_caps(
        &Client::new(),
        &mock_server.uri(),
        &Credentials::Anonymous,
        &requests::GetRollupCaps::new("sensor-*"),
        3,
    )
    .await
    .unwrap();

    let caps = result.get("sensor-*").unwrap();
    assert_eq!(caps.rollup_jobs[0].job_id, "sensor");
    assert_eq!(caps.rollup_jobs[0].fields["temperature"].len(), 3);
}

#[tokio::test]
async fn test_get_caps_all() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/_rollup/data/_all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = RollupClient::builder()
        .base_url(mock_server.uri())
        .build()
        .unwrap();

    let result = client.get_capabilities(None).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn test_get_index_caps() {
    let mock_server = MockServer::start().await;

    let fixture = serde_json::json!({
        "sensor_rollup": {
            "rollup_jobs": [{
                "job_id": "sensor",
                "rollup_index": "sensor_rollup",
                "index_pattern": "sensor-*",
                "fields": {"node": [{"agg": "terms"}]}
            }]
        }
    });

    Mock::given(method("GET"))
        .and(path("/sensor_rollup/_rollup/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .mount(&mock_server)
        .await;

    let result = endpoints::get_index_caps(
        &Client::new(),
        &mock_server.uri(),
        &Credentials::Anonymous,
        &requests::GetRollupIndexCaps::new("sensor_rollup"),
        3,
    )
    .await
    .unwrap();

    assert_eq!(
        result.get("sensor_rollup").unwrap().rollup_jobs[0].index_pattern,
        "sensor-*"
    );
}
