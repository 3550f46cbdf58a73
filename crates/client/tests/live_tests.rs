//! Live smoke tests against a real cluster.
//!
//! Ignored by default. Point `ROLLUP_URL` at a cluster (optionally with
//! `ROLLUP_USERNAME`/`ROLLUP_PASSWORD`) and run:
//!
//! ```text
//! cargo test --test live_tests -- --ignored
//! ```

use rollup_client::auth::Credentials;
use rollup_client::RollupClient;
use secrecy::SecretString;

fn live_client() -> Option<RollupClient> {
    dotenvy::dotenv().ok();
    let url = std::env::var("ROLLUP_URL").ok()?;

    let credentials = match (
        std::env::var("ROLLUP_USERNAME"),
        std::env::var("ROLLUP_PASSWORD"),
    ) {
        (Ok(username), Ok(password)) => Credentials::Basic {
            username,
            password: SecretString::from(password),
        },
        _ => Credentials::Anonymous,
    };

    RollupClient::builder()
        .base_url(url)
        .credentials(credentials)
        .skip_verify(true)
        .build()
        .ok()
}

#[tokio::test]
#[ignore = "requires a live cluster via ROLLUP_URL"]
async fn test_live_get_jobs() {
    let Some(client) = live_client() else {
        eprintln!("ROLLUP_URL not set, skipping");
        return;
    };

    let jobs = client.get_jobs().await.expect("get_jobs failed");
    eprintln!("{} rollup jobs configured", jobs.jobs.len());
}

#[tokio::test]
#[ignore = "requires a live cluster via ROLLUP_URL"]
async fn test_live_get_capabilities() {
    let Some(client) = live_client() else {
        eprintln!("ROLLUP_URL not set, skipping");
        return;
    };

    let caps = client
        .get_capabilities(None)
        .await
        .expect("get_capabilities failed");
    eprintln!("capabilities for {} patterns", caps.0.len());
}
