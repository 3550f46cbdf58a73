//! Credentials for authenticating with the rollup service.

use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};

/// How the client authenticates outgoing requests.
///
/// The service's auth is stateless: credentials are attached to every request
/// and there is no session to establish or renew.
#[derive(Debug, Clone, Default)]
pub enum Credentials {
    /// No `Authorization` header. Suitable for unsecured development nodes.
    #[default]
    Anonymous,
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Base64-encoded `id:api_key` pair, sent as `Authorization: ApiKey ...`.
    ApiKey(SecretString),
}

impl Credentials {
    /// Attach the `Authorization` header for these credentials.
    pub(crate) fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self {
            Credentials::Anonymous => builder,
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Credentials::ApiKey(key) => {
                builder.header("Authorization", format!("ApiKey {}", key.expose_secret()))
            }
        }
    }
}
