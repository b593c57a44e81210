//! Credentials and per-request authentication headers

use std::fmt;

use govcheck_types::AuthMode;
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Path of the client-credentials token exchange
pub const TOKEN_PATH: &str = "oauth";

/// Client id and secret issued in the MetaMap dashboard
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Public client id
    pub client_id: String,
    /// Client secret, never logged
    pub client_secret: String,
}

impl Credentials {
    /// Creates a credential pair
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Answer of the token exchange
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    /// Bearer token for the check endpoints
    pub access_token: String,
    /// Lifetime in seconds, when the server reports it
    #[serde(rename = "expiresIn", default)]
    pub expires_in: Option<u64>,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Attaches the `Authorization` header for `mode` to an outgoing request.
///
/// # Errors
///
/// Returns `ClientError::MissingAccessToken` when `mode` is `Bearer` and no
/// token is known. Nothing has been sent at that point.
pub fn authorize(
    builder: RequestBuilder,
    mode: AuthMode,
    credentials: &Credentials,
    token: Option<&str>,
) -> ClientResult<RequestBuilder> {
    match mode {
        AuthMode::Basic => Ok(builder.basic_auth(
            &credentials.client_id,
            Some(&credentials.client_secret),
        )),
        AuthMode::Bearer => token
            .map(|token| builder.bearer_auth(token))
            .ok_or(ClientError::MissingAccessToken),
    }
}
