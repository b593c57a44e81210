use reqwest::StatusCode;
use thiserror::Error;

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by the MetaMap client.
///
/// These cover configuration and transport failures only. A verification the
/// server rejects inside a 2xx response is data, see
/// [`GovCheckResponse::error`](govcheck_types::GovCheckResponse).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The base URL or endpoint path could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A bearer-authenticated call was attempted before a token was known
    #[error("No access token available, authenticate first")]
    MissingAccessToken,

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection, TLS or body transfer failure
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("Upstream returned {status}: {body}")]
    Status {
        /// HTTP status of the response
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request body could not be serialized
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

impl ClientError {
    /// Whether the error happened while talking to the server, as opposed to
    /// before any request was sent
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Network(_) | Self::Status { .. } | Self::Decode(_)
        )
    }

    /// Whether repeating the same call may succeed.
    ///
    /// The client never retries on its own; this is a hint for callers.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Network(_) => true,
            Self::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// HTTP status of the failed response, if the server answered at all
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Network(err)
        }
    }
}
