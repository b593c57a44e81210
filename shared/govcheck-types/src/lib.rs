//! Wire types for the MetaMap government-check API

use serde::{de::DeserializeOwned, Serialize};
use strum::{Display, EnumString};

/// Argentine government checks (DNI, RENAPER, RENAPER Premium)
pub mod argentina;

/// Response envelope shared by every check
pub mod response;

pub use response::{BusinessError, GovCheckResponse};

/// Opaque caller bookkeeping echoed back in webhooks
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// HTTP methods an endpoint may be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Authentication scheme attached to a single outgoing request.
///
/// `Basic` sends the client id and secret and is only accepted by the token
/// exchange. Every check endpoint expects `Bearer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AuthMode {
    Basic,
    Bearer,
}

/// Declarative description of one check endpoint.
///
/// Each request type names its path, method and auth scheme, and the shape of
/// the `data` object the endpoint answers with. The client dispatches any
/// implementor through a single generic code path, so adding a check is a
/// matter of declaring its types.
///
/// ## Example
/// ```rust,ignore
/// let response = client.send(&ArgentinaDniRequest::new(...)).await?;
/// // response: GovCheckResponse<ArgentinaDniData>
/// ```
pub trait GovCheckRequest: Serialize + Send + Sync {
    /// Path relative to the API base URL, without a leading slash
    const PATH: &'static str;

    /// HTTP method used for the call
    const METHOD: HttpMethod = HttpMethod::Post;

    /// Auth scheme the endpoint expects
    const AUTH: AuthMode = AuthMode::Bearer;

    /// Shape of the `data` slot in a successful response
    type Data: DeserializeOwned + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(HttpMethod::from_str("PATCH").unwrap(), HttpMethod::Patch);
    }

    #[test]
    fn test_auth_mode_display() {
        assert_eq!(AuthMode::Basic.to_string(), "basic");
        assert_eq!(AuthMode::Bearer.to_string(), "bearer");
    }
}
