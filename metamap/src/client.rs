use govcheck_types::{AuthMode, GovCheckRequest, GovCheckResponse, HttpMethod};
use reqwest::{header::CONTENT_TYPE, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

use crate::auth::{self, AccessToken, Credentials, TOKEN_PATH};
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// MetaMap API client.
///
/// Holds the connection pool, credentials and current bearer token. The auth
/// scheme is chosen per call, so one instance can be shared across tasks
/// behind an `Arc` without coordinating callers.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    access_token: RwLock<Option<String>>,
}

impl Client {
    /// Builds a client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if the HTTP client cannot be created
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {e}")))?;

        info!(
            base_url = %config.base_url,
            timeout_ms = config.timeout.as_millis(),
            "Initialized MetaMap client"
        );

        Ok(Self {
            http,
            base_url: config.base_url,
            credentials: config.credentials,
            access_token: RwLock::new(config.access_token),
        })
    }

    /// Builds a client from `METAMAP_*` environment variables
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`] and [`Client::new`]
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// API root the endpoint paths are joined onto
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Replaces the bearer token used by check endpoints
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.access_token.write().await = Some(token.into());
    }

    /// Whether a bearer token is known
    pub async fn has_access_token(&self) -> bool {
        self.access_token.read().await.is_some()
    }

    /// Exchanges the client credentials for a bearer token and keeps it for
    /// subsequent check calls.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the exchange fails; the previous token,
    /// if any, is kept in that case.
    #[instrument(skip_all)]
    pub async fn authenticate(&self) -> ClientResult<AccessToken> {
        let url = self.endpoint_url(TOKEN_PATH)?;

        let builder = self
            .http
            .post(url)
            .form(&[("grant_type", "client_credentials")]);
        let builder = self.authorize(builder, AuthMode::Basic).await?;

        let token: AccessToken = Self::read_json(Self::execute(builder).await?).await?;
        self.set_access_token(token.access_token.clone()).await;

        info!(expires_in = ?token.expires_in, "Obtained MetaMap access token");

        Ok(token)
    }

    /// Sends a typed check request using the method, path and auth scheme its
    /// type declares.
    ///
    /// A business failure reported inside a 2xx answer is returned as
    /// `Ok`; inspect [`GovCheckResponse::error`] before trusting `data`.
    ///
    /// # Errors
    ///
    /// See [`Client::dispatch`]
    #[instrument(skip_all, fields(path = R::PATH))]
    pub async fn send<R: GovCheckRequest>(
        &self,
        request: &R,
    ) -> ClientResult<GovCheckResponse<R::Data>> {
        self.dispatch(R::METHOD, R::PATH, R::AUTH, request).await
    }

    /// Issues one JSON request and decodes the JSON answer into `T`.
    ///
    /// Every call performs exactly one HTTP round trip: nothing is cached,
    /// deduplicated or retried.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `path` - Path relative to the base URL
    /// * `auth` - Auth scheme for this call only
    /// * `body` - Value serialized as the JSON request body
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingAccessToken` before any I/O for a bearer
    /// call without a token, `ClientError::Status` for a non-2xx answer,
    /// `ClientError::Decode` for a body that is not the expected JSON, and
    /// `ClientError::Timeout` / `ClientError::Network` for transport failures.
    #[instrument(skip(self, body))]
    pub async fn dispatch<B, T>(
        &self,
        method: HttpMethod,
        path: &str,
        auth: AuthMode,
        body: &B,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(path)?;
        let payload = serde_json::to_vec(body).map_err(ClientError::Encode)?;

        debug!("Sending {method} request to: {url}");

        let builder = self
            .http
            .request(to_reqwest_method(method), url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload);
        let builder = self.authorize(builder, auth).await?;

        Self::read_json(Self::execute(builder).await?).await
    }

    fn endpoint_url(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn authorize(
        &self,
        builder: RequestBuilder,
        mode: AuthMode,
    ) -> ClientResult<RequestBuilder> {
        let token = self.access_token.read().await;
        auth::authorize(builder, mode, &self.credentials, token.as_deref())
    }

    async fn execute(builder: RequestBuilder) -> ClientResult<Response> {
        builder.send().await.map_err(|e| {
            error!("Request failed: {e}");
            e.into()
        })
    }

    /// Turns a non-2xx answer into `ClientError::Status`, otherwise decodes
    /// the full body.
    async fn read_json<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            warn!(%status, "MetaMap returned an error status");
            return Err(ClientError::Status { status, body });
        }

        debug!(%status, "Received MetaMap response");

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Failed to decode MetaMap response: {e}");
            ClientError::Decode(e)
        })
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}
