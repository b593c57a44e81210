//! Client configuration

use std::{env, fmt, time::Duration};

use url::Url;

use crate::auth::Credentials;
use crate::error::{ClientError, ClientResult};

/// Production API host
pub const DEFAULT_BASE_URL: &str = "https://api.getmati.com/";

/// Per-request deadline covering connect, send and body read
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings used to build a [`Client`](crate::Client)
#[derive(Clone)]
pub struct ClientConfig {
    /// API root; endpoint paths are joined onto it
    pub base_url: Url,
    /// Client id and secret used for the token exchange
    pub credentials: Credentials,
    /// Pre-provisioned bearer token, if any
    pub access_token: Option<String>,
    /// Deadline for a single call. There is no retry.
    pub timeout: Duration,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration with default timeout and user agent
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if `base_url` does not parse and
    /// `ClientError::Config` if it cannot act as a base (e.g. `mailto:`).
    pub fn new(base_url: &str, credentials: Credentials) -> ClientResult<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            credentials,
            access_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("metamap-rs/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Loads the configuration from `METAMAP_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Config` if `METAMAP_CLIENT_ID` or
    /// `METAMAP_CLIENT_SECRET` is not set, and the errors of [`Self::new`] for
    /// a bad `METAMAP_BASE_URL`.
    pub fn from_env() -> ClientResult<Self> {
        let base_url =
            env::var("METAMAP_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let credentials = Credentials::new(
            required_var("METAMAP_CLIENT_ID")?,
            required_var("METAMAP_CLIENT_SECRET")?,
        );

        let mut config = Self::new(&base_url, credentials)?;

        if let Some(token) = env::var("METAMAP_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty())
        {
            config = config.with_access_token(token);
        }

        // Unparsable values fall back to the default
        if let Some(secs) = env::var("METAMAP_TIMEOUT_SECS")
            .ok()
            .and_then(|val| val.trim().parse::<u64>().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .field("has_access_token", &self.access_token.is_some())
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn required_var(name: &str) -> ClientResult<String> {
    env::var(name)
        .map_err(|_| ClientError::Config(format!("{name} environment variable is not set")))
}

/// Parses the base URL and makes sure it ends with `/`, otherwise
/// `Url::join` would drop its last path segment.
fn normalize_base_url(raw: &str) -> ClientResult<Url> {
    let mut url = Url::parse(raw.trim())?;

    if url.cannot_be_a_base() {
        return Err(ClientError::Config(format!(
            "Base URL cannot carry endpoint paths: {raw}"
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "METAMAP_BASE_URL",
            "METAMAP_CLIENT_ID",
            "METAMAP_CLIENT_SECRET",
            "METAMAP_ACCESS_TOKEN",
            "METAMAP_TIMEOUT_SECS",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("https://example.com/api", Credentials::new("a", "b"))
            .unwrap();
        assert_eq!(config.base_url.as_str(), "https://example.com/api/");
        assert_eq!(
            config.base_url.join("govchecks/v1/ar/dni").unwrap().as_str(),
            "https://example.com/api/govchecks/v1/ar/dni"
        );
    }

    #[test]
    fn test_invalid_base_urls() {
        assert!(matches!(
            ClientConfig::new("not a url", Credentials::new("a", "b")),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            ClientConfig::new("mailto:ops@example.com", Credentials::new("a", "b")),
            Err(ClientError::Config(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, Credentials::new("a", "b")).unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.access_token.is_none());
        assert!(config.user_agent.starts_with("metamap-rs/"));
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, Credentials::new("a", "b"))
            .unwrap()
            .with_access_token("very-secret-token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret-token"));
        assert!(debug.contains("has_access_token: true"));
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var("METAMAP_CLIENT_ID", "client");
        env::set_var("METAMAP_CLIENT_SECRET", "secret");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.credentials, Credentials::new("client", "secret"));
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.access_token.is_none());

        env::set_var("METAMAP_BASE_URL", "http://localhost:9000");
        env::set_var("METAMAP_ACCESS_TOKEN", "token");
        env::set_var("METAMAP_TIMEOUT_SECS", "5");

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(config.access_token.as_deref(), Some("token"));
        assert_eq!(config.timeout, Duration::from_secs(5));

        // Invalid timeout falls back to the default
        env::set_var("METAMAP_TIMEOUT_SECS", "soon");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_credentials() {
        clear_env();
        env::set_var("METAMAP_CLIENT_ID", "client");

        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: METAMAP_CLIENT_SECRET environment variable is not set"
        );

        clear_env();
    }
}
