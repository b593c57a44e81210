use metamap::{Client, ClientConfig, Credentials};
use std::time::Duration;

use super::MockServer;

pub const TEST_CLIENT_ID: &str = "test-client";
pub const TEST_CLIENT_SECRET: &str = "test-secret";
pub const TEST_ACCESS_TOKEN: &str = "test-access-token";

/// Setup test environment variables and tracing
pub fn setup_test_env() {
    // Load test environment variables if exists, otherwise use defaults
    dotenvy::from_path(".env.test").ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Mock upstream plus a client pointed at it
pub struct TestContext {
    pub server: MockServer,
    pub client: Client,
}

impl TestContext {
    /// Client already holding a bearer token
    pub async fn new() -> Self {
        Self::build(Some(TEST_ACCESS_TOKEN), None).await
    }

    /// Client without a bearer token
    pub async fn unauthenticated() -> Self {
        Self::build(None, None).await
    }

    pub async fn with_timeout(timeout: Duration) -> Self {
        Self::build(Some(TEST_ACCESS_TOKEN), Some(timeout)).await
    }

    async fn build(token: Option<&str>, timeout: Option<Duration>) -> Self {
        setup_test_env();

        let server = MockServer::start().await;

        let mut config = ClientConfig::new(
            &server.base_url,
            Credentials::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET),
        )
        .expect("Failed to build client config");

        if let Some(token) = token {
            config = config.with_access_token(token);
        }
        if let Some(timeout) = timeout {
            config = config.with_timeout(timeout);
        }

        let client = Client::new(config).expect("Failed to build client");

        Self { server, client }
    }
}

/// Expected `Authorization` header for the test credentials
pub fn expected_basic_header() -> String {
    // base64("test-client:test-secret")
    "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=".to_string()
}

pub fn expected_bearer_header() -> String {
    format!("Bearer {TEST_ACCESS_TOKEN}")
}
