/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for kryptono-adapter tests

use kryptono_adapter::{ClientConfig, Credentials, KryptonoClient};
use wiremock::MockServer;

/// Secret used by every reference signature in these tests
pub const TEST_SECRET: &str = "4a894c5c-8a7e-4337-bb6b-9fde16e3dddd";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Throwaway API key
pub fn test_api_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn test_credentials(api_key: &str) -> Credentials {
    Credentials::new(api_key, TEST_SECRET)
}

/// Client with every host pointed at the mock server
#[allow(dead_code)]
pub fn mock_client(
    server: &MockServer,
    config: ClientConfig,
    credentials: Option<Credentials>,
) -> KryptonoClient {
    KryptonoClient::with_config_and_base_url(config, &server.uri(), credentials)
        .expect("client init")
}
