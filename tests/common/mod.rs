//! Common test utilities and helpers
//!
//! Integration tests run the client against a local mockito server.

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use pushcut::{PushcutClient, PushcutConfig};

pub const TEST_API_KEY: &str = "test-api-key";

/// Install a test-friendly tracing subscriber once per test binary
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_test_writer()
        .try_init();
}

/// A mock Pushcut API with a client pointed at it
pub struct TestApi {
    pub server: ServerGuard,
    pub client: PushcutClient,
}

impl TestApi {
    pub fn new() -> Self {
        Self::with_default_notification(None)
    }

    pub fn with_default_notification(name: Option<&str>) -> Self {
        Self::with_config(|mut config| {
            config.default_notification_name = name.map(str::to_string);
            config
        })
    }

    /// Build the client from a config pointed at the mock server, adjusted by `customize`
    pub fn with_config(customize: impl FnOnce(PushcutConfig) -> PushcutConfig) -> Self {
        init_logging();

        let server = Server::new();
        let base_url = format!("{}/v1", server.url());
        let config = customize(PushcutConfig::new(TEST_API_KEY).with_base_url(base_url));

        let client = PushcutClient::from_config(&config).expect("Failed to build test client");
        Self { server, client }
    }

    /// Start a mock that requires the auth and accept headers every request carries
    pub fn mock(&mut self, method: &str, path: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("api-key", TEST_API_KEY)
            .match_header("accept", "application/json")
    }

    /// Mock a POST that must carry exactly `body` as JSON
    pub fn mock_json_post(&mut self, path: &str, body: serde_json::Value) -> Mock {
        self.mock("POST", path).match_body(Matcher::Json(body))
    }
}
