//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use elevenlabs_rust::Client;
use mockito::{Mock, Server, ServerGuard};

pub const TEST_API_KEY: &str = "test-api-key";

/// Test fixture that owns a mock server and a client pointed at it
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub client: Client,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let client = Client::builder()
            .api_key(TEST_API_KEY)
            .base_url(server.url())
            .build()
            .expect("client should build");
        Self { server, client }
    }

    /// JSON response for `method path`, requiring the API key header
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", TEST_API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Raw bytes response, e.g. audio
    pub async fn mock_bytes(
        &mut self,
        method: &str,
        path: &str,
        content_type: &str,
        body: &[u8],
    ) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", TEST_API_KEY)
            .with_status(200)
            .with_header("content-type", content_type)
            .with_body(body)
            .create_async()
            .await
    }

    /// Error response with an arbitrary body
    pub async fn mock_error(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}
