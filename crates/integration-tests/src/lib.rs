//! Integration test harness for the Product CRUD API.
//!
//! Each test starts its own server on an ephemeral port with a fresh store,
//! so tests never see each other's records and can run in parallel.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p product-crud-integration-tests
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use product_crud_integration_tests::TestServer;
//!
//! # async fn example() {
//! let server = TestServer::start().await;
//! let resp = server.get("/health").await;
//! assert_eq!(resp.status(), 200);
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;

use product_crud_api::config::ApiConfig;
use product_crud_api::state::AppState;
use reqwest::{Client, Response};
use serde_json::Value;

/// A running API server bound to `127.0.0.1` on a random port.
pub struct TestServer {
    addr: SocketAddr,
    client: Client,
}

impl TestServer {
    /// Start a server with the default configuration (sample data seeded).
    pub async fn start() -> Self {
        Self::start_with(ApiConfig::default()).await
    }

    /// Start a server with a custom configuration.
    ///
    /// `host` and `port` from the config are ignored.
    pub async fn start_with(config: ApiConfig) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local address");

        let app = product_crud_api::app(AppState::new(config));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            addr,
            client: Client::new(),
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// The underlying HTTP client, for requests the helpers don't cover.
    #[must_use]
    pub const fn client(&self) -> &Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    pub async fn post(&self, path: &str, body: &Value) -> Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("POST request failed")
    }

    pub async fn put(&self, path: &str, body: &Value) -> Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("PUT request failed")
    }

    pub async fn delete(&self, path: &str) -> Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("DELETE request failed")
    }

    /// POST a payload that must succeed, returning the created record.
    pub async fn create(&self, path: &str, body: &Value) -> Value {
        let resp = self.post(path, body).await;
        assert_eq!(resp.status(), 200, "create at {path} failed");
        json_body(resp).await
    }
}

/// Read a response body as JSON.
pub async fn json_body(resp: Response) -> Value {
    resp.json().await.expect("Response body is not JSON")
}
