//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use papo_api::{create_app_state, serve};
use papo_common::AppConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
///
/// Dropping the server triggers graceful shutdown, which also stops the
/// inactivity sweeper.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    shutdown: Option<oneshot::Sender<()>>,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on the memory store
    pub async fn start() -> Result<Self> {
        Self::start_with_config(test_config()).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Bind to an ephemeral port
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        // Create app state
        let state = create_app_state(config).await?;

        // Spawn server task
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            let shutdown = async {
                rx.await.ok();
            };
            serve(listener, state, shutdown).await.ok();
        });

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            shutdown: Some(tx),
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn with_user(request: RequestBuilder, user: Option<&str>) -> RequestBuilder {
        match user {
            Some(user) => request.header("user", user),
            None => request,
        }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        self.get_as(None, path).await
    }

    /// Make a GET request, optionally with the `user` header
    pub async fn get_as(&self, user: Option<&str>, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(Self::with_user(self.client.get(&url), user).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        self.post_as(None, path, body).await
    }

    /// Make a POST request with JSON body, optionally with the `user` header
    pub async fn post_as<T: Serialize>(
        &self,
        user: Option<&str>,
        path: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(Self::with_user(self.client.post(&url), user)
            .json(body)
            .send()
            .await?)
    }

    /// Send a heartbeat
    pub async fn heartbeat(&self, user: Option<&str>) -> Result<Response> {
        let url = format!("{}/status", self.base_url());
        Ok(Self::with_user(self.client.post(&url), user).send().await?)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

/// Create a test configuration backed by the memory store
pub fn test_config() -> AppConfig {
    AppConfig::in_memory()
}

/// Test configuration with a fast inactivity sweep
pub fn fast_sweep_config() -> AppConfig {
    let mut config = AppConfig::in_memory();
    config.presence.sweep_interval_secs = 1;
    config.presence.inactive_limit_secs = 1;
    config
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }

    Ok(response.json().await?)
}

/// Assert response status only
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }

    Ok(())
}

/// Assert an error response and return its `error.code`
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: serde_json::Value = assert_json(response, expected_status).await?;
    body["error"]["code"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow::anyhow!("Missing error code in body: {body}"))
}
