//! reqwest-backed batch executor
//!
//! Issues GETs with basic auth and JSON accept headers, bounded by
//! `buffer_unordered` so at most `max_concurrency` requests are in flight.
//! No retries and no rate limiting live here: a request gets exactly one
//! attempt and its outcome is recorded as-is.

use super::types::RawResponse;
use super::BatchExecutor;
use crate::credentials::BASIC_AUTH_PASSWORD;
use crate::request::PageRequest;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use reqwest::header;
use reqwest::Client;
use std::time::Duration;

/// Configuration for the HTTP executor
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum number of requests in flight at once
    pub max_concurrency: usize,
    /// Per-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_concurrency: 20,
            timeout: Duration::from_secs(30),
            user_agent: format!("pagehaul/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ExecutorConfig {
    /// Create a config with the given concurrency cap
    pub fn new(max_concurrency: usize) -> Self {
        Self {
            max_concurrency,
            ..Default::default()
        }
    }

    /// Set the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Batch executor backed by a shared `reqwest::Client`
pub struct HttpExecutor {
    client: Client,
    config: ExecutorConfig,
}

impl HttpExecutor {
    /// Create an executor with the given concurrency cap and default
    /// timeout/user agent
    pub fn new(max_concurrency: usize) -> Self {
        Self::with_config(ExecutorConfig::new(max_concurrency))
    }

    /// Create an executor with custom configuration
    pub fn with_config(config: ExecutorConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// Send one request and record its terminal state.
    ///
    /// Never returns an error: every transport outcome maps onto a
    /// [`RawResponse`] so one bad page cannot poison the batch.
    async fn dispatch(&self, request: PageRequest) -> RawResponse {
        let page = request.page;
        let sent = self
            .client
            .get(request.url)
            .query(&request.query)
            .basic_auth(&request.api_key, Some(BASIC_AUTH_PASSWORD))
            .header(header::ACCEPT, "application/json")
            .send()
            .await;

        match sent {
            Ok(response) => {
                let status = response.status().as_u16();
                match response.text().await {
                    Ok(body) => RawResponse::http(page, status, body),
                    Err(e) if e.is_timeout() => RawResponse::timed_out(page),
                    Err(e) => RawResponse::no_response(page, e.to_string()),
                }
            }
            Err(e) if e.is_timeout() => RawResponse::timed_out(page),
            Err(e) => RawResponse::no_response(page, e.to_string()),
        }
    }
}

#[async_trait]
impl BatchExecutor for HttpExecutor {
    async fn run(&self, batch: Vec<PageRequest>) -> Vec<RawResponse> {
        stream::iter(batch.into_iter().map(|request| self.dispatch(request)))
            .buffer_unordered(self.config.max_concurrency)
            .collect::<Vec<_>>()
            .await
    }
}

impl std::fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
