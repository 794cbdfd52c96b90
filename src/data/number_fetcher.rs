//! Bounded-time client for the remote number service.
//!
//! Every failure mode collapses to an empty list at the `fetch` boundary. The
//! typed error only exists so it can be logged before it is discarded.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ServerConfig;
use crate::domain::Category;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),
    #[error("no response within {0:?}")]
    Timeout(Duration),
    #[error("server answered with HTTP {0}")]
    HttpStatus(u16),
    #[error("malformed response body: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Expected body: `{ "numbers": [..] }`. A missing or null field reads as empty.
#[derive(Debug, Deserialize)]
struct NumbersResponse {
    #[serde(default)]
    numbers: Option<Vec<i64>>,
}

/// Source of numbers for a category. Implementations never fail outward.
#[async_trait]
pub trait FetchNumbers: Send + Sync {
    async fn fetch(&self, category: Category, deadline: Duration) -> Vec<i64>;
}

pub struct HttpNumberFetcher {
    client: reqwest::Client,
    config: ServerConfig,
}

impl HttpNumberFetcher {
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("failed to build HTTP client for the number service")?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// One attempt, cut off at `deadline`. Dropping the request future on
    /// expiry aborts it and returns the connection.
    pub async fn try_fetch(
        &self,
        category: Category,
        deadline: Duration,
    ) -> Result<Vec<i64>, FetchError> {
        let url = self.config.url_for(category.segment());

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_fetch_details {
            log::info!("GET {} (deadline {:?})", url, deadline);
        }

        match tokio::time::timeout(deadline, self.request(&url)).await {
            Ok(result) => result,
            Err(_elapsed) => Err(FetchError::Timeout(deadline)),
        }
    }

    async fn request(&self, url: &str) -> Result<Vec<i64>, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(FetchError::Network)?;
        let parsed: NumbersResponse =
            serde_json::from_slice(&body).map_err(FetchError::MalformedResponse)?;

        Ok(parsed.numbers.unwrap_or_default())
    }
}

#[async_trait]
impl FetchNumbers for HttpNumberFetcher {
    async fn fetch(&self, category: Category, deadline: Duration) -> Vec<i64> {
        let started = Instant::now();
        match self.try_fetch(category, deadline).await {
            Ok(numbers) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_fetch_details {
                    log::info!(
                        "[{}] received {} numbers in {}ms",
                        category.segment(),
                        numbers.len(),
                        started.elapsed().as_millis()
                    );
                }
                numbers
            }
            Err(e) => {
                log::warn!(
                    "⚠️  Fetch for {} failed after {}ms: {}",
                    category.segment(),
                    started.elapsed().as_millis(),
                    e
                );
                Vec::new()
            }
        }
    }
}
