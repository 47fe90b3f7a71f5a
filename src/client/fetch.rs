//! Dashboard Fetches
//!
//! One GET per view. Every fetch ends in a [`FetchResult`]: the data, or a
//! [`FetchError`] naming which of the three failure classes occurred.

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use super::endpoint::Endpoint;
use crate::model::{LogRecord, RuleList, Statistics};

/// Why a fetch produced no data
#[derive(Error, Debug)]
pub enum FetchError {
    /// Unreachable host, refused or reset connection, malformed URL, timeout
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body was not the expected JSON shape
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result of a single dashboard fetch
pub type FetchResult<T> = Result<T, FetchError>;

/// HTTP client for the dashboard API
#[derive(Clone)]
pub struct DashboardClient {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl DashboardClient {
    /// Create a client with a per-request timeout
    pub fn new(endpoint: Endpoint, timeout: Duration) -> FetchResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a client around an existing reqwest client
    pub fn with_client(client: reqwest::Client, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }

    /// Endpoint every request is sent to
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// GET /stats
    pub async fn stats(&self) -> FetchResult<Statistics> {
        self.get_json("stats").await
    }

    /// GET /logs
    pub async fn logs(&self) -> FetchResult<Vec<LogRecord>> {
        self.get_json("logs").await
    }

    /// GET /rules, with a missing `rules` field read as no rules
    pub async fn rules(&self) -> FetchResult<Vec<String>> {
        let list: RuleList = self.get_json("rules").await?;
        Ok(list.rules)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.endpoint.url(path);
        tracing::debug!(url = %url, "Fetching");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
