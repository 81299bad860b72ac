//! Record source backed by the leaderboard HTTP endpoint.
//!
//! Performs `GET {server}/user/leaderboard`, checks the status and validates
//! the `{"users": [...]}` body into typed [`UserRecord`]s.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::{
    ErrorContext, LeaderboardError, LeaderboardResult, NetworkError, ResultExt,
};
use crate::models::{decode_records, UserRecord};
use crate::traits::{Headers, HttpClient, RecordSource};

/// Path of the leaderboard endpoint, relative to the server URL.
pub const LEADERBOARD_PATH: &str = "/user/leaderboard";

/// [`RecordSource`] that fetches records over HTTP.
#[derive(Clone)]
pub struct HttpRecordSource {
    client: Arc<dyn HttpClient>,
    server_url: String,
    timeout_secs: u64,
}

impl HttpRecordSource {
    /// Create a source for `server_url` using the given HTTP client.
    pub fn new(client: Arc<dyn HttpClient>, server_url: impl Into<String>) -> Self {
        Self {
            client,
            server_url: server_url.into(),
            timeout_secs: 0,
        }
    }

    /// Record the client's timeout so timeout errors can report it.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Full URL of the leaderboard endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.server_url.trim_end_matches('/'),
            LEADERBOARD_PATH
        )
    }
}

#[async_trait]
impl RecordSource for HttpRecordSource {
    async fn fetch_records(&self) -> LeaderboardResult<Vec<UserRecord>> {
        let url = self.endpoint();
        let ctx = || {
            ErrorContext::new("fetch_records")
                .with_endpoint(url.clone())
                .with_component("http_record_source")
        };

        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::info!("Fetching leaderboard from {}", url);

        let response = self
            .client
            .get(&url, &headers)
            .await
            .map_err(|err| NetworkError::from_http(err, &url, self.timeout_secs))
            .with_context(ctx)?;

        if !response.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!("Leaderboard request failed with HTTP {}", response.status);
            let err: LeaderboardError = NetworkError::HttpStatus {
                status: response.status,
                message,
            }
            .into();
            return Err(err.with_context(ctx()));
        }

        let decoded = decode_records(&response.body).with_context(ctx)?;

        if !decoded.rejected.is_empty() {
            tracing::warn!(
                "Rejected {} leaderboard record(s) at validation",
                decoded.rejected.len()
            );
        }
        tracing::info!("Fetched {} leaderboard records", decoded.records.len());

        Ok(decoded.records)
    }

    fn describe(&self) -> String {
        self.endpoint()
    }
}
