//! ssl-checker.io HTTP client.
//!
//! Wraps the unauthenticated quick-check endpoint
//! `GET /api/v1/check/{host}`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{SslProbeError, SslProbeResult};
use crate::domain::ports::QuickCheckApi;

use super::models::QuickCheckReport;

/// Base URL for the public ssl-checker.io API.
pub const SSL_CHECKER_BASE: &str = "https://ssl-checker.io";

/// HTTP client for the ssl-checker.io quick-check API.
#[derive(Debug, Clone)]
pub struct SslCheckerClient {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL, overridable for tests.
    base_url: String,
}

impl SslCheckerClient {
    /// Create a client against the public API with the given timeout.
    pub fn new(timeout: Duration) -> SslProbeResult<Self> {
        Self::with_base_url(SSL_CHECKER_BASE.to_string(), timeout)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(base_url: String, timeout: Duration) -> SslProbeResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }
}

#[async_trait]
impl QuickCheckApi for SslCheckerClient {
    async fn check(&self, host: &str) -> SslProbeResult<QuickCheckReport> {
        let url = format!("{}/api/v1/check/{}", self.base_url, host);
        tracing::debug!(%url, "quick check request");

        let resp = self
            .http
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SslProbeError::Api { status, body });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            SslProbeError::Decode(format!("quick check response for {host}: {e}"))
        })
    }
}
