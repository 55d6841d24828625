//! SSL Labs v4 HTTP client.
//!
//! Wraps the three operations this crate uses: `analyze` (assessment
//! fetch, polled by the inspection service), `getEndpointData`, and
//! `register`. All calls except `register` authenticate by sending the
//! registered email address in an `email` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::errors::{SslProbeError, SslProbeResult};
use crate::domain::models::SslLabsCredentials;
use crate::domain::ports::ScanApi;

use super::models::{AnalyzeReport, EndpointReport, RegisterOutcome, RegisterRequest};

/// Base URL for the SSL Labs API.
pub const SSLLABS_BASE: &str = "https://api.ssllabs.com";

/// HTTP client for the SSL Labs v4 API.
#[derive(Debug, Clone)]
pub struct SslLabsClient {
    /// The underlying HTTP client.
    http: Client,
    /// Base URL, overridable for tests.
    base_url: String,
    /// Registered account credentials.
    credentials: SslLabsCredentials,
}

impl SslLabsClient {
    /// Create a client against the public API with the given timeout.
    pub fn new(credentials: SslLabsCredentials, timeout: Duration) -> SslProbeResult<Self> {
        Self::with_base_url(SSLLABS_BASE.to_string(), credentials, timeout)
    }

    /// Create a client against a specific base URL.
    pub fn with_base_url(
        base_url: String,
        credentials: SslLabsCredentials,
        timeout: Duration,
    ) -> SslProbeResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    /// Issue an authenticated GET and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        what: &str,
    ) -> SslProbeResult<T> {
        tracing::debug!(%url, "SSL Labs request");

        let resp = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .header("email", &self.credentials.email)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SslProbeError::Api { status, body });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| SslProbeError::Decode(format!("SSL Labs {what} response: {e}")))
    }
}

#[async_trait]
impl ScanApi for SslLabsClient {
    async fn analyze(&self, host: &str, max_age_hours: u32) -> SslProbeResult<AnalyzeReport> {
        let url = format!(
            "{}/api/v4/analyze?host={}&maxAge={}",
            self.base_url, host, max_age_hours
        );
        self.get_json(&url, "analyze").await
    }

    async fn endpoint_data(&self, host: &str, ip: &str) -> SslProbeResult<EndpointReport> {
        let url = format!(
            "{}/api/v4/getEndpointData?host={}&s={}",
            self.base_url, host, ip
        );
        self.get_json(&url, "getEndpointData").await
    }

    async fn register(
        &self,
        credentials: &SslLabsCredentials,
    ) -> SslProbeResult<RegisterOutcome> {
        let url = format!("{}/api/v4/register", self.base_url);
        let body = RegisterRequest {
            first_name: credentials.first_name.clone(),
            last_name: credentials.last_name.clone(),
            email: credentials.email.clone(),
            organization: credentials.organization.clone(),
        };

        tracing::debug!(%url, email = %credentials.email, "SSL Labs register request");

        let resp = self
            .http
            .post(&url)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SslProbeError::Api { status, body });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| SslProbeError::Decode(format!("SSL Labs register response: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> SslLabsCredentials {
        SslLabsCredentials {
            organization: "Acme".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            email: "jo@example.com".to_string(),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = SslLabsClient::new(test_credentials(), Duration::from_secs(10)).unwrap();
        assert_eq!(client.base_url, SSLLABS_BASE);
        assert_eq!(client.credentials.email, "jo@example.com");
    }

    #[test]
    fn test_custom_base_url() {
        let client = SslLabsClient::with_base_url(
            "http://localhost:9".to_string(),
            test_credentials(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert_eq!(client.base_url, "http://localhost:9");
    }
}
