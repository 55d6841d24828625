//! Port traits for the certificate-inspection services.
//!
//! The inspection service talks to the outside world only through
//! these traits, so tests can drive it with mock implementations.

use async_trait::async_trait;

use crate::adapters::ssl_checker::models::QuickCheckReport;
use crate::adapters::ssllabs::models::{AnalyzeReport, EndpointReport, RegisterOutcome};
use crate::domain::errors::SslProbeResult;
use crate::domain::models::SslLabsCredentials;

/// Quick certificate check against a single host.
#[async_trait]
pub trait QuickCheckApi: Send + Sync {
    /// Run a quick check for `host` and return the report.
    async fn check(&self, host: &str) -> SslProbeResult<QuickCheckReport>;
}

/// Multi-phase scan API (SSL Labs v4).
#[async_trait]
pub trait ScanApi: Send + Sync {
    /// Fetch the current assessment for `host`, accepting cached
    /// results up to `max_age_hours` old. Starts a new assessment if
    /// none is fresh enough.
    async fn analyze(&self, host: &str, max_age_hours: u32) -> SslProbeResult<AnalyzeReport>;

    /// Fetch detailed data for one endpoint (`ip`) of `host`.
    async fn endpoint_data(&self, host: &str, ip: &str) -> SslProbeResult<EndpointReport>;

    /// Register an account. Also serves as the credential test.
    async fn register(
        &self,
        credentials: &SslLabsCredentials,
    ) -> SslProbeResult<RegisterOutcome>;
}
