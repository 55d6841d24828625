//! ssl-checker.io API response models.
//!
//! These structs map to the `GET /api/v1/check/{host}` JSON payload.
//! Only the fields the CLI renders are typed; everything else is kept
//! in the flattened `extra` maps so the pipeline payload is lossless.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level quick-check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickCheckReport {
    /// The checked host.
    #[serde(default)]
    pub host: String,
    /// Service-reported status string (e.g., "ok").
    #[serde(default)]
    pub status: Option<String>,
    /// Time the service took to answer, in seconds.
    #[serde(default)]
    pub response_time_sec: Option<String>,
    /// Certificate details.
    #[serde(default)]
    pub result: Option<CertificateSummary>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Certificate details within a quick-check response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificateSummary {
    /// Subject the certificate was issued to.
    #[serde(default)]
    pub issued_to: Option<String>,
    /// IP address the host resolved to.
    #[serde(default)]
    pub resolved_ip: Option<String>,
    /// Issuer country.
    #[serde(default)]
    pub issuer_c: Option<String>,
    /// Issuer organization.
    #[serde(default)]
    pub issuer_o: Option<String>,
    /// Issuer common name.
    #[serde(default)]
    pub issuer_cn: Option<String>,
    /// Certificate serial number.
    #[serde(default)]
    pub cert_sn: Option<String>,
    /// Signature algorithm.
    #[serde(default)]
    pub cert_alg: Option<String>,
    /// Subject alternative names, comma separated.
    #[serde(default)]
    pub cert_sans: Option<String>,
    /// Whether the certificate has expired.
    #[serde(default)]
    pub cert_exp: Option<bool>,
    /// Whether the certificate is currently valid.
    #[serde(default)]
    pub cert_valid: Option<bool>,
    /// Start of the validity window.
    #[serde(default)]
    pub valid_from: Option<String>,
    /// End of the validity window.
    #[serde(default)]
    pub valid_till: Option<String>,
    /// Total validity window length in days.
    #[serde(default)]
    pub validity_days: Option<i64>,
    /// Days left until expiry.
    #[serde(default)]
    pub days_left: Option<i64>,
    /// Whether the host sends an HSTS header.
    #[serde(default)]
    pub hsts_header_enabled: Option<bool>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
