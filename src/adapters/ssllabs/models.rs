//! SSL Labs v4 API response models.
//!
//! These structs map to the `analyze`, `getEndpointData`, and
//! `register` JSON payloads. The assessment documents are large and
//! evolve; unmodeled fields are preserved in the flattened `extra`
//! maps so the pipeline payload is lossless.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::models::ScanStatus;

/// An assessment returned by `GET /api/v4/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeReport {
    /// The assessed host.
    #[serde(default)]
    pub host: String,
    /// Port the assessment targeted.
    #[serde(default)]
    pub port: Option<u16>,
    /// Protocol, e.g. "http".
    #[serde(default)]
    pub protocol: Option<String>,
    /// Assessment lifecycle status.
    pub status: ScanStatus,
    /// Human-readable status detail; set when `status` is ERROR.
    #[serde(default, rename = "statusMessage")]
    pub status_message: Option<String>,
    /// Assessment start time, epoch milliseconds.
    #[serde(default, rename = "startTime")]
    pub start_time: Option<i64>,
    /// Assessment completion time, epoch milliseconds.
    #[serde(default, rename = "testTime")]
    pub test_time: Option<i64>,
    /// Version of the assessment engine.
    #[serde(default, rename = "engineVersion")]
    pub engine_version: Option<String>,
    /// Version of the grading criteria.
    #[serde(default, rename = "criteriaVersion")]
    pub criteria_version: Option<String>,
    /// Per-endpoint summaries; empty until endpoints are discovered.
    #[serde(default)]
    pub endpoints: Vec<EndpointSummary>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One endpoint within an [`AnalyzeReport`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSummary {
    /// The endpoint's IP address.
    #[serde(default, rename = "ipAddress")]
    pub ip_address: String,
    /// Endpoint server name, when known.
    #[serde(default, rename = "serverName")]
    pub server_name: Option<String>,
    /// Endpoint assessment status detail.
    #[serde(default, rename = "statusMessage")]
    pub status_message: Option<String>,
    /// Grade, e.g. "A+"; absent until the endpoint is done.
    #[serde(default)]
    pub grade: Option<String>,
    /// Grade ignoring trust issues.
    #[serde(default, rename = "gradeTrustIgnored")]
    pub grade_trust_ignored: Option<String>,
    /// Whether the endpoint has warnings.
    #[serde(default, rename = "hasWarnings")]
    pub has_warnings: Option<bool>,
    /// Assessment progress, 0-100; -1 while pending.
    #[serde(default)]
    pub progress: Option<i32>,
    /// Assessment duration in milliseconds.
    #[serde(default)]
    pub duration: Option<i64>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Detailed endpoint data from `GET /api/v4/getEndpointData`.
///
/// Shares the summary fields and additionally carries the full
/// `details` document, kept as raw JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointReport {
    /// The endpoint's IP address.
    #[serde(default, rename = "ipAddress")]
    pub ip_address: String,
    /// Endpoint assessment status detail.
    #[serde(default, rename = "statusMessage")]
    pub status_message: Option<String>,
    /// Grade, e.g. "A+".
    #[serde(default)]
    pub grade: Option<String>,
    /// Grade ignoring trust issues.
    #[serde(default, rename = "gradeTrustIgnored")]
    pub grade_trust_ignored: Option<String>,
    /// Whether the endpoint has warnings.
    #[serde(default, rename = "hasWarnings")]
    pub has_warnings: Option<bool>,
    /// Assessment progress, 0-100.
    #[serde(default)]
    pub progress: Option<i32>,
    /// Assessment duration in milliseconds.
    #[serde(default)]
    pub duration: Option<i64>,
    /// The full protocol/cipher/certificate detail document.
    #[serde(default)]
    pub details: Option<Value>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for `POST /api/v4/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// First name.
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Last name.
    #[serde(rename = "lastName")]
    pub last_name: String,
    /// Email address the account is keyed on.
    pub email: String,
    /// Organization name.
    pub organization: String,
}

/// Response from `POST /api/v4/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterOutcome {
    /// Confirmation message from the service.
    #[serde(default)]
    pub message: Option<String>,
    /// Status string, when present.
    #[serde(default)]
    pub status: Option<String>,
    /// Fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_progress_report_deserialization() {
        let json = r#"{
            "host": "example.com",
            "port": 443,
            "protocol": "http",
            "status": "IN_PROGRESS",
            "startTime": 1706600000000,
            "engineVersion": "2.3.0",
            "endpoints": [
                {
                    "ipAddress": "93.184.216.34",
                    "statusMessage": "In progress",
                    "progress": 40
                }
            ]
        }"#;
        let report: AnalyzeReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ScanStatus::InProgress);
        assert!(!report.status.is_terminal());
        assert_eq!(report.endpoints.len(), 1);
        assert_eq!(report.endpoints[0].progress, Some(40));
        assert!(report.endpoints[0].grade.is_none());
    }

    #[test]
    fn test_ready_report_with_grades() {
        let json = r#"{
            "host": "example.com",
            "status": "READY",
            "testTime": 1706600123000,
            "endpoints": [
                { "ipAddress": "93.184.216.34", "grade": "A+", "hasWarnings": false, "progress": 100 },
                { "ipAddress": "2606:2800:220:1:248:1893:25c8:1946", "grade": "A", "hasWarnings": true, "progress": 100 }
            ]
        }"#;
        let report: AnalyzeReport = serde_json::from_str(json).unwrap();
        assert!(report.status.is_terminal());
        assert_eq!(report.endpoints[0].grade.as_deref(), Some("A+"));
        assert_eq!(report.endpoints[1].has_warnings, Some(true));
    }

    #[test]
    fn test_error_report_carries_message() {
        let json = r#"{ "status": "ERROR", "statusMessage": "Unable to resolve domain name" }"#;
        let report: AnalyzeReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.status, ScanStatus::Error);
        assert_eq!(
            report.status_message.as_deref(),
            Some("Unable to resolve domain name")
        );
    }

    #[test]
    fn test_unknown_fields_preserved_through_round_trip() {
        let json = r#"{ "host": "h", "status": "READY", "isPublic": true }"#;
        let report: AnalyzeReport = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&report).unwrap();
        assert_eq!(back.get("isPublic").unwrap(), true);
        assert_eq!(back.get("status").unwrap(), "READY");
    }

    #[test]
    fn test_endpoint_report_keeps_details_raw() {
        let json = r#"{
            "ipAddress": "93.184.216.34",
            "grade": "A",
            "details": { "protocols": [{ "name": "TLS", "version": "1.3" }] }
        }"#;
        let report: EndpointReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.grade.as_deref(), Some("A"));
        let details = report.details.unwrap();
        assert!(details.get("protocols").is_some());
    }

    #[test]
    fn test_register_request_uses_api_field_names() {
        let req = RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            organization: "Analytical Engines".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json.get("firstName").unwrap(), "Ada");
        assert_eq!(json.get("lastName").unwrap(), "Lovelace");
        assert_eq!(json.get("organization").unwrap(), "Analytical Engines");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn test_register_outcome_is_lenient() {
        let outcome: RegisterOutcome = serde_json::from_str("{}").unwrap();
        assert!(outcome.message.is_none());
        let outcome: RegisterOutcome =
            serde_json::from_str(r#"{"message": "Registration successful"}"#).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Registration successful"));
    }
}
