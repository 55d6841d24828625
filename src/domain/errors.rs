//! Domain errors for the sslprobe inspection pipeline.

use thiserror::Error;

/// Errors that can occur while inspecting a certificate.
#[derive(Debug, Error)]
pub enum SslProbeError {
    /// A network-level failure talking to an inspection service.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("API returned {status}: {body}")]
    Api {
        /// The HTTP status code of the response.
        status: reqwest::StatusCode,
        /// The raw response body, captured for diagnostics.
        body: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// An SSL Labs operation was requested without configured credentials.
    #[error("SSL Labs credentials are not configured (email is required)")]
    MissingCredentials,

    /// The scan reached the ERROR terminal status.
    #[error("Scan failed: {0}")]
    ScanFailed(String),

    /// Invalid or incomplete configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used throughout the library.
pub type SslProbeResult<T> = Result<T, SslProbeError>;

impl From<serde_json::Error> for SslProbeError {
    fn from(err: serde_json::Error) -> Self {
        SslProbeError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_status_and_body() {
        let err = SslProbeError::Api {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "slow down".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("429"));
        assert!(msg.contains("slow down"));
    }

    #[test]
    fn test_serde_error_maps_to_decode() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: SslProbeError = parse_err.into();
        assert!(matches!(err, SslProbeError::Decode(_)));
    }
}
