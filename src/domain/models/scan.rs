//! Scan status model for the SSL Labs assessment lifecycle.

use serde::{Deserialize, Serialize};

/// Status of an SSL Labs assessment.
///
/// The API moves an assessment through `DNS` and `IN_PROGRESS` before
/// settling on one of the two terminal states, `READY` or `ERROR`.
/// Unrecognized status strings are preserved in `Other` rather than
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanStatus {
    /// Resolving the target's DNS records.
    Dns,
    /// Endpoints are being assessed.
    InProgress,
    /// The assessment finished successfully.
    Ready,
    /// The assessment failed.
    Error,
    /// A status string this client does not know about.
    #[serde(untagged)]
    Other(String),
}

impl ScanStatus {
    /// True exactly for the two terminal states, `READY` and `ERROR`.
    ///
    /// The poll loop keeps issuing requests until this returns true.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ScanStatus::Ready | ScanStatus::Error)
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::Dns => write!(f, "DNS"),
            ScanStatus::InProgress => write!(f, "IN_PROGRESS"),
            ScanStatus::Ready => write!(f, "READY"),
            ScanStatus::Error => write!(f, "ERROR"),
            ScanStatus::Other(s) => write!(f, "{s}"),
        }
    }
}
