//! ssl-checker.io quick-check adapter.

pub mod client;
pub mod models;

pub use client::SslCheckerClient;
pub use models::{CertificateSummary, QuickCheckReport};
