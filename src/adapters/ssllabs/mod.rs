//! SSL Labs v4 scan adapter.

pub mod client;
pub mod models;

pub use client::SslLabsClient;
pub use models::{AnalyzeReport, EndpointReport, EndpointSummary, RegisterOutcome};
