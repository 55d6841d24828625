//! sslprobe - certificate inspection client.
//!
//! sslprobe talks to two external certificate-inspection services and
//! feeds their results into pipeline items:
//!
//! - **ssl-checker.io** for quick, unauthenticated certificate checks
//! - **Qualys SSL Labs v4** for full scans (polled to completion at a
//!   fixed interval), per-endpoint analysis, and account registration
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors, and port traits
//! - **Adapters** (`adapters`): one HTTP client per external service
//! - **Service Layer** (`services`): the inspection service and its
//!   scan poll loop
//! - **Infrastructure Layer** (`infrastructure`): configuration
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use sslprobe::{InspectionService, PipelineItem};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Build clients from config, then:
//!     // service.full_scan(&mut item, "example.com", "ssl").await?;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::ssl_checker::{QuickCheckReport, SslCheckerClient};
pub use adapters::ssllabs::{AnalyzeReport, EndpointReport, RegisterOutcome, SslLabsClient};
pub use domain::errors::{SslProbeError, SslProbeResult};
pub use domain::models::{Config, PipelineItem, ScanStatus, SslLabsCredentials};
pub use domain::ports::{QuickCheckApi, ScanApi};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{InspectionOp, InspectionService};
