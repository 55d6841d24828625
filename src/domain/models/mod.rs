//! Domain models.

pub mod config;
pub mod pipeline;
pub mod scan;

pub use config::{
    Config, CredentialsConfig, HttpConfig, LoggingConfig, OutputConfig, QuickCheckConfig,
    SslLabsConfig, SslLabsCredentials,
};
pub use pipeline::PipelineItem;
pub use scan::ScanStatus;
