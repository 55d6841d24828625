//! CLI command implementations.

pub mod check;
pub mod endpoint;
pub mod register;
pub mod scan;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::adapters::ssl_checker::SslCheckerClient;
use crate::adapters::ssllabs::SslLabsClient;
use crate::domain::models::Config;
use crate::domain::ports::ScanApi;
use crate::infrastructure::config::ConfigLoader;
use crate::services::InspectionService;

/// Load configuration, honoring an explicit `--config` path.
pub(crate) fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build the inspection service from configuration.
///
/// The scan side is only wired up when credentials (an email) are
/// configured; quick checks work without them.
pub(crate) fn build_service(
    config: &Config,
    poll_interval_override: Option<u64>,
    max_age_override: Option<u32>,
) -> Result<InspectionService> {
    let timeout = Duration::from_secs(config.http.timeout_secs);

    let quick_check = SslCheckerClient::with_base_url(config.quick_check.base_url.clone(), timeout)
        .context("Failed to build ssl-checker.io client")?;

    let scan: Option<Arc<dyn ScanApi>> = match config.credentials.to_credentials() {
        Some(credentials) => Some(Arc::new(
            SslLabsClient::with_base_url(config.ssllabs.base_url.clone(), credentials, timeout)
                .context("Failed to build SSL Labs client")?,
        )),
        None => None,
    };

    let poll_interval = Duration::from_secs(
        poll_interval_override.unwrap_or(config.ssllabs.poll_interval_secs),
    );
    let max_age_hours = max_age_override.unwrap_or(config.ssllabs.max_age_hours);

    Ok(InspectionService::new(
        Arc::new(quick_check),
        scan,
        poll_interval,
        max_age_hours,
    ))
}

/// Resolve the result field name: flag wins over config.
pub(crate) fn result_field(config: &Config, flag: Option<String>) -> String {
    flag.unwrap_or_else(|| config.output.result_field.clone())
}
