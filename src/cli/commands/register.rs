//! `sslprobe register` — SSL Labs account registration / credential test.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::adapters::ssllabs::SslLabsClient;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::RegisterArgs;
use crate::domain::models::SslLabsCredentials;
use crate::domain::ports::ScanApi;

use super::load_config;

/// Output of the register command.
#[derive(Debug, serde::Serialize)]
pub struct RegisterOutput {
    /// The registered email address.
    pub email: String,
    /// Confirmation message from the service.
    pub message: String,
}

impl CommandOutput for RegisterOutput {
    fn to_human(&self) -> String {
        format!("{} ({})", self.message, self.email)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Merge flag values over the configured credentials, requiring the
/// full set (the register endpoint rejects partial submissions).
fn resolve_credentials(
    args: &RegisterArgs,
    configured: &crate::domain::models::CredentialsConfig,
) -> Result<SslLabsCredentials> {
    let organization = args
        .organization
        .clone()
        .or_else(|| configured.organization.clone());
    let first_name = args
        .first_name
        .clone()
        .or_else(|| configured.first_name.clone());
    let last_name = args.last_name.clone().or_else(|| configured.last_name.clone());
    let email = args.email.clone().or_else(|| configured.email.clone());

    let mut missing = Vec::new();
    if organization.is_none() {
        missing.push("organization");
    }
    if first_name.is_none() {
        missing.push("first_name");
    }
    if last_name.is_none() {
        missing.push("last_name");
    }
    if email.is_none() {
        missing.push("email");
    }
    if !missing.is_empty() {
        bail!(
            "Registration needs the full credential set; missing: {}",
            missing.join(", ")
        );
    }

    Ok(SslLabsCredentials {
        organization: organization.unwrap_or_default(),
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        email: email.unwrap_or_default(),
    })
}

/// Execute the register command.
pub async fn execute(args: RegisterArgs, json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let credentials = resolve_credentials(&args, &config.credentials)?;

    let client = SslLabsClient::with_base_url(
        config.ssllabs.base_url.clone(),
        credentials.clone(),
        Duration::from_secs(config.http.timeout_secs),
    )
    .context("Failed to build SSL Labs client")?;

    let outcome = client
        .register(&credentials)
        .await
        .context("SSL Labs registration failed")?;

    output(
        &RegisterOutput {
            email: credentials.email,
            message: outcome
                .message
                .unwrap_or_else(|| "Registration accepted".to_string()),
        },
        json,
    );
    Ok(())
}
