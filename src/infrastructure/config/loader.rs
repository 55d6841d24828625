//! Configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::Config;

/// Configuration error types.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A base URL section is empty.
    #[error("{0} base_url cannot be empty")]
    EmptyBaseUrl(&'static str),

    /// The poll interval is out of range.
    #[error("Invalid poll_interval_secs: {0}. Must be at least 1")]
    InvalidPollInterval(u64),

    /// The HTTP timeout is out of range.
    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    /// maxAge must be positive; SSL Labs rejects 0.
    #[error("Invalid max_age_hours: {0}. Must be at least 1")]
    InvalidMaxAge(u32),

    /// Unknown log level string.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown log format string.
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Credential fields are set but the email is missing.
    #[error("Incomplete credentials: email is required when any credential field is set")]
    IncompleteCredentials,

    /// The result field name is empty.
    #[error("output.result_field cannot be empty")]
    EmptyResultField,
}

/// Configuration loader with hierarchical merging.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .sslprobe/config.yaml (project config)
    /// 3. .sslprobe/local.yaml (project local overrides, optional)
    /// 4. Environment variables (SSLPROBE_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".sslprobe/config.yaml"))
            .merge(Yaml::file(".sslprobe/local.yaml"))
            .merge(Env::prefixed("SSLPROBE_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.quick_check.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl("quick_check"));
        }
        if config.ssllabs.base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl("ssllabs"));
        }

        if config.ssllabs.poll_interval_secs == 0 {
            return Err(ConfigError::InvalidPollInterval(
                config.ssllabs.poll_interval_secs,
            ));
        }

        if config.ssllabs.max_age_hours == 0 {
            return Err(ConfigError::InvalidMaxAge(config.ssllabs.max_age_hours));
        }

        if config.http.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.http.timeout_secs));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let creds = &config.credentials;
        let any_name_set = creds.organization.is_some()
            || creds.first_name.is_some()
            || creds.last_name.is_some();
        if any_name_set && creds.email.is_none() {
            return Err(ConfigError::IncompleteCredentials);
        }

        if config.output.result_field.is_empty() {
            return Err(ConfigError::EmptyResultField);
        }

        Ok(())
    }
}
