//! Configuration models for sslprobe.

use serde::{Deserialize, Serialize};

/// Main configuration structure for sslprobe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Quick-check service configuration (ssl-checker.io).
    #[serde(default)]
    pub quick_check: QuickCheckConfig,

    /// SSL Labs scan service configuration.
    #[serde(default)]
    pub ssllabs: SslLabsConfig,

    /// SSL Labs account credentials.
    #[serde(default)]
    pub credentials: CredentialsConfig,

    /// HTTP client configuration.
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result output configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Quick-check (ssl-checker.io) configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QuickCheckConfig {
    /// Base URL of the quick-check API.
    #[serde(default = "default_quick_check_base_url")]
    pub base_url: String,
}

fn default_quick_check_base_url() -> String {
    "https://ssl-checker.io".to_string()
}

impl Default for QuickCheckConfig {
    fn default() -> Self {
        Self {
            base_url: default_quick_check_base_url(),
        }
    }
}

/// SSL Labs scan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SslLabsConfig {
    /// Base URL of the SSL Labs API.
    #[serde(default = "default_ssllabs_base_url")]
    pub base_url: String,

    /// Accept cached assessments up to this many hours old.
    #[serde(default = "default_max_age_hours")]
    pub max_age_hours: u32,

    /// Fixed interval between scan polls, in seconds.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_ssllabs_base_url() -> String {
    "https://api.ssllabs.com".to_string()
}

const fn default_max_age_hours() -> u32 {
    24
}

const fn default_poll_interval_secs() -> u64 {
    10
}

impl Default for SslLabsConfig {
    fn default() -> Self {
        Self {
            base_url: default_ssllabs_base_url(),
            max_age_hours: default_max_age_hours(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

/// SSL Labs account credentials.
///
/// All SSL Labs v4 calls except `register` authenticate with the
/// registered email address; `register` itself needs the full set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialsConfig {
    /// Organization name used at registration.
    #[serde(default)]
    pub organization: Option<String>,

    /// First name used at registration.
    #[serde(default)]
    pub first_name: Option<String>,

    /// Last name used at registration.
    #[serde(default)]
    pub last_name: Option<String>,

    /// Registered email address; required for any SSL Labs operation.
    #[serde(default)]
    pub email: Option<String>,
}

impl CredentialsConfig {
    /// Materialize credentials, if an email is configured.
    ///
    /// The name and organization fields default to empty strings; they
    /// only matter for registration.
    pub fn to_credentials(&self) -> Option<SslLabsCredentials> {
        let email = self.email.clone()?;
        Some(SslLabsCredentials {
            organization: self.organization.clone().unwrap_or_default(),
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
            email,
        })
    }
}

/// Resolved SSL Labs credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslLabsCredentials {
    /// Organization name.
    pub organization: String,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Registered email address.
    pub email: String,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HttpConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty.
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// Result output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Name of the pipeline item field results are written into.
    #[serde(default = "default_result_field")]
    pub result_field: String,
}

fn default_result_field() -> String {
    "ssl".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            result_field: default_result_field(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.quick_check.base_url, "https://ssl-checker.io");
        assert_eq!(config.ssllabs.base_url, "https://api.ssllabs.com");
        assert_eq!(config.ssllabs.max_age_hours, 24);
        assert_eq!(config.ssllabs.poll_interval_secs, 10);
        assert_eq!(config.output.result_field, "ssl");
        assert_eq!(config.logging.level, "info");
        assert!(config.credentials.email.is_none());
    }

    #[test]
    fn test_credentials_require_email() {
        let creds = CredentialsConfig {
            organization: Some("Acme".to_string()),
            ..Default::default()
        };
        assert!(creds.to_credentials().is_none());
    }

    #[test]
    fn test_credentials_with_email_only() {
        let creds = CredentialsConfig {
            email: Some("ops@example.com".to_string()),
            ..Default::default()
        };
        let resolved = creds.to_credentials().unwrap();
        assert_eq!(resolved.email, "ops@example.com");
        assert_eq!(resolved.organization, "");
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "ssllabs:\n  poll_interval_secs: 3\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.ssllabs.poll_interval_secs, 3);
        assert_eq!(config.ssllabs.max_age_hours, 24);
        assert_eq!(config.quick_check.base_url, "https://ssl-checker.io");
    }
}
