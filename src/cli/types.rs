//! CLI type definitions.
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI definition.
#[derive(Parser)]
#[command(name = "sslprobe")]
#[command(about = "sslprobe - certificate inspection via ssl-checker.io and SSL Labs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// The selected subcommand.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from a specific file instead of .sslprobe/
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Quick check a certificate (ssl-checker.io)
    Check(CheckArgs),

    /// Full scan a certificate (SSL Labs), polling until the scan finishes
    Scan(ScanArgs),

    /// Retrieve endpoint analysis for a scanned host (SSL Labs)
    Endpoint(EndpointArgs),

    /// Register an SSL Labs account / test the configured credentials
    Register(RegisterArgs),
}

/// Arguments for `sslprobe check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// The target domain
    pub target: String,

    /// Pipeline field to put the result in (default: output.result_field)
    #[arg(short, long)]
    pub field: Option<String>,
}

/// Arguments for `sslprobe scan`.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// The target domain
    pub target: String,

    /// Pipeline field to put the result in (default: output.result_field)
    #[arg(short, long)]
    pub field: Option<String>,

    /// Accept cached assessments up to this many hours old
    #[arg(long, value_name = "HOURS")]
    pub max_age: Option<u32>,

    /// Seconds to sleep between polls
    #[arg(long, value_name = "SECS")]
    pub poll_interval: Option<u64>,
}

/// Arguments for `sslprobe endpoint`.
#[derive(Args, Debug)]
pub struct EndpointArgs {
    /// The target domain
    pub target: String,

    /// The endpoint IP address
    pub endpoint_ip: String,

    /// Pipeline field prefix to put the result in (default: output.result_field)
    #[arg(short, long)]
    pub field: Option<String>,
}

/// Arguments for `sslprobe register`.
///
/// Flags fall back to the `credentials` config section.
#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Organization name
    #[arg(long)]
    pub organization: Option<String>,

    /// First name
    #[arg(long)]
    pub first_name: Option<String>,

    /// Last name
    #[arg(long)]
    pub last_name: Option<String>,

    /// Email address the account is keyed on
    #[arg(long)]
    pub email: Option<String>,
}
