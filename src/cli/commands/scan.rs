//! `sslprobe scan` — full SSL Labs scan, polled to completion.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::adapters::ssllabs::models::AnalyzeReport;
use crate::cli::output::{create_spinner, endpoint_table, output, CommandOutput};
use crate::cli::types::ScanArgs;
use crate::domain::errors::SslProbeError;
use crate::domain::models::{PipelineItem, ScanStatus};

use super::{build_service, load_config, result_field};

/// Output of the scan command.
#[derive(Debug, serde::Serialize)]
pub struct ScanOutput {
    /// The scanned target.
    pub target: String,
    /// The field the report was written into.
    pub field: String,
    /// The annotated pipeline item.
    pub item: PipelineItem,
}

impl CommandOutput for ScanOutput {
    fn to_human(&self) -> String {
        let Some(value) = self.item.field(&self.field) else {
            return format!("No result for {}", self.target);
        };
        let Ok(report) = serde_json::from_value::<AnalyzeReport>(value.clone()) else {
            return serde_json::to_string_pretty(value).unwrap_or_default();
        };

        let mut lines = vec![format!("Scan of {} ({})", self.target, report.status)];
        if let Some(message) = &report.status_message {
            lines.push(format!("  Status:  {message}"));
        }
        if let Some(test_time) = report.test_time.and_then(format_epoch_ms) {
            lines.push(format!("  Tested:  {test_time}"));
        }
        if let Some(engine) = &report.engine_version {
            lines.push(format!("  Engine:  {engine}"));
        }
        lines.push(String::new());
        lines.push(endpoint_table(&report.endpoints));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        self.item.json.clone()
    }
}

/// Render an epoch-millisecond timestamp as UTC.
fn format_epoch_ms(ms: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

/// Execute the scan command.
pub async fn execute(args: ScanArgs, json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let service = build_service(&config, args.poll_interval, args.max_age)?;
    let field = result_field(&config, args.field);

    // The spinner draws on stderr; JSON mode stays clean either way.
    let spinner = if json {
        None
    } else {
        Some(create_spinner(format!("Scanning {}...", args.target)))
    };

    let mut item = PipelineItem::new();
    let result = service.full_scan(&mut item, &args.target, &field).await;

    if let Some(spinner) = spinner {
        match &result {
            Ok(report) if report.status == ScanStatus::Error => {
                spinner.finish_with_message(format!("Scan of {} reported ERROR", args.target));
            }
            Ok(_) => spinner.finish_with_message(format!("Scan of {} finished", args.target)),
            Err(_) => spinner.finish_with_message(format!("Scan of {} failed", args.target)),
        }
    }
    let report = result.with_context(|| format!("Full scan of {} failed", args.target))?;

    // The item carries the terminal report either way; a failed
    // assessment still exits non-zero after the output is printed.
    output(
        &ScanOutput {
            target: args.target.clone(),
            field,
            item,
        },
        json,
    );

    if report.status == ScanStatus::Error {
        let message = report
            .status_message
            .unwrap_or_else(|| "assessment reported ERROR".to_string());
        return Err(SslProbeError::ScanFailed(message).into());
    }
    Ok(())
}
