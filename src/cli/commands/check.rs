//! `sslprobe check` — quick certificate check via ssl-checker.io.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::adapters::ssl_checker::models::QuickCheckReport;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::CheckArgs;
use crate::domain::models::PipelineItem;

use super::{build_service, load_config, result_field};

/// Output of the check command.
#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    /// The checked target.
    pub target: String,
    /// The field the report was written into.
    pub field: String,
    /// The annotated pipeline item.
    pub item: PipelineItem,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let Some(value) = self.item.field(&self.field) else {
            return format!("No result for {}", self.target);
        };
        let Ok(report) = serde_json::from_value::<QuickCheckReport>(value.clone()) else {
            return serde_json::to_string_pretty(value).unwrap_or_default();
        };

        let mut lines = vec![format!("Certificate for {}", self.target)];
        if let Some(result) = &report.result {
            if let Some(issued_to) = &result.issued_to {
                lines.push(format!("  Issued to:   {issued_to}"));
            }
            match (&result.issuer_o, &result.issuer_cn) {
                (Some(org), Some(cn)) => lines.push(format!("  Issuer:      {org} ({cn})")),
                (Some(org), None) => lines.push(format!("  Issuer:      {org}")),
                (None, Some(cn)) => lines.push(format!("  Issuer:      {cn}")),
                (None, None) => {}
            }
            match result.cert_valid {
                Some(true) => {
                    let days = result
                        .days_left
                        .map_or_else(String::new, |d| format!(" ({d} days left)"));
                    lines.push(format!("  Valid:       yes{days}"));
                }
                Some(false) => lines.push("  Valid:       NO".to_string()),
                None => {}
            }
            if let (Some(from), Some(till)) = (&result.valid_from, &result.valid_till) {
                lines.push(format!("  Window:      {from} to {till}"));
            }
            if let Some(sans) = &result.cert_sans {
                lines.push(format!("  SANs:        {sans}"));
            }
            if let Some(hsts) = result.hsts_header_enabled {
                lines.push(format!(
                    "  HSTS:        {}",
                    if hsts { "enabled" } else { "disabled" }
                ));
            }
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        self.item.json.clone()
    }
}

/// Execute the check command.
pub async fn execute(args: CheckArgs, json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let service = build_service(&config, None, None)?;
    let field = result_field(&config, args.field);

    let mut item = PipelineItem::new();
    service
        .quick_check(&mut item, &args.target, &field)
        .await
        .with_context(|| format!("Quick check for {} failed", args.target))?;

    output(
        &CheckOutput {
            target: args.target,
            field,
            item,
        },
        json,
    );
    Ok(())
}
