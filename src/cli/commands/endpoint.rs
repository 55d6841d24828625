//! `sslprobe endpoint` — endpoint analysis retrieval via SSL Labs.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::adapters::ssllabs::models::EndpointReport;
use crate::cli::output::{output, CommandOutput};
use crate::cli::types::EndpointArgs;
use crate::domain::models::PipelineItem;

use super::{build_service, load_config, result_field};

/// Output of the endpoint command.
#[derive(Debug, serde::Serialize)]
pub struct EndpointOutput {
    /// The scanned target.
    pub target: String,
    /// The queried endpoint IP.
    pub endpoint_ip: String,
    /// The flat field key the report was written into.
    pub field: String,
    /// The annotated pipeline item.
    pub item: PipelineItem,
}

impl CommandOutput for EndpointOutput {
    fn to_human(&self) -> String {
        let Some(value) = self.item.field(&self.field) else {
            return format!("No result for {} ({})", self.target, self.endpoint_ip);
        };
        let Ok(report) = serde_json::from_value::<EndpointReport>(value.clone()) else {
            return serde_json::to_string_pretty(value).unwrap_or_default();
        };

        let mut lines = vec![format!(
            "Endpoint {} of {}",
            self.endpoint_ip, self.target
        )];
        if let Some(grade) = &report.grade {
            lines.push(format!("  Grade:    {grade}"));
        }
        if let Some(ignored) = &report.grade_trust_ignored {
            lines.push(format!("  Grade (trust ignored): {ignored}"));
        }
        if let Some(warnings) = report.has_warnings {
            lines.push(format!(
                "  Warnings: {}",
                if warnings { "yes" } else { "no" }
            ));
        }
        if let Some(progress) = report.progress {
            lines.push(format!("  Progress: {progress}%"));
        }
        if let Some(message) = &report.status_message {
            lines.push(format!("  Status:   {message}"));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        self.item.json.clone()
    }
}

/// Execute the endpoint command.
pub async fn execute(args: EndpointArgs, json: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path.as_deref())?;
    let service = build_service(&config, None, None)?;
    let base_field = result_field(&config, args.field);

    let mut item = PipelineItem::new();
    service
        .endpoint_analysis(&mut item, &args.target, &args.endpoint_ip, &base_field)
        .await
        .with_context(|| {
            format!(
                "Endpoint analysis for {} ({}) failed",
                args.target, args.endpoint_ip
            )
        })?;

    output(
        &EndpointOutput {
            target: args.target,
            endpoint_ip: args.endpoint_ip,
            field: format!("{base_field}.analyze"),
            item,
        },
        json,
    );
    Ok(())
}
