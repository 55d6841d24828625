//! Output formatting utilities for the CLI.

use std::time::Duration;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use crate::adapters::ssllabs::models::EndpointSummary;

/// A command result that can render itself for humans or as JSON.
pub trait CommandOutput: Serialize {
    /// Human-readable rendering.
    fn to_human(&self) -> String;
    /// JSON rendering.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the requested mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create a spinner for the scan poll wait, drawn on stderr.
pub fn create_spinner(message: impl Into<String>) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .expect("Invalid spinner template")
            .tick_chars(SPINNER_CHARS),
    );
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Render endpoint summaries as a grade table.
pub fn endpoint_table(endpoints: &[EndpointSummary]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("IP ADDRESS").add_attribute(Attribute::Bold),
        Cell::new("GRADE").add_attribute(Attribute::Bold),
        Cell::new("WARNINGS").add_attribute(Attribute::Bold),
        Cell::new("STATUS").add_attribute(Attribute::Bold),
    ]);

    for endpoint in endpoints {
        let grade = endpoint.grade.as_deref().unwrap_or("-");
        let grade_cell = if console::colors_enabled() {
            Cell::new(grade).fg(grade_color(grade))
        } else {
            Cell::new(grade)
        };
        table.add_row(vec![
            Cell::new(&endpoint.ip_address),
            grade_cell,
            Cell::new(match endpoint.has_warnings {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            }),
            Cell::new(endpoint.status_message.as_deref().unwrap_or("-")),
        ]);
    }

    table.to_string()
}

/// Map an SSL Labs grade to a terminal color.
fn grade_color(grade: &str) -> Color {
    match grade.chars().next() {
        Some('A') => Color::Green,
        Some('B' | 'C') => Color::Yellow,
        Some('D' | 'E' | 'F' | 'T' | 'M') => Color::Red,
        _ => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_table_renders_grades() {
        let endpoints: Vec<EndpointSummary> = serde_json::from_str(
            r#"[
                { "ipAddress": "93.184.216.34", "grade": "A+", "hasWarnings": false },
                { "ipAddress": "10.0.0.1", "statusMessage": "In progress" }
            ]"#,
        )
        .unwrap();
        let rendered = endpoint_table(&endpoints);
        assert!(rendered.contains("93.184.216.34"));
        assert!(rendered.contains("A+"));
        assert!(rendered.contains("In progress"));
    }

    #[test]
    fn test_grade_color_buckets() {
        assert_eq!(grade_color("A+"), Color::Green);
        assert_eq!(grade_color("B"), Color::Yellow);
        assert_eq!(grade_color("F"), Color::Red);
        assert_eq!(grade_color("-"), Color::Grey);
    }
}
