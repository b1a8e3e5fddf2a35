//! Human-readable text report for one cleaned file.

use chrono::{DateTime, Local};

use ccl_model::CleanReport;

const RULE: &str = "--------------------------------------------------";

/// Render the operator report: a header naming the input file, the
/// summary counts, and one delimited block per low-confidence name.
pub fn render_clean_report(
    input_name: &str,
    report: &CleanReport,
    generated_at: DateTime<Local>,
) -> String {
    let mut text = String::new();
    text.push_str(&format!("Report for {input_name}\n"));
    text.push_str(&format!(
        "Generated on: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));

    text.push_str("Summary:\n");
    text.push_str(&format!("- Total rows processed: {}\n", report.total_rows));
    text.push_str(&format!("- Valid emails: {}\n", report.kept_rows));
    text.push_str(&format!(
        "- Invalid names found: {}\n\n",
        report.invalid_names.len()
    ));

    if !report.invalid_names.is_empty() {
        text.push_str("Invalid Names Found:\n");
        text.push_str(RULE);
        text.push('\n');
        for entry in &report.invalid_names {
            text.push_str(&format!("Original Name: {}\n", entry.original_name));
            text.push_str(&format!("Email: {}\n", entry.email));
            text.push_str(RULE);
            text.push('\n');
        }
    }
    text
}
