//! Tests for report rendering.

use chrono::{Local, TimeZone};

use ccl_model::{CleanReport, InvalidNameEntry};
use ccl_report::render_clean_report;

fn fixed_time() -> chrono::DateTime<Local> {
    Local.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

#[test]
fn report_lists_counts_and_invalid_names() {
    let report = CleanReport {
        total_rows: 2,
        kept_rows: 2,
        invalid_names: vec![InvalidNameEntry {
            original_name: "A.B.".to_string(),
            email: "a@x.com".to_string(),
        }],
    };

    let text = render_clean_report("contacts.csv", &report, fixed_time());

    assert!(text.starts_with("Report for contacts.csv\n"));
    assert!(text.contains("Generated on: 2025-01-15 09:30:00"));
    assert!(text.contains("- Total rows processed: 2"));
    assert!(text.contains("- Valid emails: 2"));
    assert!(text.contains("- Invalid names found: 1"));
    assert!(text.contains("Original Name: A.B."));
    assert!(text.contains("Email: a@x.com"));
    // Each entry is visually delimited.
    assert!(text.matches('\n').count() >= 10);
    assert!(text.contains("--------------------------------------------------\n"));
}

#[test]
fn clean_run_omits_the_invalid_names_section() {
    let report = CleanReport {
        total_rows: 5,
        kept_rows: 3,
        invalid_names: Vec::new(),
    };

    let text = render_clean_report("contacts.csv", &report, fixed_time());

    assert!(text.contains("- Invalid names found: 0"));
    assert!(!text.contains("Invalid Names Found:"));
}
