//! Integration tests for the per-file pipeline operations.

use std::fs;

use anyhow::Result;

use ccl_cli::pipeline::{clean_file, dedupe_file};
use ccl_core::{EmailChecker, NoopObserver};
use ccl_model::ValidationOutcome;

/// Marks every address as deliverable.
struct AcceptAll;

impl EmailChecker for AcceptAll {
    fn check(&self, _email: &str) -> Result<ValidationOutcome> {
        Ok(ValidationOutcome::Deliverable)
    }
}

/// Marks every address as undeliverable.
struct RejectAll;

impl EmailChecker for RejectAll {
    fn check(&self, _email: &str) -> Result<ValidationOutcome> {
        Ok(ValidationOutcome::NotDeliverable)
    }
}

#[test]
fn clean_file_writes_cleaned_csv_and_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("contacts.csv");
    fs::write(&input, "First Name,Email\nA.B.,a@x.com\nmaria garcia,m@x.com\n")
        .expect("write fixture");

    let outcome = clean_file(&input, &AcceptAll, &mut NoopObserver).expect("clean file");

    assert_eq!(outcome.report.total_rows, 2);
    assert_eq!(outcome.report.kept_rows, 2);
    assert_eq!(outcome.report.invalid_names.len(), 1);

    // Outputs land next to the input with timestamped names.
    let cleaned_name = outcome
        .cleaned_path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("cleaned name");
    assert!(cleaned_name.starts_with("contacts_cleaned_"));
    assert!(cleaned_name.ends_with(".csv"));
    let report_name = outcome
        .report_path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("report name");
    assert!(report_name.starts_with("contacts_report_"));
    assert!(report_name.ends_with(".txt"));
    assert_eq!(outcome.cleaned_path.parent(), outcome.report_path.parent());

    let cleaned = fs::read_to_string(&outcome.cleaned_path).expect("read cleaned");
    assert!(cleaned.contains("A.B.,a@x.com"));
    assert!(cleaned.contains("Maria,m@x.com"));

    let report = fs::read_to_string(&outcome.report_path).expect("read report");
    assert!(report.contains("Report for contacts.csv"));
    assert!(report.contains("Original Name: A.B."));

    // The input file is never modified.
    let original = fs::read_to_string(&input).expect("read input");
    assert!(original.contains("maria garcia"));
}

#[test]
fn clean_file_can_drop_every_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("contacts.csv");
    fs::write(&input, "First Name,Email\nmaria,m@x.com\n").expect("write fixture");

    let outcome = clean_file(&input, &RejectAll, &mut NoopObserver).expect("clean file");

    assert_eq!(outcome.report.kept_rows, 0);
    let cleaned = fs::read_to_string(&outcome.cleaned_path).expect("read cleaned");
    assert_eq!(cleaned.trim_end(), "First Name,Email");
}

#[test]
fn clean_file_fails_on_missing_column_without_writing_outputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("contacts.csv");
    fs::write(&input, "Email\nm@x.com\n").expect("write fixture");

    clean_file(&input, &AcceptAll, &mut NoopObserver).expect_err("missing column");

    let outputs: Vec<_> = fs::read_dir(dir.path())
        .expect("list dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name() != "contacts.csv")
        .collect();
    assert!(outputs.is_empty());
}

#[test]
fn dedupe_file_writes_unique_rows() {
    let dir = tempfile::tempdir().expect("tempdir");
    let master = dir.path().join("master.csv");
    fs::write(&master, "Name,LinkedIn URL\nold,u1\nolder,u2\n").expect("write master");
    let input = dir.path().join("prospects.csv");
    fs::write(
        &input,
        "Name,LinkedIn Profile\na,u1\nb, u2 \nc,u3\nd,\n",
    )
    .expect("write input");

    let outcome = dedupe_file(&master, &input).expect("dedupe file");

    assert_eq!(outcome.input_rows, 4);
    assert_eq!(outcome.unique_rows, 1);
    assert_eq!(outcome.duplicate_rows(), 3);
    let unique_name = outcome
        .unique_path
        .file_name()
        .and_then(|name| name.to_str())
        .expect("unique name");
    assert!(unique_name.starts_with("prospects_unique_"));
    assert!(unique_name.ends_with(".csv"));

    let unique = fs::read_to_string(&outcome.unique_path).expect("read unique");
    assert!(unique.contains("c,u3"));
    assert!(!unique.contains("a,u1"));
}
