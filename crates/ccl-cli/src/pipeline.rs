//! Per-file operations behind the CLI commands.
//!
//! Each function loads its inputs, runs one core pipeline, and writes
//! the outputs next to the input file. Failures here are file-level:
//! the caller records them and moves on to the next file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{info, info_span};

use ccl_core::{CleanObserver, EmailChecker, INPUT_KEY_COLUMN, MASTER_KEY_COLUMN};
use ccl_ingest::{read_table, write_table};
use ccl_model::CleanReport;
use ccl_report::{render_clean_report, run_timestamp, timestamped_sibling};

/// Outputs of cleaning one file.
#[derive(Debug)]
pub struct CleanedFile {
    pub input: PathBuf,
    pub cleaned_path: PathBuf,
    pub report_path: PathBuf,
    pub report: CleanReport,
}

/// Clean one contact CSV: normalize names, validate emails, write the
/// cleaned CSV and the text report into the input's directory.
pub fn clean_file(
    path: &Path,
    checker: &dyn EmailChecker,
    observer: &mut dyn CleanObserver,
) -> Result<CleanedFile> {
    let span = info_span!("clean_file", file = %path.display());
    let _guard = span.enter();

    let mut table = read_table(path)?;
    let report = ccl_core::clean_table(&mut table, checker, observer)?;

    let timestamp = run_timestamp();
    let cleaned_path = timestamped_sibling(path, "cleaned", "csv", &timestamp);
    let report_path = timestamped_sibling(path, "report", "txt", &timestamp);

    write_table(&cleaned_path, &table)?;
    let input_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("input");
    let report_text = render_clean_report(input_name, &report, Local::now());
    fs::write(&report_path, report_text)
        .with_context(|| format!("write report: {}", report_path.display()))?;

    info!(
        total_rows = report.total_rows,
        kept_rows = report.kept_rows,
        invalid_names = report.invalid_names.len(),
        cleaned = %cleaned_path.display(),
        report = %report_path.display(),
        "file cleaned"
    );
    Ok(CleanedFile {
        input: path.to_path_buf(),
        cleaned_path,
        report_path,
        report,
    })
}

/// Outputs of deduplicating one file against the master list.
#[derive(Debug)]
pub struct DedupedFile {
    pub input: PathBuf,
    pub unique_path: PathBuf,
    pub input_rows: usize,
    pub unique_rows: usize,
}

impl DedupedFile {
    pub fn duplicate_rows(&self) -> usize {
        self.input_rows.saturating_sub(self.unique_rows)
    }
}

/// Drop input rows whose LinkedIn profile already appears in the
/// master export, writing the survivors next to the input.
pub fn dedupe_file(master: &Path, input: &Path) -> Result<DedupedFile> {
    let span = info_span!(
        "dedupe_file",
        master = %master.display(),
        input = %input.display()
    );
    let _guard = span.enter();

    let master_table = read_table(master)?;
    let input_table = read_table(input)?;
    let unique = ccl_core::dedupe(
        &master_table,
        MASTER_KEY_COLUMN,
        &input_table,
        INPUT_KEY_COLUMN,
    )?;

    let timestamp = run_timestamp();
    let unique_path = timestamped_sibling(input, "unique", "csv", &timestamp);
    write_table(&unique_path, &unique)?;

    info!(
        input_rows = input_table.row_count(),
        unique_rows = unique.row_count(),
        output = %unique_path.display(),
        "file deduplicated"
    );
    Ok(DedupedFile {
        input: input.to_path_buf(),
        unique_path,
        input_rows: input_table.row_count(),
        unique_rows: unique.row_count(),
    })
}
