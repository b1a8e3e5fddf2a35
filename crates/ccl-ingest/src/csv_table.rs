use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use ccl_model::{CclError, Table};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim_matches('\u{feff}').to_string()
}

/// Read a delimited file with a header row into a [`Table`].
///
/// The first non-empty record is taken as the header; headers are
/// trimmed and BOM-stripped. Data rows are padded or truncated to the
/// header width so every row is rectangular. Fully empty records are
/// skipped.
pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(CclError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;

    let mut table: Option<Table> = None;
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match table.as_mut() {
            None => {
                let headers: Vec<String> = record.iter().map(normalize_header).collect();
                table = Some(Table::new(headers));
            }
            Some(table) => {
                let width = table.headers.len();
                let mut row = Vec::with_capacity(width);
                for idx in 0..width {
                    let value = record.get(idx).unwrap_or("");
                    row.push(normalize_cell(value));
                }
                table.push_row(row);
            }
        }
    }

    let table = table.unwrap_or_default();
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "csv loaded"
    );
    Ok(table)
}

/// Write a [`Table`] as CSV with a header row. The parent directory
/// must already exist; the original input file is never touched.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;
    writer
        .write_record(&table.headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in &table.rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    debug!(path = %path.display(), rows = table.row_count(), "csv written");
    Ok(())
}
