use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
};

use ccl_cli::pipeline::DedupedFile;

use crate::types::{CleanRunResult, FileStatus};

pub fn print_clean_summary(result: &CleanRunResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Rows"),
        header_cell("Kept"),
        header_cell("Invalid names"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for summary in &result.files {
        match &summary.status {
            FileStatus::Cleaned { report, .. } => {
                table.add_row(vec![
                    Cell::new(file_name(&summary.input)),
                    Cell::new(report.total_rows),
                    Cell::new(report.kept_rows),
                    count_cell(report.invalid_names.len()),
                    Cell::new("ok").fg(Color::Green),
                ]);
            }
            FileStatus::Failed { message } => {
                table.add_row(vec![
                    Cell::new(file_name(&summary.input)),
                    dim_cell("-"),
                    dim_cell("-"),
                    dim_cell("-"),
                    Cell::new(message).fg(Color::Red),
                ]);
            }
        }
    }
    println!("{table}");

    for summary in &result.files {
        if let FileStatus::Cleaned {
            cleaned_path,
            report_path,
            ..
        } = &summary.status
        {
            println!("Cleaned: {}", cleaned_path.display());
            println!("Report:  {}", report_path.display());
        }
    }
    if result.has_errors {
        let failed = result
            .files
            .iter()
            .filter(|summary| matches!(summary.status, FileStatus::Failed { .. }))
            .count();
        eprintln!("{failed} file(s) failed; see log output above");
    }
}

pub fn print_dedupe_summary(result: &DedupedFile) {
    println!(
        "Deduplicated {}: {} of {} rows are new ({} duplicate or empty)",
        file_name(&result.input),
        result.unique_rows,
        result.input_rows,
        result.duplicate_rows()
    );
    println!("Unique: {}", result.unique_path.display());
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("unknown")
        .to_string()
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
