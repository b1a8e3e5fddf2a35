//! Output files land next to their input, named
//! `<basename>_<tag>_<YYYYMMDD_HHMMSS>.<ext>`.

use std::path::{Path, PathBuf};

use chrono::Local;

/// Timestamp shared by every output of one file's run.
pub fn run_timestamp() -> String {
    Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Derive an output path in the input's directory with an explicit
/// timestamp, so a cleaned CSV and its report share one.
pub fn timestamped_sibling(input: &Path, tag: &str, ext: &str, timestamp: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("output");
    let file_name = format!("{stem}_{tag}_{timestamp}.{ext}");
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sibling_keeps_directory_and_appends_tag() {
        let path = timestamped_sibling(
            Path::new("/data/contacts.csv"),
            "cleaned",
            "csv",
            "20250101_120000",
        );
        assert_eq!(
            path,
            PathBuf::from("/data/contacts_cleaned_20250101_120000.csv")
        );
    }

    #[test]
    fn sibling_handles_bare_file_names() {
        let path = timestamped_sibling(Path::new("contacts.csv"), "report", "txt", "ts");
        assert_eq!(path, PathBuf::from("contacts_report_ts.txt"));
    }

    #[test]
    fn run_timestamp_has_expected_shape() {
        let stamp = run_timestamp();
        assert_eq!(stamp.len(), 15);
        assert_eq!(stamp.as_bytes()[8], b'_');
    }
}
