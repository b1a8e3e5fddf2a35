use std::path::PathBuf;

use ccl_model::CleanReport;

#[derive(Debug)]
pub struct CleanRunResult {
    pub files: Vec<FileSummary>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub input: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug)]
pub enum FileStatus {
    Cleaned {
        cleaned_path: PathBuf,
        report_path: PathBuf,
        report: CleanReport,
    },
    Failed {
        message: String,
    },
}
