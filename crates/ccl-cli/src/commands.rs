use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use ccl_cli::logging::redact_value;
use ccl_cli::pipeline::{self, DedupedFile};
use ccl_core::{AbstractApiValidator, CleanObserver};
use ccl_model::{CclError, ValidationOutcome};

use crate::cli::{CleanArgs, DedupeArgs};
use crate::prompt;
use crate::types::{CleanRunResult, FileStatus, FileSummary};

/// Fixed master export name looked up in the downloads directory when
/// `--master` is not given.
pub const MASTER_EXPORT_FILE: &str = "Export (inclusive of people emailed) - People.csv";

/// Console progress for one file's validation pass.
struct ProgressObserver {
    bar: Option<ProgressBar>,
}

impl ProgressObserver {
    fn new() -> Self {
        Self { bar: None }
    }

    fn bar_for(&mut self, total: usize) -> &ProgressBar {
        self.bar.get_or_insert_with(|| {
            let style = ProgressStyle::with_template("{pos}/{len} [{bar:30}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar());
            ProgressBar::new(total as u64).with_style(style)
        })
    }
}

impl CleanObserver for ProgressObserver {
    fn row_validated(
        &mut self,
        index: usize,
        total: usize,
        email: &str,
        outcome: ValidationOutcome,
    ) {
        let bar = self.bar_for(total);
        bar.set_position((index + 1) as u64);
        bar.set_message(format!("{} {}", redact_value(email), outcome.label()));
        if index + 1 == total {
            bar.finish_with_message("validation complete");
        }
    }
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanRunResult> {
    dotenv::dotenv().ok();
    // Fail before touching any file when the credential is absent.
    let api_key = args
        .api_key
        .clone()
        .or_else(|| std::env::var("ABSTRACT_API_KEY").ok())
        .filter(|key| !key.trim().is_empty())
        .ok_or(CclError::MissingCredential)?;

    let files = resolve_clean_inputs(args)?;
    let validator = AbstractApiValidator::new(api_key);

    let mut summaries = Vec::with_capacity(files.len());
    for (index, path) in files.iter().enumerate() {
        info!(
            file = %path.display(),
            index = index + 1,
            total = files.len(),
            "processing file"
        );
        let mut observer = ProgressObserver::new();
        let status = match pipeline::clean_file(path, &validator, &mut observer) {
            Ok(cleaned) => FileStatus::Cleaned {
                cleaned_path: cleaned.cleaned_path,
                report_path: cleaned.report_path,
                report: cleaned.report,
            },
            Err(error) => {
                error!(file = %path.display(), error = %format!("{error:#}"), "file failed");
                FileStatus::Failed {
                    message: format!("{error:#}"),
                }
            }
        };
        summaries.push(FileSummary {
            input: path.clone(),
            status,
        });
    }

    let has_errors = summaries
        .iter()
        .any(|summary| matches!(summary.status, FileStatus::Failed { .. }));
    Ok(CleanRunResult {
        files: summaries,
        has_errors,
    })
}

fn resolve_clean_inputs(args: &CleanArgs) -> Result<Vec<PathBuf>> {
    if !args.files.is_empty() {
        return Ok(args.files.clone());
    }
    let directory = prompt::downloads_dir(args.downloads_dir.clone());
    println!("CSV files are resolved against {}", directory.display());
    let count = prompt::prompt_file_count()?;
    let mut files = Vec::with_capacity(count);
    for index in 0..count {
        let label = format!("CSV file #{}", index + 1);
        files.push(prompt::prompt_existing_csv(&directory, &label)?);
    }
    Ok(files)
}

pub fn run_dedupe(args: &DedupeArgs) -> Result<DedupedFile> {
    let directory = prompt::downloads_dir(args.downloads_dir.clone());
    let master = args
        .master
        .clone()
        .unwrap_or_else(|| directory.join(MASTER_EXPORT_FILE));
    if !master.exists() {
        return Err(CclError::FileNotFound { path: master }.into());
    }
    let input = match args.input.clone() {
        Some(path) => path,
        None => prompt::prompt_existing_csv(&directory, "CSV file to dedupe")?,
    };
    pipeline::dedupe_file(&master, &input)
}
