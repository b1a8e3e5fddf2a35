//! The cleaning pipeline for one contact table.
//!
//! Stages, in order: rewrite the name column, validate every email
//! sequentially, then keep only the rows that validated. Row-level
//! failures degrade to dropping the row; only a missing column aborts
//! the table.

use anyhow::Result;
use tracing::{debug, info, warn};

use ccl_model::{CleanReport, InvalidNameEntry, Table, ValidationOutcome};

use crate::name;
use crate::validator::EmailChecker;

/// Name column the cleaner rewrites.
pub const FIRST_NAME_COLUMN: &str = "First Name";

/// Email column the cleaner validates.
pub const EMAIL_COLUMN: &str = "Email";

/// Progress callbacks for one table. All methods default to no-ops so
/// the pipeline stays console-free; the CLI plugs in a progress bar.
pub trait CleanObserver {
    fn row_validated(
        &mut self,
        _index: usize,
        _total: usize,
        _email: &str,
        _outcome: ValidationOutcome,
    ) {
    }
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl CleanObserver for NoopObserver {}

/// Clean one table in place and report what happened.
///
/// Fails fast with `MissingColumn` when the table lacks "First Name"
/// or "Email". Every low-confidence name becomes an
/// [`InvalidNameEntry`]; every email whose outcome is not
/// `Deliverable` drops its row, in place, preserving order.
pub fn clean_table(
    table: &mut Table,
    checker: &dyn EmailChecker,
    observer: &mut dyn CleanObserver,
) -> Result<CleanReport> {
    let name_column = table.require_column(FIRST_NAME_COLUMN)?;
    let email_column = table.require_column(EMAIL_COLUMN)?;
    let total_rows = table.row_count();

    // Stage 1: rewrite names, collecting the low-confidence ones.
    let mut invalid_names = Vec::new();
    for row in &mut table.rows {
        let raw = row.get(name_column).map(String::as_str).unwrap_or("");
        let normalized = name::normalize(raw);
        if !normalized.confident {
            let email = row.get(email_column).map(String::as_str).unwrap_or("");
            invalid_names.push(InvalidNameEntry {
                original_name: raw.to_string(),
                email: email.to_string(),
            });
        }
        if let Some(cell) = row.get_mut(name_column) {
            *cell = normalized.cleaned;
        }
    }
    debug!(
        total_rows,
        invalid_names = invalid_names.len(),
        "names cleaned"
    );

    // Stage 2: validate emails one at a time, in table order. The
    // checker resolves each request (including retries) before the
    // next row starts.
    let mut keep = Vec::with_capacity(total_rows);
    for (index, row) in table.rows.iter().enumerate() {
        let email = row.get(email_column).map(String::as_str).unwrap_or("");
        let outcome = match checker.check(email) {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(row = index, %error, "email check failed, dropping row");
                ValidationOutcome::RequestFailed
            }
        };
        observer.row_validated(index, total_rows, email, outcome);
        keep.push(outcome.keeps_row());
    }

    // Stage 3: filter by outcome, original order preserved.
    table.retain_rows(|index, _| keep.get(index).copied().unwrap_or(false));
    let kept_rows = table.row_count();
    info!(total_rows, kept_rows, "table cleaned");

    Ok(CleanReport {
        total_rows,
        kept_rows,
        invalid_names,
    })
}
