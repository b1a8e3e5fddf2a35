pub mod error;
pub mod outcome;
pub mod report;
pub mod table;

pub use error::{CclError, Result};
pub use outcome::ValidationOutcome;
pub use report::{CleanReport, InvalidNameEntry};
pub use table::Table;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        let mut table = Table::new(vec!["First Name".to_string(), "Email".to_string()]);
        table.push_row(vec!["Maria".to_string(), "m@x.com".to_string()]);
        table.push_row(vec!["A.B.".to_string(), "a@x.com".to_string()]);
        table
    }

    #[test]
    fn column_lookup_trims_both_sides() {
        let table = Table::new(vec![" Email ".to_string()]);
        assert_eq!(table.column_index("Email"), Some(0));
        assert_eq!(table.column_index("Phone"), None);
    }

    #[test]
    fn require_column_reports_missing() {
        let table = sample_table();
        assert!(table.require_column("Email").is_ok());
        let error = table.require_column("LinkedIn URL").unwrap_err();
        assert!(matches!(
            error,
            CclError::MissingColumn { column } if column == "LinkedIn URL"
        ));
    }

    #[test]
    fn value_is_empty_out_of_range() {
        let table = sample_table();
        assert_eq!(table.value(0, 1), "m@x.com");
        assert_eq!(table.value(0, 9), "");
        assert_eq!(table.value(9, 0), "");
    }

    #[test]
    fn retain_rows_preserves_order() {
        let mut table = sample_table();
        table.retain_rows(|index, _| index != 0);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.value(0, 0), "A.B.");
    }

    #[test]
    fn outcome_keeps_only_deliverable() {
        assert!(ValidationOutcome::Deliverable.keeps_row());
        for outcome in [
            ValidationOutcome::NotDeliverable,
            ValidationOutcome::LowQuality,
            ValidationOutcome::MalformedAddress,
            ValidationOutcome::RateLimited,
            ValidationOutcome::QuotaExceeded,
            ValidationOutcome::RequestFailed,
        ] {
            assert!(!outcome.keeps_row());
        }
    }

    #[test]
    fn report_serializes() {
        let report = CleanReport {
            total_rows: 2,
            kept_rows: 1,
            invalid_names: vec![InvalidNameEntry {
                original_name: "A.B.".to_string(),
                email: "a@x.com".to_string(),
            }],
        };
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: CleanReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round.dropped_rows(), 1);
        assert_eq!(round.invalid_names.len(), 1);
    }
}
