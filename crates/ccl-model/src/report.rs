/// A name the normalizer could not confidently clean, paired with the
/// row's email so the operator can review it. Exists only in the text
/// report for one file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct InvalidNameEntry {
    pub original_name: String,
    pub email: String,
}

/// Counts and findings from cleaning one table.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CleanReport {
    /// Rows in the input table before filtering.
    pub total_rows: usize,
    /// Rows whose email validated as deliverable.
    pub kept_rows: usize,
    /// Names recorded as low-confidence normalizations.
    pub invalid_names: Vec<InvalidNameEntry>,
}

impl CleanReport {
    pub fn dropped_rows(&self) -> usize {
        self.total_rows.saturating_sub(self.kept_rows)
    }
}
