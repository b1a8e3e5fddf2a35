#![deny(unsafe_code)]

use crate::error::{CclError, Result};

/// An ordered, rectangular view of one delimited source file.
///
/// The column set is whatever the source file declares; pipelines that
/// need a specific column look it up by name and fail fast when it is
/// absent. Row identity is positional: rows are filtered but never
/// merged or split.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Index of the column with the given header, matched exactly after
    /// trimming both sides.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim() == wanted)
    }

    /// Like [`Table::column_index`] but fails with `MissingColumn`.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name).ok_or_else(|| CclError::MissingColumn {
            column: name.to_string(),
        })
    }

    /// Cell value at the given row and column, empty when out of range.
    pub fn value(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep only the rows for which the predicate returns true,
    /// preserving their relative order.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(usize, &[String]) -> bool,
    {
        let mut index = 0usize;
        self.rows.retain(|row| {
            let kept = keep(index, row);
            index += 1;
            kept
        });
    }
}
