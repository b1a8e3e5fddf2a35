//! Set-difference deduplication of one table against a master list.

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::info;

use ccl_model::Table;

/// Key column in the master export.
pub const MASTER_KEY_COLUMN: &str = "LinkedIn URL";

/// Key column in the input export. The two exports come from different
/// schemas, hence the different names.
pub const INPUT_KEY_COLUMN: &str = "LinkedIn Profile";

/// Drop every input row whose trimmed key is empty or already present
/// in the master table's key column.
///
/// Pure apart from the column precondition: order is preserved, no
/// column is added or removed, and the only cell rewrite is that kept
/// key values are written back trimmed.
pub fn dedupe(master: &Table, master_key: &str, input: &Table, input_key: &str) -> Result<Table> {
    let master_column = master.require_column(master_key)?;
    let input_column = input.require_column(input_key)?;

    let master_keys: BTreeSet<&str> = master
        .rows
        .iter()
        .filter_map(|row| row.get(master_column))
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .collect();

    let mut unique = Table::new(input.headers.clone());
    for row in &input.rows {
        let key = row.get(input_column).map(|value| value.trim()).unwrap_or("");
        if key.is_empty() || master_keys.contains(key) {
            continue;
        }
        let mut kept = row.clone();
        if let Some(cell) = kept.get_mut(input_column) {
            *cell = key.to_string();
        }
        unique.push_row(kept);
    }

    info!(
        master_keys = master_keys.len(),
        input_rows = input.row_count(),
        unique_rows = unique.row_count(),
        duplicate_rows = input.row_count() - unique.row_count(),
        "dedupe complete"
    );
    Ok(unique)
}
