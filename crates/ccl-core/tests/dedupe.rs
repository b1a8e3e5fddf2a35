//! Tests for master-list deduplication.

use ccl_core::{INPUT_KEY_COLUMN, MASTER_KEY_COLUMN, dedupe};
use ccl_model::{CclError, Table};

fn keyed_table(key_column: &str, keys: &[&str]) -> Table {
    let mut table = Table::new(vec!["Name".to_string(), key_column.to_string()]);
    for (index, key) in keys.iter().enumerate() {
        table.push_row(vec![format!("contact {index}"), (*key).to_string()]);
    }
    table
}

#[test]
fn drops_duplicates_and_empty_keys() {
    let master = keyed_table(MASTER_KEY_COLUMN, &["u1", "u2"]);
    let input = keyed_table(INPUT_KEY_COLUMN, &["u1", " u2 ", "u3", ""]);

    let unique = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN).expect("dedupe");

    assert_eq!(unique.row_count(), 1);
    assert_eq!(unique.value(0, 1), "u3");
    assert_eq!(unique.value(0, 0), "contact 2");
}

#[test]
fn kept_keys_are_written_back_trimmed() {
    let master = keyed_table(MASTER_KEY_COLUMN, &["u1"]);
    let input = keyed_table(INPUT_KEY_COLUMN, &["  u9  "]);

    let unique = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN).expect("dedupe");

    assert_eq!(unique.row_count(), 1);
    assert_eq!(unique.value(0, 1), "u9");
}

#[test]
fn dedupe_is_idempotent() {
    let master = keyed_table(MASTER_KEY_COLUMN, &["u1", "u2"]);
    let input = keyed_table(INPUT_KEY_COLUMN, &["u3", "u4"]);

    let once = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN).expect("dedupe");
    let twice = dedupe(&master, MASTER_KEY_COLUMN, &once, INPUT_KEY_COLUMN).expect("dedupe again");

    assert_eq!(once, twice);
}

#[test]
fn duplicates_within_the_master_collapse_silently() {
    let master = keyed_table(MASTER_KEY_COLUMN, &["u1", "u1", " u1 "]);
    let input = keyed_table(INPUT_KEY_COLUMN, &["u1", "u2"]);

    let unique = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN).expect("dedupe");

    assert_eq!(unique.row_count(), 1);
    assert_eq!(unique.value(0, 1), "u2");
}

#[test]
fn missing_key_columns_are_reported_per_table() {
    let master = keyed_table("Some Other Column", &["u1"]);
    let input = keyed_table(INPUT_KEY_COLUMN, &["u2"]);

    let error = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN)
        .expect_err("missing master key");
    let kind = error.downcast_ref::<CclError>().expect("typed error");
    assert!(matches!(
        kind,
        CclError::MissingColumn { column } if column == MASTER_KEY_COLUMN
    ));

    let master = keyed_table(MASTER_KEY_COLUMN, &["u1"]);
    let input = keyed_table("Profile Link", &["u2"]);
    let error = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN)
        .expect_err("missing input key");
    let kind = error.downcast_ref::<CclError>().expect("typed error");
    assert!(matches!(
        kind,
        CclError::MissingColumn { column } if column == INPUT_KEY_COLUMN
    ));
}

#[test]
fn other_columns_and_order_are_preserved() {
    let mut input = Table::new(vec![
        "Name".to_string(),
        INPUT_KEY_COLUMN.to_string(),
        "Company".to_string(),
    ]);
    input.push_row(vec!["a".to_string(), "u1".to_string(), "Acme".to_string()]);
    input.push_row(vec!["b".to_string(), "u2".to_string(), "Globex".to_string()]);
    input.push_row(vec!["c".to_string(), "u3".to_string(), "Initech".to_string()]);
    let master = keyed_table(MASTER_KEY_COLUMN, &["u2"]);

    let unique = dedupe(&master, MASTER_KEY_COLUMN, &input, INPUT_KEY_COLUMN).expect("dedupe");

    assert_eq!(unique.headers, input.headers);
    assert_eq!(unique.row_count(), 2);
    assert_eq!(unique.value(0, 0), "a");
    assert_eq!(unique.value(1, 2), "Initech");
}
