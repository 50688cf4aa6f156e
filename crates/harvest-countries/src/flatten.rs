//! Flattening of nested JSON objects into single-level rows.
//!
//! Nested object keys are joined with `.` (`name.common`, `flags.png`).
//! Arrays are leaf values and are kept whole.

use serde_json::{Map, Value};

/// Flattens one JSON value. A non-object value becomes a single-column row
/// keyed by the empty string.
#[must_use]
pub fn flatten_record(value: &Value) -> Map<String, Value> {
    let mut row = Map::new();
    match value {
        Value::Object(object) => flatten_into(&mut row, None, object),
        other => {
            row.insert(String::new(), other.clone());
        }
    }
    row
}

/// Flattens every record, preserving order.
#[must_use]
pub fn flatten_records(values: &[Value]) -> Vec<Map<String, Value>> {
    values.iter().map(flatten_record).collect()
}

fn flatten_into(row: &mut Map<String, Value>, prefix: Option<&str>, object: &Map<String, Value>) {
    for (key, value) in object {
        let column = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };
        match value {
            // An empty object has no leaves; keep it so the column is not lost.
            Value::Object(inner) if !inner.is_empty() => flatten_into(row, Some(&column), inner),
            leaf => {
                row.insert(column, leaf.clone());
            }
        }
    }
}
