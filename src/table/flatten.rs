use serde_json::{Map, Value};

use super::Row;

/// Flatten a JSON object into a single row. Nested object keys are joined with
/// `.`; arrays and scalars are kept as leaf values.
pub fn flatten(value: &Value) -> Row {
    let mut row = Row::new();
    match value {
        Value::Object(map) => flatten_into(&mut row, None, map),
        other => {
            row.insert(String::new(), other.clone());
        }
    }
    row
}

fn flatten_into(row: &mut Row, prefix: Option<&str>, map: &Map<String, Value>) {
    for (key, value) in map {
        let column = match prefix {
            Some(prefix) => format!("{prefix}.{key}"),
            None => key.clone(),
        };

        match value {
            Value::Object(nested) if !nested.is_empty() => {
                flatten_into(row, Some(&column), nested)
            }
            _ => {
                row.insert(column, value.clone());
            }
        }
    }
}
