/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::NORMALIZE_SEPARATOR;
use crate::error::AppError;
use serde_json::{Map, Value};

/// One flattened entity: `(column, value)` pairs in column order
pub type Record = Vec<(String, Value)>;

/// Flattens a JSON object into one record.
///
/// Every leaf becomes a column named by its dotted path; array elements are
/// addressed by index (`positions.0.longQuantity`). Empty objects and arrays
/// are kept as a single JSON cell.
///
/// # Errors
/// Returns `AppError::UnexpectedShape` when `value` is not an object
pub fn flatten_object(value: &Value) -> Result<Record, AppError> {
    let object = value
        .as_object()
        .ok_or_else(|| AppError::UnexpectedShape(format!("expected an object, got {value}")))?;
    let mut record = Record::new();
    for (key, child) in object {
        flatten_into(key, child, &mut record);
    }
    Ok(record)
}

fn flatten_into(path: &str, value: &Value, record: &mut Record) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, child) in map {
                flatten_into(&join(path, key), child, record);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(&join(path, &i.to_string()), child, record);
            }
        }
        _ => record.push((path.to_string(), value.clone())),
    }
}

fn join(prefix: &str, key: &str) -> String {
    format!("{prefix}{NORMALIZE_SEPARATOR}{key}")
}

/// One record holding the top-level fields of an object, nested values untouched
pub fn object_record(object: &Map<String, Value>) -> Record {
    object
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
