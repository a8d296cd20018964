/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Polars dataframes built from flattened JSON records.
//!
//! Columns keep the order in which they are first seen across records. A
//! record without some column contributes a null there. Nested JSON values
//! that reach a cell are stored as their JSON text.

use crate::error::AppError;
use crate::presentation::normalize::Record;
use polars::prelude::*;
use serde_json::Value;
use std::collections::HashMap;

/// Dtype epoch millisecond columns are converted to
#[must_use]
pub fn epoch_datetime() -> DataType {
    DataType::Datetime(TimeUnit::Milliseconds, None)
}

/// Builds a dataframe with one row per record.
///
/// Each column takes the common supertype of its cells, so a column holding
/// both integers and floats becomes `Float64`. When a record repeats a column,
/// the last value wins.
///
/// # Errors
/// Returns `AppError::Frame` if polars rejects a column
pub fn frame_from_records<I>(records: I) -> Result<DataFrame, AppError>
where
    I: IntoIterator<Item = Record>,
{
    let mut names: Vec<String> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut cells: Vec<Vec<AnyValue<'static>>> = Vec::new();
    let mut height = 0;

    for record in records {
        for (name, value) in record {
            let position = match positions.get(&name) {
                Some(position) => *position,
                None => {
                    positions.insert(name.clone(), names.len());
                    names.push(name);
                    cells.push(vec![AnyValue::Null; height]);
                    names.len() - 1
                }
            };
            let column = &mut cells[position];
            column.truncate(height);
            column.push(any_value(&value));
        }
        height += 1;
        for column in &mut cells {
            column.resize(height, AnyValue::Null);
        }
    }

    let columns = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| {
            Series::from_any_values(name.into(), &values, false).map(Column::from)
        })
        .collect::<PolarsResult<Vec<Column>>>()?;

    Ok(DataFrame::new(columns)?)
}

/// Casts an epoch millisecond column to [`epoch_datetime`] in place.
///
/// Nulls stay null. A column that already holds datetimes is left untouched.
///
/// # Errors
/// * `AppError::MissingField` - the column does not exist
/// * `AppError::UnexpectedShape` - the column is not numeric
pub fn convert_epoch_millis(frame: &mut DataFrame, name: &str) -> Result<(), AppError> {
    let column = frame
        .column(name)
        .map_err(|_| AppError::MissingField(name.to_string()))?;

    let millis = match column.dtype() {
        DataType::Datetime(_, _) => return Ok(()),
        DataType::Int64 | DataType::UInt64 | DataType::Float64 | DataType::Null => {
            column.cast(&DataType::Int64)?
        }
        other => {
            return Err(AppError::UnexpectedShape(format!(
                "{name} is not epoch milliseconds: {other}"
            )));
        }
    };

    let converted = millis.cast(&epoch_datetime())?;
    frame.with_column(converted)?;
    Ok(())
}

/// JSON array of records, one object per row
///
/// # Errors
/// Returns `AppError::Frame` if the frame cannot be written, `AppError::Json`
/// if polars' output does not parse back
pub fn frame_to_json(frame: &DataFrame) -> Result<Value, AppError> {
    let mut buffer = Vec::new();
    JsonWriter::new(&mut buffer)
        .with_json_format(JsonFormat::Json)
        .finish(&mut frame.clone())?;
    Ok(serde_json::from_slice(&buffer)?)
}

fn any_value(value: &Value) -> AnyValue<'static> {
    match value {
        Value::Null => AnyValue::Null,
        Value::Bool(b) => AnyValue::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => AnyValue::Int64(i),
            None => n.as_f64().map_or(AnyValue::Null, AnyValue::Float64),
        },
        Value::String(s) => AnyValue::StringOwned(s.as_str().into()),
        Value::Array(_) | Value::Object(_) => AnyValue::StringOwned(value.to_string().into()),
    }
}
