/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Tabular projections of API responses.
//!
//! Each function takes the JSON returned by one client operation and builds a
//! polars [`DataFrame`] with one row per entity. They are pure: projecting the same payload
//! twice gives equal tables. A field a projection depends on that is absent
//! fails the whole projection; no default is substituted.

use crate::constants::{
    ACCOUNT_ID_COLUMN, CALL_EXP_DATE_MAP, CANDLE_DATETIME_COLUMN, CANDLES_KEY,
    OPTION_TIMESTAMP_COLUMNS, PUT_EXP_DATE_MAP,
};
use crate::error::AppError;
use crate::model::account::AccountsResponse;
use crate::presentation::frame::{convert_epoch_millis, frame_from_records};
use crate::presentation::normalize::{Record, flatten_object, object_record};
use polars::prelude::DataFrame;
use serde_json::{Map, Value};
use tracing::debug;

/// One row per account; nested fields become dotted-path columns.
///
/// The first column, `accountId`, holds the account key as text. A top-level
/// `accountId` inside the document is dropped in its favour.
pub fn accounts_table(accounts: &AccountsResponse) -> Result<DataFrame, AppError> {
    let mut records = Vec::with_capacity(accounts.len());
    for (id, account) in accounts.iter() {
        let mut record: Record = vec![(
            ACCOUNT_ID_COLUMN.to_string(),
            Value::String(id.to_string()),
        )];
        record.extend(
            flatten_object(account)?
                .into_iter()
                .filter(|(column, _)| column != ACCOUNT_ID_COLUMN),
        );
        records.push(record);
    }
    frame_from_records(records)
}

/// One row per symbol of a search or fundamental response
pub fn search_table(search: &Value) -> Result<DataFrame, AppError> {
    keyed_rows(search, "search")
}

/// One row per symbol of a quote response, in response order
pub fn quote_table(quotes: &Value) -> Result<DataFrame, AppError> {
    keyed_rows(quotes, "quote")
}

/// Table of an instrument response.
///
/// An array gives one row per element, an object of objects one row per entry,
/// and any other object a single row.
pub fn instrument_table(instrument: &Value) -> Result<DataFrame, AppError> {
    match instrument {
        Value::Array(items) => {
            let records = items
                .iter()
                .map(|item| as_object(item, "instrument").map(object_record))
                .collect::<Result<Vec<_>, _>>()?;
            frame_from_records(records)
        }
        Value::Object(map) if !map.is_empty() && map.values().all(Value::is_object) => {
            keyed_rows(instrument, "instrument")
        }
        Value::Object(map) => frame_from_records(vec![object_record(map)]),
        other => Err(AppError::UnexpectedShape(format!(
            "instrument response is neither an array nor an object: {other}"
        ))),
    }
}

/// One row per price bar, `datetime` converted from epoch milliseconds.
///
/// An empty `candles` list has no `datetime` column and fails with
/// `AppError::MissingField`.
pub fn history_table(history: &Value) -> Result<DataFrame, AppError> {
    let candles = history
        .get(CANDLES_KEY)
        .ok_or_else(|| AppError::MissingField(CANDLES_KEY.to_string()))?
        .as_array()
        .ok_or_else(|| AppError::UnexpectedShape(format!("{CANDLES_KEY} is not an array")))?;

    let records = candles
        .iter()
        .map(|candle| as_object(candle, "candle").map(object_record))
        .collect::<Result<Vec<_>, _>>()?;

    let mut frame = frame_from_records(records)?;
    convert_epoch_millis(&mut frame, CANDLE_DATETIME_COLUMN)?;
    debug!("Price history table: {} bars", frame.height());
    Ok(frame)
}

/// One row per option contract, calls first, then puts.
///
/// Contracts are taken in response order: expiration date, then strike, then
/// position in the contract list. `tradeTimeInLong`, `quoteTimeInLong`,
/// `expirationDate` and `lastTradingDay` must be present on every contract and
/// are converted to datetimes, so a chain without any contract fails with
/// `AppError::MissingField`.
pub fn options_table(chain: &Value) -> Result<DataFrame, AppError> {
    let contracts = option_contracts(chain)?;

    for (position, contract) in contracts.iter().enumerate() {
        if let Some(missing) = OPTION_TIMESTAMP_COLUMNS
            .iter()
            .find(|column| !contract.contains_key(**column))
        {
            return Err(AppError::MissingField(format!(
                "{missing} (option contract {position})"
            )));
        }
    }

    let mut frame = frame_from_records(contracts.into_iter().map(object_record))?;
    for column in OPTION_TIMESTAMP_COLUMNS {
        convert_epoch_millis(&mut frame, column)?;
    }
    debug!("Option chain table: {} contracts", frame.height());
    Ok(frame)
}

/// Every contract of an option chain, calls before puts.
///
/// # Errors
/// * `AppError::MissingField` - `callExpDateMap` or `putExpDateMap` is absent
/// * `AppError::UnexpectedShape` - a level of the date/strike/list nesting has the wrong type
pub fn option_contracts(chain: &Value) -> Result<Vec<&Map<String, Value>>, AppError> {
    let mut contracts = Vec::new();

    for side in [CALL_EXP_DATE_MAP, PUT_EXP_DATE_MAP] {
        let dates = chain
            .get(side)
            .ok_or_else(|| AppError::MissingField(side.to_string()))?;
        let dates = as_object(dates, side)?;

        for (date, strikes) in dates {
            let strikes = as_object(strikes, &format!("{side}[{date}]"))?;
            for (strike, list) in strikes {
                let list = list.as_array().ok_or_else(|| {
                    AppError::UnexpectedShape(format!("{side}[{date}][{strike}] is not an array"))
                })?;
                for contract in list {
                    contracts.push(as_object(contract, "option contract")?);
                }
            }
        }
    }

    Ok(contracts)
}

fn keyed_rows(payload: &Value, what: &str) -> Result<DataFrame, AppError> {
    let entries = as_object(payload, what)?;
    let records = entries
        .iter()
        .map(|(key, entry)| as_object(entry, &format!("{what} entry {key}")).map(object_record))
        .collect::<Result<Vec<_>, _>>()?;
    frame_from_records(records)
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, AppError> {
    value
        .as_object()
        .ok_or_else(|| AppError::UnexpectedShape(format!("{what} is not an object")))
}
