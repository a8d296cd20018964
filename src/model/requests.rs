/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One or more ticker symbols for a quote request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbols {
    /// A single symbol
    One(String),
    /// Several symbols, sent comma-separated
    Many(Vec<String>),
}

impl Symbols {
    /// Query value sent to the API: comma-joined and upper-cased
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when no non-empty symbol is present
    pub fn to_query(&self) -> Result<String, AppError> {
        let joined = match self {
            Symbols::One(symbol) => symbol.clone(),
            Symbols::Many(symbols) => symbols.join(","),
        };
        if joined.trim().is_empty() {
            return Err(AppError::InvalidInput("at least one symbol is required".to_string()));
        }
        Ok(joined.to_uppercase())
    }
}

impl From<&str> for Symbols {
    fn from(symbol: &str) -> Self {
        Symbols::One(symbol.to_string())
    }
}

impl From<String> for Symbols {
    fn from(symbol: String) -> Self {
        Symbols::One(symbol)
    }
}

impl From<Vec<String>> for Symbols {
    fn from(symbols: Vec<String>) -> Self {
        Symbols::Many(symbols)
    }
}

impl From<Vec<&str>> for Symbols {
    fn from(symbols: Vec<&str>) -> Self {
        Symbols::Many(symbols.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for Symbols {
    fn from(symbols: &[&str]) -> Self {
        Symbols::Many(symbols.iter().map(|s| (*s).to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Symbols {
    fn from(symbols: [&str; N]) -> Self {
        Symbols::Many(symbols.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Kind of instrument search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchProjection {
    /// Exact symbol lookup
    #[default]
    SymbolSearch,
    /// Symbol matched as a regular expression
    SymbolRegex,
    /// Description keyword search
    DescSearch,
    /// Description matched as a regular expression
    DescRegex,
    /// Fundamental data for the symbol
    Fundamental,
}

impl SearchProjection {
    /// Value of the `projection` query parameter
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchProjection::SymbolSearch => "symbol-search",
            SearchProjection::SymbolRegex => "symbol-regex",
            SearchProjection::DescSearch => "desc-search",
            SearchProjection::DescRegex => "desc-regex",
            SearchProjection::Fundamental => "fundamental",
        }
    }
}

impl fmt::Display for SearchProjection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Period unit of a price history request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Days
    Day,
    /// Months
    Month,
    /// Years
    Year,
    /// Year to date
    Ytd,
}

impl PeriodType {
    fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Day => "day",
            PeriodType::Month => "month",
            PeriodType::Year => "year",
            PeriodType::Ytd => "ytd",
        }
    }
}

/// Bar size unit of a price history request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrequencyType {
    /// Minute bars
    Minute,
    /// Daily bars
    Daily,
    /// Weekly bars
    Weekly,
    /// Monthly bars
    Monthly,
}

impl FrequencyType {
    fn as_str(&self) -> &'static str {
        match self {
            FrequencyType::Minute => "minute",
            FrequencyType::Daily => "daily",
            FrequencyType::Weekly => "weekly",
            FrequencyType::Monthly => "monthly",
        }
    }
}

/// Optional parameters of a price history request.
///
/// Every field left as `None` is omitted and the API default applies.
#[derive(DebugPretty, DisplaySimple, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceHistoryRequest {
    /// Unit of `period`
    pub period_type: Option<PeriodType>,
    /// Number of periods to return
    pub period: Option<u32>,
    /// Unit of `frequency`
    pub frequency_type: Option<FrequencyType>,
    /// Number of `frequency_type` units per bar
    pub frequency: Option<u32>,
    /// First bar to return
    pub start_date: Option<DateTime<Utc>>,
    /// Last bar to return
    pub end_date: Option<DateTime<Utc>>,
    /// Include pre and post market bars
    pub need_extended_hours_data: Option<bool>,
}

impl PriceHistoryRequest {
    /// Creates a request with every parameter left to the API default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the period
    #[must_use]
    pub fn period(mut self, period_type: PeriodType, period: u32) -> Self {
        self.period_type = Some(period_type);
        self.period = Some(period);
        self
    }

    /// Sets the bar frequency
    #[must_use]
    pub fn frequency(mut self, frequency_type: FrequencyType, frequency: u32) -> Self {
        self.frequency_type = Some(frequency_type);
        self.frequency = Some(frequency);
        self
    }

    /// Sets the date range
    #[must_use]
    pub fn range(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Requests extended hours bars
    #[must_use]
    pub fn extended_hours(mut self, enabled: bool) -> Self {
        self.need_extended_hours_data = Some(enabled);
        self
    }

    /// Query pairs for the request, dates as epoch milliseconds
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(period_type) = self.period_type {
            query.push(("periodType", period_type.as_str().to_string()));
        }
        if let Some(period) = self.period {
            query.push(("period", period.to_string()));
        }
        if let Some(frequency_type) = self.frequency_type {
            query.push(("frequencyType", frequency_type.as_str().to_string()));
        }
        if let Some(frequency) = self.frequency {
            query.push(("frequency", frequency.to_string()));
        }
        if let Some(start) = self.start_date {
            query.push(("startDate", start.timestamp_millis().to_string()));
        }
        if let Some(end) = self.end_date {
            query.push(("endDate", end.timestamp_millis().to_string()));
        }
        if let Some(extended) = self.need_extended_hours_data {
            query.push(("needExtendedHoursData", extended.to_string()));
        }
        query
    }
}
