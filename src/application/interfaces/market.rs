/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::requests::{PriceHistoryRequest, SearchProjection, Symbols};
use crate::presentation::projector;
use async_trait::async_trait;
use polars::prelude::DataFrame;
use serde_json::Value;

/// Interface for the market data service
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Searches instruments
    ///
    /// # Arguments
    /// * `symbol` - Symbol, pattern or description depending on `projection`
    /// * `projection` - Kind of search
    async fn search(&self, symbol: &str, projection: SearchProjection) -> Result<Value, AppError>;

    /// Gets fundamental data for a symbol
    async fn fundamental(&self, symbol: &str) -> Result<Value, AppError> {
        self.search(symbol, SearchProjection::Fundamental).await
    }

    /// Gets an instrument by CUSIP
    async fn instrument(&self, cusip: &str) -> Result<Value, AppError>;

    /// Gets quotes for one or more symbols
    ///
    /// Symbols are comma-joined and upper-cased before sending.
    async fn quote<S>(&self, symbols: S) -> Result<Value, AppError>
    where
        S: Into<Symbols> + Send;

    /// Gets the default price history of a symbol
    async fn history(&self, symbol: &str) -> Result<Value, AppError> {
        let request = PriceHistoryRequest::default();
        self.history_with(symbol, &request).await
    }

    /// Gets the price history of a symbol with explicit period, frequency or range
    async fn history_with(
        &self,
        symbol: &str,
        request: &PriceHistoryRequest,
    ) -> Result<Value, AppError>;

    /// Gets the option chain of an underlying symbol
    async fn options(&self, symbol: &str) -> Result<Value, AppError>;

    /// Search results as a table, one row per symbol
    async fn search_table(
        &self,
        symbol: &str,
        projection: SearchProjection,
    ) -> Result<DataFrame, AppError> {
        let search = self.search(symbol, projection).await?;
        projector::search_table(&search)
    }

    /// Fundamental data as a table, one row per symbol
    async fn fundamental_table(&self, symbol: &str) -> Result<DataFrame, AppError> {
        self.search_table(symbol, SearchProjection::Fundamental).await
    }

    /// Instrument as a table
    async fn instrument_table(&self, cusip: &str) -> Result<DataFrame, AppError> {
        let instrument = self.instrument(cusip).await?;
        projector::instrument_table(&instrument)
    }

    /// Quotes as a table, one row per symbol
    async fn quote_table<S>(&self, symbols: S) -> Result<DataFrame, AppError>
    where
        S: Into<Symbols> + Send,
    {
        let quotes = self.quote(symbols).await?;
        projector::quote_table(&quotes)
    }

    /// Price bars as a table with `datetime` converted
    async fn history_table(&self, symbol: &str) -> Result<DataFrame, AppError> {
        let history = self.history(symbol).await?;
        projector::history_table(&history)
    }

    /// Option contracts as a table, calls before puts
    async fn options_table(&self, symbol: &str) -> Result<DataFrame, AppError> {
        let chain = self.options(symbol).await?;
        projector::options_table(&chain)
    }
}
