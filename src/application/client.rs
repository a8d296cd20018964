/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Client for the TD Ameritrade REST API
//!
//! # Example
//! ```ignore
//! use tda_client::prelude::*;
//!
//! let client = Client::new(Config::new()?)?;
//!
//! let quotes = client.quote(["aapl", "msft"]).await?;
//! let table = client.options_table("aapl").await?;
//! ```

use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::application::interfaces::market::MarketService;
use crate::constants::{
    ACCOUNTS_PATH, INSTRUMENTS_PATH, OPTION_CHAIN_PATH, QUOTES_PATH, SECURITIES_ACCOUNT_KEY,
    history_path,
};
use crate::error::AppError;
use crate::model::account::{AccountFields, AccountId, AccountsResponse};
use crate::model::http::HttpClient;
use crate::model::requests::{PriceHistoryRequest, SearchProjection, Symbols};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the TD Ameritrade REST API
///
/// Holds the bearer token and the account ids it queries. Every operation
/// issues its requests one after another and never retries.
pub struct Client {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client
    ///
    /// # Arguments
    /// * `config` - Credentials and REST settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = HttpClient::new(config.credentials.access_token.clone(), &config.rest_api)?;
        debug!(
            "Client created for {} with {} account(s)",
            http_client.base_url(),
            config.credentials.account_ids.len()
        );
        Ok(Self {
            http_client: Arc::new(http_client),
            config: Arc::new(config),
        })
    }

    /// Creates a client from the environment
    ///
    /// # Errors
    /// Returns `AppError::Configuration` when `ACCESS_TOKEN` is not set
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new()?)
    }

    /// Account ids queried by `accounts()`
    #[must_use]
    pub fn account_ids(&self) -> &[AccountId] {
        &self.config.credentials.account_ids
    }

    /// Current configuration
    #[must_use]
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    async fn all_accounts(&self, query: &[(&str, String)]) -> Result<AccountsResponse, AppError> {
        let response: Value = self.http_client.get(ACCOUNTS_PATH, query).await?;
        let accounts = response.as_array().ok_or_else(|| {
            AppError::UnexpectedShape("accounts response is not an array".to_string())
        })?;

        let mut result = AccountsResponse::new();
        for account in accounts {
            let id = account
                .get(SECURITIES_ACCOUNT_KEY)
                .and_then(|inner| inner.get("accountId"))
                .or_else(|| account.get("accountId"))
                .and_then(AccountId::from_json)
                .ok_or_else(|| {
                    AppError::MissingField(format!("{SECURITIES_ACCOUNT_KEY}.accountId"))
                })?;
            result.insert(id, account.clone());
        }
        Ok(result)
    }
}

fn require(value: &str, what: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{what} must not be empty")));
    }
    Ok(())
}

#[async_trait]
impl AccountService for Client {
    async fn accounts(&self, fields: AccountFields) -> Result<AccountsResponse, AppError> {
        let query = [("fields", fields.fields_param())];

        if self.account_ids().is_empty() {
            info!("Getting all accounts");
            let result = self.all_accounts(&query).await?;
            debug!("Accounts obtained: {}", result.len());
            return Ok(result);
        }

        let mut result = AccountsResponse::new();
        for id in self.account_ids() {
            info!("Getting account {}", id);
            let path = format!("{ACCOUNTS_PATH}/{}", urlencoding::encode(id.as_str()));
            let account: Value = self.http_client.get(&path, &query).await?;
            result.insert(id.clone(), account);
        }
        debug!("Accounts obtained: {}", result.len());
        Ok(result)
    }
}

#[async_trait]
impl MarketService for Client {
    async fn search(&self, symbol: &str, projection: SearchProjection) -> Result<Value, AppError> {
        require(symbol, "symbol")?;
        info!("Searching instruments: {} ({})", symbol, projection);
        let query = [
            ("symbol", symbol.to_string()),
            ("projection", projection.as_str().to_string()),
        ];
        self.http_client.get(INSTRUMENTS_PATH, &query).await
    }

    async fn instrument(&self, cusip: &str) -> Result<Value, AppError> {
        require(cusip, "cusip")?;
        info!("Getting instrument: {}", cusip);
        let path = format!("{INSTRUMENTS_PATH}/{}", urlencoding::encode(cusip));
        self.http_client.get(&path, &[]).await
    }

    async fn quote<S>(&self, symbols: S) -> Result<Value, AppError>
    where
        S: Into<Symbols> + Send,
    {
        let symbols = symbols.into().to_query()?;
        info!("Getting quotes: {}", symbols);
        self.http_client
            .get(QUOTES_PATH, &[("symbol", symbols)])
            .await
    }

    async fn history_with(
        &self,
        symbol: &str,
        request: &PriceHistoryRequest,
    ) -> Result<Value, AppError> {
        require(symbol, "symbol")?;
        info!("Getting price history: {}", symbol);
        self.http_client
            .get(&history_path(symbol), &request.to_query())
            .await
    }

    async fn options(&self, symbol: &str) -> Result<Value, AppError> {
        require(symbol, "symbol")?;
        let symbol = symbol.to_uppercase();
        info!("Getting option chain: {}", symbol);
        self.http_client
            .get(OPTION_CHAIN_PATH, &[("symbol", symbol)])
            .await
    }
}
