/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::auth::BearerToken;
use crate::constants::{ACCOUNT_IDS_ENV, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TIMEOUT_ENV};
use crate::error::AppError;
use crate::model::account::AccountId;
use crate::utils::config::{get_env_list, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Clone)]
/// Credentials for the TD Ameritrade API
pub struct Credentials {
    /// Bearer token; never serialized
    #[serde(skip_serializing)]
    pub access_token: BearerToken,
    /// Accounts queried by `accounts()`; empty means every account of the token
    pub account_ids: Vec<AccountId>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: get_env_or_default(BASE_URL_ENV, DEFAULT_BASE_URL.to_string()),
            timeout: get_env_or_default(TIMEOUT_ENV, DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone)]
/// Main configuration for the client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from the environment (and `.env` file)
    ///
    /// # Errors
    /// Returns `AppError::Configuration` when `ACCESS_TOKEN` is not set
    pub fn new() -> Result<Self, AppError> {
        Self::with_credentials(None, None)
    }

    /// Creates a configuration from explicit values, falling back to the environment
    ///
    /// # Arguments
    /// * `access_token` - Bearer token; `None` reads `ACCESS_TOKEN`
    /// * `account_ids` - Accounts to query; `None` reads `TDA_ACCOUNT_IDS` (empty if unset)
    ///
    /// # Errors
    /// Returns `AppError::Configuration` when no token is available
    pub fn with_credentials(
        access_token: Option<String>,
        account_ids: Option<Vec<AccountId>>,
    ) -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token = BearerToken::resolve(access_token)?;
        let account_ids = account_ids.unwrap_or_else(|| {
            get_env_list(ACCOUNT_IDS_ENV)
                .into_iter()
                .map(AccountId::from)
                .collect()
        });

        Ok(Config {
            credentials: Credentials {
                access_token,
                account_ids,
            },
            rest_api: RestApiConfig::default(),
        })
    }

    /// Overrides the REST base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Overrides the REST timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, timeout: u64) -> Self {
        self.rest_api.timeout = timeout;
        self
    }
}
