/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::account::{AccountFields, AccountsResponse};
use crate::presentation::projector;
use async_trait::async_trait;
use polars::prelude::DataFrame;

/// Interface for the account service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets the configured accounts, or every account of the token when none is configured
    ///
    /// # Arguments
    /// * `fields` - Sub-resources to include besides balances
    ///
    /// # Returns
    /// * Account documents keyed by account id
    ///
    /// The first failing request aborts the call; no partial result is returned.
    async fn accounts(&self, fields: AccountFields) -> Result<AccountsResponse, AppError>;

    /// Gets accounts as a table, one row per account with nested fields flattened
    async fn accounts_table(&self, fields: AccountFields) -> Result<DataFrame, AppError> {
        let accounts = self.accounts(fields).await?;
        projector::accounts_table(&accounts)
    }
}
