/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::constants::ACCESS_TOKEN_ENV;
use crate::error::AppError;
use crate::utils::config::get_env_required;
use std::fmt;

/// Bearer token presented on every request.
///
/// The token is never printed: `Debug` and `Display` show a redacted value.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps an access token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Uses the explicit token when given, otherwise reads `ACCESS_TOKEN`
    ///
    /// # Errors
    /// Returns `AppError::Configuration` when neither source provides a non-empty token
    pub fn resolve(explicit: Option<String>) -> Result<Self, AppError> {
        match explicit {
            Some(token) if !token.trim().is_empty() => Ok(Self(token)),
            Some(_) => Err(AppError::Configuration("access token is empty".to_string())),
            None => get_env_required(ACCESS_TOKEN_ENV).map(Self),
        }
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Raw token
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
