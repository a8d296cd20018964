/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use polars::prelude::PolarsError;
use reqwest::StatusCode;
use std::fmt;

/// Result alias used across the crate
pub type TdaResult<T> = Result<T, AppError>;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The upstream API answered with a non-success status
    Upstream {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Raw response body
        body: String,
    },
    /// Transport level failure
    Network(reqwest::Error),
    /// The response body could not be decoded as JSON
    Json(serde_json::Error),
    /// A field required by a tabular projection is absent
    MissingField(String),
    /// The response does not have the shape a projection expects
    UnexpectedShape(String),
    /// The client could not be configured (e.g. no access token)
    Configuration(String),
    /// The caller supplied an argument the API cannot accept
    InvalidInput(String),
    /// A dataframe could not be built or transformed
    Frame(PolarsError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upstream { status, body } => {
                write!(f, "upstream request failed with status {status}: {body}")
            }
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::MissingField(field) => write!(f, "missing field: {field}"),
            AppError::UnexpectedShape(msg) => write!(f, "unexpected response shape: {msg}"),
            AppError::Configuration(msg) => write!(f, "configuration error: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Frame(e) => write!(f, "dataframe error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Frame(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<PolarsError> for AppError {
    fn from(e: PolarsError) -> Self {
        AppError::Frame(e)
    }
}

impl AppError {
    /// Returns the upstream status code when the error came from a non-success response
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
