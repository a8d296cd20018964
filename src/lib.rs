/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # TDA Client
//!
//! Asynchronous client for the TD Ameritrade market data and accounts REST API.
//!
//! The crate has two halves:
//!
//! - [`application::client::Client`] authenticates every request with a bearer
//!   token and returns the decoded JSON body of each endpoint (accounts,
//!   instrument search, fundamentals, instruments, quotes, price history and
//!   option chains).
//! - [`presentation::projector`] reshapes those JSON documents into flat
//!   polars `DataFrame`s, one row per entity, casting epoch millisecond
//!   timestamps to `Datetime` columns.
//!
//! ## Example
//!
//! ```ignore
//! use tda_client::prelude::*;
//!
//! let config = Config::with_credentials(Some("token".to_string()), None)?;
//! let client = Client::new(config)?;
//!
//! let chain = client.options_table("aapl").await?;
//! println!("{chain}");
//! ```

/// Application layer: configuration, credentials, service traits and the client
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Request, response and transport models
pub mod model;

/// Tabular projections of API responses
pub mod presentation;

/// Convenient re-exports of the most used types
pub mod prelude;

/// Environment, logging and time helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
