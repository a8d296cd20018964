/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # TDA Client Prelude
//!
//! Imports the types and traits needed for most interactions with the API.
//!
//! ## Usage
//!
//! ```rust
//! use tda_client::prelude::*;
//!
//! let fields = AccountFields::POSITIONS | AccountFields::ORDERS;
//! assert_eq!(fields.fields_param(), "positions,orders");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Bearer token
pub use crate::application::auth::BearerToken;

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, TdaResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// API client
pub use crate::application::client::Client;

/// Account service trait
pub use crate::application::interfaces::account::AccountService;

/// Market data service trait
pub use crate::application::interfaces::market::MarketService;

// ============================================================================
// MODELS
// ============================================================================

/// Account models
pub use crate::model::account::{AccountFields, AccountId, AccountsResponse};

/// Request models
pub use crate::model::requests::{
    FrequencyType, PeriodType, PriceHistoryRequest, SearchProjection, Symbols,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Dataframes and projections
pub use crate::presentation::frame::{epoch_datetime, frame_to_json};
pub use crate::presentation::projector::{
    accounts_table, history_table, instrument_table, option_contracts, options_table,
    quote_table, search_table,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use polars::prelude::{DataFrame, DataType, TimeUnit};
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, Utc};
