/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// Default base URL of the TD Ameritrade REST API
pub const DEFAULT_BASE_URL: &str = "https://api.tdameritrade.com/v1";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = "tda-client/0.1.0";

/// Environment variable holding the bearer token
pub const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";
/// Environment variable overriding the REST base URL
pub const BASE_URL_ENV: &str = "TDA_REST_BASE_URL";
/// Environment variable overriding the REST timeout
pub const TIMEOUT_ENV: &str = "TDA_REST_TIMEOUT";
/// Environment variable with a comma-separated list of default account ids
pub const ACCOUNT_IDS_ENV: &str = "TDA_ACCOUNT_IDS";

/// Accounts endpoint, optionally followed by `/{accountId}`
pub const ACCOUNTS_PATH: &str = "accounts";
/// Instruments endpoint; symbol search when queried, a single instrument when followed by `/{cusip}`
pub const INSTRUMENTS_PATH: &str = "instruments";
/// Quotes endpoint
pub const QUOTES_PATH: &str = "marketdata/quotes";
/// Option chain endpoint
pub const OPTION_CHAIN_PATH: &str = "marketdata/chains";

/// Builds the price history path for a symbol
#[must_use]
pub fn history_path(symbol: &str) -> String {
    format!("marketdata/{}/pricehistory", urlencoding::encode(symbol))
}

/// Key holding the price bars in a price history response
pub const CANDLES_KEY: &str = "candles";
/// Epoch millisecond column of a price bar
pub const CANDLE_DATETIME_COLUMN: &str = "datetime";

/// Call side of an option chain response
pub const CALL_EXP_DATE_MAP: &str = "callExpDateMap";
/// Put side of an option chain response
pub const PUT_EXP_DATE_MAP: &str = "putExpDateMap";
/// Epoch millisecond columns every option contract must carry
pub const OPTION_TIMESTAMP_COLUMNS: [&str; 4] = [
    "tradeTimeInLong",
    "quoteTimeInLong",
    "expirationDate",
    "lastTradingDay",
];

/// Column holding the account id in account tables
pub const ACCOUNT_ID_COLUMN: &str = "accountId";
/// Object wrapping each account in the unscoped accounts response
pub const SECURITIES_ACCOUNT_KEY: &str = "securitiesAccount";
/// Separator used when flattening nested JSON into column names
pub const NORMALIZE_SEPARATOR: &str = ".";
