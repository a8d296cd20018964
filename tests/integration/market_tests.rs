// Integration tests for market data endpoints

use crate::common::{self, bearer, float, int, millis, text};
use mockito::{Matcher, Server};
use std::io::Write;
use tda_client::prelude::*;

fn contract(symbol: &str, put_call: &str, strike: f64, expiration: i64) -> Value {
    json!({
        "putCall": put_call,
        "symbol": symbol,
        "strikePrice": strike,
        "bid": 1.25,
        "tradeTimeInLong": 1_609_459_200_000_i64,
        "quoteTimeInLong": 1_609_459_260_000_i64,
        "expirationDate": expiration,
        "lastTradingDay": expiration - 86_400_000,
    })
}

#[tokio::test]
async fn test_quote_joins_and_uppercases_symbols() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/marketdata/quotes")
        .match_header("authorization", bearer().as_str())
        .match_query(Matcher::UrlEncoded("symbol".into(), "AAPL,MSFT".into()))
        .with_status(200)
        .with_body(
            r#"{"AAPL": {"symbol": "AAPL", "lastPrice": 130.5},
                "MSFT": {"symbol": "MSFT", "lastPrice": 220.1, "bidSize": 300}}"#,
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let table = client.quote_table(vec!["aapl", "msft"]).await.unwrap();

    mock.assert_async().await;
    assert_eq!(table.height(), 2);
    assert_eq!(
        table.get_column_names_str(),
        vec!["symbol", "lastPrice", "bidSize"]
    );
    assert_eq!(text(&table, "symbol", 0).as_deref(), Some("AAPL"));
    assert_eq!(int(&table, "bidSize", 0), None);
    assert_eq!(int(&table, "bidSize", 1), Some(300));
}

#[tokio::test]
async fn test_quote_single_symbol() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/marketdata/quotes")
        .match_query(Matcher::UrlEncoded("symbol".into(), "SPY".into()))
        .with_status(200)
        .with_body(r#"{"SPY": {"symbol": "SPY"}}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let quotes = client.quote("spy").await.unwrap();

    mock.assert_async().await;
    assert_eq!(quotes["SPY"]["symbol"], json!("SPY"));
}

#[tokio::test]
async fn test_search_and_fundamental_projection() {
    let mut server = Server::new_async().await;
    let search = server
        .mock("GET", "/instruments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("symbol".into(), "AAPL".into()),
            Matcher::UrlEncoded("projection".into(), "symbol-search".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"AAPL": {"cusip": "037833100", "symbol": "AAPL", "exchange": "NASDAQ"}}"#)
        .create_async()
        .await;
    let fundamental = server
        .mock("GET", "/instruments")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("symbol".into(), "AAPL".into()),
            Matcher::UrlEncoded("projection".into(), "fundamental".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"AAPL": {"symbol": "AAPL", "fundamental": {"peRatio": 35.5, "symbol": "AAPL"}}}"#,
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let table = client
        .search_table("AAPL", SearchProjection::default())
        .await
        .unwrap();
    let fundamentals = client.fundamental_table("AAPL").await.unwrap();

    search.assert_async().await;
    fundamental.assert_async().await;
    assert_eq!(table.height(), 1);
    assert_eq!(text(&table, "cusip", 0).as_deref(), Some("037833100"));
    let fundamental: Value =
        serde_json::from_str(&text(&fundamentals, "fundamental", 0).unwrap()).unwrap();
    assert_eq!(fundamental, json!({"peRatio": 35.5, "symbol": "AAPL"}));
}

#[tokio::test]
async fn test_instrument_by_cusip() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/instruments/037833100")
        .match_header("authorization", bearer().as_str())
        .with_status(200)
        .with_body(r#"[{"cusip": "037833100", "symbol": "AAPL", "assetType": "EQUITY"}]"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let table = client.instrument_table("037833100").await.unwrap();

    mock.assert_async().await;
    assert_eq!(table.height(), 1);
    assert_eq!(text(&table, "assetType", 0).as_deref(), Some("EQUITY"));
}

#[tokio::test]
async fn test_history_converts_datetime() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/marketdata/aapl/pricehistory")
        .with_status(200)
        .with_body(r#"{"candles": [{"datetime": 1000, "close": 1.0}], "symbol": "AAPL", "empty": false}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let table = client.history_table("aapl").await.unwrap();

    mock.assert_async().await;
    assert_eq!(table.height(), 1);
    assert_eq!(
        table.column("datetime").unwrap().dtype(),
        &DataType::Datetime(TimeUnit::Milliseconds, None)
    );
    assert_eq!(millis(&table, "datetime", 0), Some(1000));
    assert_eq!(float(&table, "close", 0), Some(1.0));
}

#[tokio::test]
async fn test_history_with_parameters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/marketdata/AAPL/pricehistory")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("periodType".into(), "month".into()),
            Matcher::UrlEncoded("period".into(), "1".into()),
            Matcher::UrlEncoded("frequencyType".into(), "daily".into()),
            Matcher::UrlEncoded("frequency".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"candles": [{"datetime": 1000, "close": 1.0}], "symbol": "AAPL", "empty": false}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let request = PriceHistoryRequest::new()
        .period(PeriodType::Month, 1)
        .frequency(FrequencyType::Daily, 1);
    let history = client.history_with("AAPL", &request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(history_table(&history).unwrap().height(), 1);
}

#[tokio::test]
async fn test_options_calls_before_puts() {
    let mut server = Server::new_async().await;
    let body = json!({
        "symbol": "AAPL",
        "callExpDateMap": {
            "2021-01-01:0": {"100.0": [contract("AAPL_010121C100", "CALL", 100.0, 1_609_459_200_000)]}
        },
        "putExpDateMap": {
            "2021-01-02:1": {"200.0": [contract("AAPL_010221P200", "PUT", 200.0, 1_609_545_600_000)]}
        }
    });
    let mock = server
        .mock("GET", "/marketdata/chains")
        .match_header("authorization", bearer().as_str())
        .match_query(Matcher::UrlEncoded("symbol".into(), "AAPL".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let table = client.options_table("aapl").await.unwrap();

    mock.assert_async().await;
    assert_eq!(table.height(), 2);
    assert_eq!(text(&table, "putCall", 0).as_deref(), Some("CALL"));
    assert_eq!(text(&table, "putCall", 1).as_deref(), Some("PUT"));
    for column in ["tradeTimeInLong", "quoteTimeInLong", "expirationDate", "lastTradingDay"] {
        for row in 0..2 {
            assert!(
                millis(&table, column, row).is_some(),
                "{column} at row {row} should be a datetime"
            );
        }
    }
    assert_eq!(millis(&table, "expirationDate", 1), Some(1_609_545_600_000));
}

#[tokio::test]
async fn test_upstream_error_carries_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/marketdata/chains")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"error": "The access token being passed has expired or is invalid."}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let err = client.options_table("AAPL").await.unwrap_err();

    assert_eq!(err.status().map(|s| s.as_u16()), Some(401));
    assert!(err.to_string().contains("access token being passed has expired"));
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/marketdata/quotes")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let err = client.quote("AAPL").await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn test_unreadable_error_body_is_a_network_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/marketdata/quotes")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_chunked_body(|w| {
            w.write_all(br#"{"error": "partial"#)?;
            Err(std::io::Error::other("connection dropped"))
        })
        .create_async()
        .await;

    let client = common::create_test_client(&server, vec![]);
    let err = client.quote("AAPL").await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)), "got {err:?}");
}
