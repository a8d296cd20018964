use polars::prelude::PolarsError;
use reqwest::StatusCode;
use tda_client::error::AppError;

#[test]
fn test_app_error_display_upstream() {
    let error = AppError::Upstream {
        status: StatusCode::BAD_REQUEST,
        body: "bad symbol".to_string(),
    };
    let message = error.to_string();
    assert!(message.contains("400"));
    assert!(message.contains("bad symbol"));
}

#[test]
fn test_app_error_display_missing_field() {
    let error = AppError::MissingField("tradeTimeInLong".to_string());
    assert_eq!(error.to_string(), "missing field: tradeTimeInLong");
}

#[test]
fn test_app_error_display_unexpected_shape() {
    let error = AppError::UnexpectedShape("candles is not an array".to_string());
    assert_eq!(
        error.to_string(),
        "unexpected response shape: candles is not an array"
    );
}

#[test]
fn test_app_error_display_configuration() {
    let error = AppError::Configuration("ACCESS_TOKEN is not set".to_string());
    assert_eq!(error.to_string(), "configuration error: ACCESS_TOKEN is not set");
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("symbol must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: symbol must not be empty");
}

#[test]
fn test_app_error_status() {
    let error = AppError::Upstream {
        status: StatusCode::UNAUTHORIZED,
        body: String::new(),
    };
    assert_eq!(error.status(), Some(StatusCode::UNAUTHORIZED));
    assert_eq!(AppError::MissingField("x".to_string()).status(), None);
}

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_polars() {
    let polars_error = PolarsError::ColumnNotFound("datetime".into());
    let app_error: AppError = polars_error.into();

    match app_error {
        AppError::Frame(_) => (),
        _ => panic!("Expected Frame error"),
    }
    assert!(
        AppError::from(PolarsError::ColumnNotFound("datetime".into()))
            .to_string()
            .starts_with("dataframe error:")
    );
}
