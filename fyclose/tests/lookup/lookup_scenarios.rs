use fyclose::{FyError, Fyclose, LookupRequest, PriceRounding};
use fyclose_core::AssetKind;
use rust_decimal::Decimal;

use crate::helpers::{AAPL, MockConnector, d, daily, scenario_a, statement_rows};

fn req(year: i32) -> LookupRequest {
    LookupRequest::new(AAPL, year).unwrap()
}

#[tokio::test]
async fn scenario_a_picks_friday_before_saturday_year_end() {
    let fy = Fyclose::builder().with_connector(scenario_a()).build().unwrap();

    let res = fy.lookup(&req(2023)).await.unwrap();
    assert_eq!(res.ticker, "AAPL");
    assert_eq!(res.fiscal_year, 2023);
    assert_eq!(res.fiscal_yearend, d(2023, 9, 30));
    assert_eq!(res.price_date, d(2023, 9, 29));
    assert_eq!(res.close_price, Decimal::new(17121, 2));
    assert_eq!(res.close_price.to_string(), "171.21");
}

#[tokio::test]
async fn scenario_b_missing_year_skips_history() {
    let mock = scenario_a();
    let fy = Fyclose::builder().with_connector(mock.clone()).build().unwrap();

    let err = fy.lookup(&req(2025)).await.unwrap_err();
    assert_eq!(
        err,
        FyError::FiscalYearNotFound {
            symbol: "AAPL".into(),
            year: 2025,
            available: vec![d(2022, 9, 24), d(2023, 9, 30), d(2024, 9, 28)],
        }
    );
    assert_eq!(mock.statement_calls(), 1);
    assert_eq!(mock.history_calls(), 0);
}

#[tokio::test]
async fn scenario_c_empty_window() {
    let mock = MockConnector::builder()
        .returns_income_statement_ok(statement_rows(&[d(2023, 9, 30)]))
        .returns_history_ok(daily(&[]))
        .build();
    let fy = Fyclose::builder().with_connector(mock).build().unwrap();

    let err = fy.lookup(&req(2023)).await.unwrap_err();
    assert_eq!(
        err,
        FyError::PriceDataUnavailable {
            symbol: "AAPL".into(),
            around: d(2023, 9, 30),
        }
    );
    assert!(err.is_lookup_miss());
}

#[tokio::test]
async fn empty_statements_are_data_unavailable() {
    let mock = MockConnector::builder()
        .returns_income_statement_ok(vec![])
        .returns_history_ok(daily(&[(d(2023, 9, 29), "1")]))
        .build();
    let fy = Fyclose::builder().with_connector(mock.clone()).build().unwrap();

    let err = fy.lookup(&req(2023)).await.unwrap_err();
    assert!(matches!(err, FyError::DataUnavailable { ref what } if what == "AAPL"));
    assert_eq!(mock.history_calls(), 0);
}

#[tokio::test]
async fn repeated_lookups_are_identical() {
    let fy = Fyclose::builder().with_connector(scenario_a()).build().unwrap();
    let first = fy.lookup(&req(2023)).await.unwrap();
    let second = fy.lookup(&req(2023)).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn equidistant_days_resolve_to_the_earlier() {
    // 2023-12-31 is a Sunday; Friday 29th and Tuesday 2nd are both two days away.
    let mock = MockConnector::builder()
        .returns_income_statement_ok(statement_rows(&[d(2023, 12, 31)]))
        .returns_history_ok(daily(&[(d(2024, 1, 2), "59.11"), (d(2023, 12, 29), "58.93")]))
        .build();
    let fy = Fyclose::builder().with_connector(mock).build().unwrap();

    let res = fy.lookup(&req(2023)).await.unwrap();
    assert_eq!(res.price_date, d(2023, 12, 29));
    assert_eq!(res.close_price, Decimal::new(5893, 2));
}

#[tokio::test]
async fn rounding_mode_applies_to_close() {
    let build = |rounding| {
        let mock = MockConnector::builder()
            .returns_income_statement_ok(statement_rows(&[d(2023, 9, 30)]))
            .returns_history_ok(daily(&[(d(2023, 9, 29), "171.205")]))
            .build();
        Fyclose::builder()
            .with_connector(mock)
            .rounding(rounding)
            .build()
            .unwrap()
    };

    let up = build(PriceRounding::HalfUp).lookup(&req(2023)).await.unwrap();
    assert_eq!(up.close_price.to_string(), "171.21");

    let even = build(PriceRounding::HalfEven).lookup(&req(2023)).await.unwrap();
    assert_eq!(even.close_price.to_string(), "171.20");
}

#[tokio::test]
async fn whole_number_close_gets_two_decimals() {
    let mock = MockConnector::builder()
        .returns_income_statement_ok(statement_rows(&[d(2023, 9, 30)]))
        .returns_history_ok(daily(&[(d(2023, 9, 29), "171")]))
        .build();
    let fy = Fyclose::builder().with_connector(mock).build().unwrap();
    let res = fy.lookup(&req(2023)).await.unwrap();
    assert_eq!(res.close_price.to_string(), "171.00");
}

#[tokio::test]
async fn provider_error_is_returned_unchanged() {
    let mock = MockConnector::builder()
        .name("flaky")
        .with_income_statement_fn(|_, _| Err(FyError::connector("flaky", "status 503")))
        .returns_history_ok(daily(&[]))
        .build();
    let fy = Fyclose::builder().with_connector(mock).build().unwrap();

    let err = fy.lookup(&req(2023)).await.unwrap_err();
    assert_eq!(err, FyError::connector("flaky", "status 503"));
    assert!(!err.is_lookup_miss());
}

#[tokio::test]
async fn connector_for_other_kind_is_skipped() {
    let crypto_only = MockConnector::builder()
        .name("crypto")
        .supports_kind(AssetKind::Crypto)
        .with_income_statement_fn(|_, _| panic!("must not be called for equities"))
        .returns_history_ok(daily(&[]))
        .build();
    let fy = Fyclose::builder()
        .with_connector(crypto_only)
        .with_connector(scenario_a())
        .build()
        .unwrap();

    let res = fy.lookup(&req(2023)).await.unwrap();
    assert_eq!(res.price_date, d(2023, 9, 29));
}

#[tokio::test]
async fn missing_capability_is_unsupported() {
    let statements_only = MockConnector::builder()
        .returns_income_statement_ok(statement_rows(&[d(2023, 9, 30)]))
        .build();
    let fy = Fyclose::builder()
        .with_connector(statements_only)
        .build()
        .unwrap();

    let err = fy.lookup(&req(2023)).await.unwrap_err();
    assert_eq!(err, FyError::unsupported("history"));
}
