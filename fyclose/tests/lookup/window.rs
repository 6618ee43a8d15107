use std::time::Duration;

use chrono::{TimeZone, Utc};
use fyclose::{FyError, Fyclose};
use fyclose_core::{AssetKind, HistoryMeta, Instrument, Interval};

use crate::helpers::{AAPL, MockConnector, d, daily};

fn aapl() -> Instrument {
    Instrument::from_symbol(AAPL, AssetKind::Equity).expect("valid test symbol")
}

#[tokio::test]
async fn request_spans_padded_days_with_exclusive_end() {
    let mock = MockConnector::builder()
        .with_history_fn(|_, req| {
            assert_eq!(req.interval(), Interval::D1);
            assert_eq!(
                req.period(),
                Some((
                    Utc.with_ymd_and_hms(2023, 9, 25, 0, 0, 0).unwrap(),
                    Utc.with_ymd_and_hms(2023, 10, 6, 0, 0, 0).unwrap(),
                ))
            );
            Ok(daily(&[(d(2023, 9, 29), "171.21")]))
        })
        .build();
    let fy = Fyclose::builder().with_connector(mock).build().unwrap();

    let window = fy.fetch_price_window(&aapl(), d(2023, 9, 30)).await.unwrap();
    assert_eq!(window.len(), 1);
    assert!(window.contains(d(2023, 9, 29)));
}

#[tokio::test]
async fn custom_pad_changes_period() {
    let mock = MockConnector::builder()
        .with_history_fn(|_, req| {
            let (start, end) = req.period().expect("period request");
            assert_eq!(start, Utc.with_ymd_and_hms(2023, 9, 28, 0, 0, 0).unwrap());
            assert_eq!(end, Utc.with_ymd_and_hms(2023, 10, 3, 0, 0, 0).unwrap());
            Ok(daily(&[(d(2023, 9, 29), "171.21")]))
        })
        .build();
    let fy = Fyclose::builder()
        .with_connector(mock)
        .window_pad_days(2)
        .build()
        .unwrap();

    fy.fetch_price_window(&aapl(), d(2023, 9, 30)).await.unwrap();
}

#[tokio::test]
async fn daily_interval_must_be_supported() {
    const WEEKLY_ONLY: &[Interval] = &[Interval::W1];
    let mock = MockConnector::builder()
        .with_history_intervals(WEEKLY_ONLY)
        .returns_history_ok(daily(&[(d(2023, 9, 29), "1")]))
        .build();
    let fy = Fyclose::builder().with_connector(mock.clone()).build().unwrap();

    let err = fy.fetch_price_window(&aapl(), d(2023, 9, 30)).await.unwrap_err();
    assert!(matches!(err, FyError::Unsupported { .. }));
    assert_eq!(mock.history_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn slow_provider_times_out() {
    let mock = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(5))
        .returns_history_ok(daily(&[(d(2023, 9, 29), "1")]))
        .build();
    let fy = Fyclose::builder()
        .with_connector(mock)
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = fy.fetch_price_window(&aapl(), d(2023, 9, 30)).await.unwrap_err();
    assert_eq!(err, FyError::provider_timeout("slow", "history"));
}

#[tokio::test]
async fn exchange_local_dates_outside_window_are_dropped() {
    // 14:30 UTC plus eleven hours lands on the next calendar day.
    let mut resp = daily(&[
        (d(2023, 9, 23), "1.00"),
        (d(2023, 9, 24), "2.00"),
        (d(2023, 10, 4), "3.00"),
        (d(2023, 10, 5), "4.00"),
    ]);
    resp.meta = Some(HistoryMeta {
        timezone: None,
        utc_offset_seconds: Some(11 * 3600),
    });
    let mock = MockConnector::builder().returns_history_ok(resp).build();
    let fy = Fyclose::builder().with_connector(mock).build().unwrap();

    let window = fy.fetch_price_window(&aapl(), d(2023, 9, 30)).await.unwrap();
    assert_eq!(
        window.dates().collect::<Vec<_>>(),
        vec![d(2023, 9, 25), d(2023, 10, 5)]
    );
}
