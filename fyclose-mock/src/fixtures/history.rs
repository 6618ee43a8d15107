use chrono::{DateTime, NaiveDate, Utc};
use fyclose_core::{Candle, Currency, FyError, HistoryResponse, IsoCurrency, Money};

type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, u64);

fn rows(s: &str) -> Option<&'static [Row]> {
    match s {
        "AAPL" => Some(&[
            ("2022-09-22", "152.38", "154.47", "150.91", "152.74", 86_652_500),
            ("2022-09-23", "151.19", "151.47", "148.56", "150.43", 96_029_900),
            ("2022-09-26", "149.66", "153.77", "149.64", "150.77", 93_339_400),
            ("2023-02-02", "148.90", "151.18", "148.17", "150.82", 118_339_000),
            ("2023-02-03", "148.03", "157.38", "147.83", "154.50", 154_357_300),
            ("2023-05-04", "164.89", "167.04", "164.31", "165.79", 81_235_400),
            ("2023-05-05", "170.98", "174.30", "170.76", "173.57", 113_316_400),
            ("2023-08-03", "191.57", "192.37", "190.69", "191.17", 61_235_200),
            ("2023-08-04", "185.52", "187.38", "181.92", "181.99", 115_956_800),
            ("2023-09-28", "169.34", "172.03", "167.62", "170.69", 56_294_400),
            ("2023-09-29", "172.02", "173.07", "170.34", "171.21", 51_814_200),
            ("2023-10-02", "171.22", "174.30", "170.93", "173.75", 52_164_500),
            ("2023-10-03", "172.26", "173.63", "170.82", "172.40", 49_594_600),
            ("2024-09-27", "228.46", "229.52", "227.30", "227.79", 34_026_000),
            ("2024-09-30", "230.04", "233.00", "229.65", "233.00", 54_541_900),
        ]),
        "MSFT" => Some(&[
            ("2023-06-29", "334.71", "336.11", "332.62", "335.05", 16_997_000),
            ("2023-06-30", "337.75", "342.73", "337.20", "340.54", 26_823_800),
            ("2023-07-03", "339.19", "340.90", "336.57", "337.99", 12_508_700),
            ("2024-06-28", "453.07", "455.38", "446.41", "446.95", 28_362_300),
            ("2024-07-01", "448.66", "457.37", "445.66", "456.73", 17_662_800),
        ]),
        "KO" => Some(&[
            ("2023-02-13", "59.54", "60.18", "59.46", "60.03", 12_187_700),
            ("2023-02-14", "60.50", "60.78", "59.33", "59.64", 19_541_500),
            ("2023-12-28", "58.80", "59.05", "58.69", "58.95", 8_014_500),
            ("2023-12-29", "58.99", "59.14", "58.79", "58.93", 10_279_400),
            ("2024-01-02", "58.86", "59.45", "58.67", "59.11", 15_129_400),
        ]),
        "NOPRICE" => Some(&[]),
        _ => None,
    }
}

fn usd(s: &str) -> Result<Money, FyError> {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD))
        .map_err(|e| FyError::Data(format!("bad fixture price {s}: {e}")))
}

fn candle(row: &Row) -> Result<Candle, FyError> {
    let (date, o, h, l, c, v) = *row;
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| FyError::Data(format!("bad fixture date {date}: {e}")))?;
    let ts = day
        .and_hms_opt(14, 30, 0)
        .ok_or_else(|| FyError::Data(format!("bad fixture time for {date}")))?
        .and_utc();
    Ok(Candle {
        ts,
        open: usd(o)?,
        high: usd(h)?,
        low: usd(l)?,
        close: usd(c)?,
        close_unadj: None,
        volume: Some(v),
    })
}

/// Daily bars for `s` restricted to `[start, end)` when a period is given.
pub fn by_symbol(
    s: &str,
    period: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> Result<Option<HistoryResponse>, FyError> {
    let Some(rows) = rows(s) else {
        return Ok(None);
    };
    let mut candles = Vec::with_capacity(rows.len());
    for row in rows {
        let c = candle(row)?;
        if period.is_none_or(|(start, end)| c.ts >= start && c.ts < end) {
            candles.push(c);
        }
    }
    Ok(Some(HistoryResponse {
        candles,
        actions: vec![],
        adjusted: false,
        meta: None,
    }))
}
