use chrono::{NaiveDate, TimeZone, Utc};
use fyclose_core::{Calendar, FyError};

/// Earnings announcement dates per symbol. `NOPRICE` has dates but no bars near them.
fn earnings(s: &str) -> Option<&'static [&'static str]> {
    match s {
        "AAPL" => Some(&["2023-02-02", "2023-05-04", "2023-08-03", "2023-11-02", "2024-02-01"]),
        "MSFT" => Some(&["2024-01-30", "2024-04-25"]),
        "KO" => Some(&["2023-02-14", "2023-10-24"]),
        "NOPRICE" | "TIMEOUT" => Some(&["2023-11-01"]),
        "EMPTY" => Some(&[]),
        _ => None,
    }
}

pub fn by_symbol(s: &str) -> Result<Option<Calendar>, FyError> {
    let Some(dates) = earnings(s) else {
        return Ok(None);
    };
    let earnings_dates = dates
        .iter()
        .map(|d| {
            let day = NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|e| FyError::Data(format!("bad fixture date {d}: {e}")))?;
            let ts = day
                .and_hms_opt(21, 0, 0)
                .ok_or_else(|| FyError::Data(format!("bad fixture time for {d}")))?;
            Ok(Utc.from_utc_datetime(&ts))
        })
        .collect::<Result<Vec<_>, FyError>>()?;
    Ok(Some(Calendar {
        earnings_dates,
        ex_dividend_date: None,
        dividend_payment_date: None,
    }))
}
