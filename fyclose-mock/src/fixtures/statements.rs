use chrono::NaiveDate;
use fyclose_core::{FyError, IncomeStatementRow, Period};

/// Annual statement period ends per symbol, in the order the fixture "provider" returns them.
fn period_ends(s: &str) -> Option<&'static [&'static str]> {
    match s {
        "AAPL" => Some(&["2022-09-24", "2023-09-30", "2024-09-28"]),
        "MSFT" => Some(&["2024-06-30", "2023-06-30", "2022-06-30", "2021-06-30"]),
        "KO" => Some(&["2023-12-31", "2022-12-31"]),
        "NOPRICE" | "TIMEOUT" => Some(&["2023-12-31"]),
        "EMPTY" => Some(&[]),
        _ => None,
    }
}

pub fn by_symbol(s: &str) -> Result<Option<Vec<IncomeStatementRow>>, FyError> {
    let Some(dates) = period_ends(s) else {
        return Ok(None);
    };
    dates
        .iter()
        .map(|d| {
            let date = NaiveDate::parse_from_str(d, "%Y-%m-%d")
                .map_err(|e| FyError::Data(format!("bad fixture date {d}: {e}")))?;
            Ok(IncomeStatementRow {
                period: Period::Date(date),
                total_revenue: None,
                gross_profit: None,
                operating_income: None,
                net_income: None,
            })
        })
        .collect::<Result<Vec<_>, FyError>>()
        .map(Some)
}
