//! Helpers over financial statement rows and the corporate calendar.

use chrono::{Datelike, NaiveDate};
use paft::domain::Period;
use paft::fundamentals::statements::{Calendar, IncomeStatementRow};

/// Period-end dates of statement rows, in provider order.
///
/// Rows labelled with a non-date period (fiscal quarter or year codes) carry no
/// usable year-end and are skipped.
#[must_use]
pub fn statement_period_ends(rows: &[IncomeStatementRow]) -> Vec<NaiveDate> {
    rows.iter()
        .filter_map(|row| match &row.period {
            Period::Date(date) => Some(*date),
            _ => None,
        })
        .collect()
}

/// First date in `dates` whose calendar year equals `year`.
#[must_use]
pub fn first_in_year(dates: &[NaiveDate], year: i32) -> Option<NaiveDate> {
    dates.iter().copied().find(|d| d.year() == year)
}

/// Earnings dates of `calendar` falling in `year`, ascending and de-duplicated.
///
/// Calendar timestamps are reduced to their UTC date.
#[must_use]
pub fn earnings_dates_in_year(calendar: &Calendar, year: i32) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = calendar
        .earnings_dates
        .iter()
        .map(|ts| ts.date_naive())
        .filter(|d| d.year() == year)
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}
