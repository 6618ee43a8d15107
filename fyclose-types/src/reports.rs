//! Request and result envelopes for a single fiscal year-end price lookup.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FyError;

/// A validated lookup: one ticker, one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupRequest {
    ticker: String,
    year: i32,
}

impl LookupRequest {
    /// Earliest accepted calendar year.
    pub const MIN_YEAR: i32 = 1900;
    /// Latest accepted calendar year.
    pub const MAX_YEAR: i32 = 2100;

    /// Build a request. The ticker is passed to providers unmodified.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the ticker is blank or the year lies outside
    /// [`Self::MIN_YEAR`]..=[`Self::MAX_YEAR`].
    pub fn new(ticker: impl Into<String>, year: i32) -> Result<Self, FyError> {
        let ticker = ticker.into();
        if ticker.trim().is_empty() {
            return Err(FyError::InvalidArg("ticker must not be empty".into()));
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(FyError::InvalidArg(format!(
                "year must be between {} and {}: {year}",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        Ok(Self { ticker, year })
    }

    /// Ticker symbol as supplied by the caller.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Requested calendar year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }
}

/// Outcome of a successful lookup.
///
/// `price_date` is always a trading day from the fetched window, chosen as the
/// one closest to `fiscal_yearend`; `close_price` carries exactly two decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    /// Ticker symbol as requested.
    pub ticker: String,
    /// Requested calendar year.
    pub fiscal_year: i32,
    /// Annual statement period-end date used as the fiscal year-end.
    pub fiscal_yearend: NaiveDate,
    /// Trading day whose close is reported.
    pub price_date: NaiveDate,
    /// Closing price on `price_date`, rounded to two decimals.
    pub close_price: Decimal,
}

/// Close nearest to one earnings date.
///
/// `price_date` and `close_price` are `None` when the provider has no trading
/// day inside the window around `earnings_date` (for example an upcoming report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsPrice {
    /// Earnings announcement date.
    pub earnings_date: NaiveDate,
    /// Trading day whose close is reported.
    pub price_date: Option<NaiveDate>,
    /// Closing price on `price_date`, rounded to two decimals.
    pub close_price: Option<Decimal>,
}

/// Every earnings date in a year with the close nearest to each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsReport {
    /// Ticker symbol as requested.
    pub ticker: String,
    /// Requested calendar year.
    pub year: i32,
    /// One entry per earnings date, ascending by date.
    pub entries: Vec<EarningsPrice>,
}
