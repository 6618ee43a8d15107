//! fyclose looks up the closing share price nearest to a company's fiscal year-end.
//!
//! A lookup runs four stages against a registered connector:
//! 1. fetch annual income statement rows and take the first period end in the
//!    requested year ([`Fyclose::resolve_fiscal_yearend`]);
//! 2. fetch daily bars for a padded window around that date
//!    ([`Fyclose::fetch_price_window`]);
//! 3. pick the trading day with the smallest absolute day distance
//!    ([`fyclose_core::select_nearest`]); the earlier day wins a tie;
//! 4. round the close to two decimals and package a [`LookupResult`].
//!
//! [`Fyclose::earnings_prices`] runs the same window and selection stages once
//! per earnings date in a year, taken from the provider's corporate calendar.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fyclose::{Fyclose, LookupRequest};
//! use fyclose_yfinance::YfConnector;
//!
//! let fy = Fyclose::builder()
//!     .with_connector(Arc::new(YfConnector::try_new_default()?))
//!     .build()?;
//! let res = fy.lookup(&LookupRequest::new("AAPL", 2023)?).await?;
//! print!("{}", fyclose::render_report(&res));
//! ```
#![warn(missing_docs)]

mod core;
mod earnings;
mod lookup;
pub mod report;
mod resolver;
mod window;

pub use crate::core::{Fyclose, FycloseBuilder};
pub use fyclose_core::{
    EarningsPrice, EarningsReport, FyError, FycloseConfig, LookupRequest, LookupResult,
    PriceRounding, PriceWindow,
};
pub use report::{render_earnings_report, render_report};
