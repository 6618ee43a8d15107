use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the fyclose workspace.
///
/// Covers argument validation, the lookup-specific failures (no statement data,
/// fiscal year not present, empty price window), and provider-tagged failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FyError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "income-statement").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// The provider returned no annual statement dates at all.
    #[error("no financial statement data available for {what}")]
    DataUnavailable {
        /// Description of the missing dataset, e.g. "AAPL".
        what: String,
    },

    /// None of the annual statement dates falls in the requested year.
    #[error(
        "no fiscal year-end found in {year} for {symbol}; available: [{}]",
        join_dates(available)
    )]
    FiscalYearNotFound {
        /// Symbol that was looked up.
        symbol: String,
        /// Requested calendar year.
        year: i32,
        /// Leading sample of the statement dates the provider did return.
        available: Vec<NaiveDate>,
    },

    /// The price window around the fiscal year-end contained no trading days.
    #[error("no price data for {symbol} around {around}")]
    PriceDataUnavailable {
        /// Symbol that was looked up.
        symbol: String,
        /// Center of the requested window (the fiscal year-end).
        around: NaiveDate,
    },

    /// The provider's calendar carried no earnings dates at all.
    #[error("no earnings data found for {symbol}")]
    EarningsDataUnavailable {
        /// Symbol that was looked up.
        symbol: String,
    },

    /// Earnings dates exist, but none falls in the requested year.
    #[error("no earnings data found for {symbol} in {year}")]
    EarningsYearNotFound {
        /// Symbol that was looked up.
        symbol: String,
        /// Requested calendar year.
        year: i32,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "history", "income-statement").
        capability: String,
    },
}

fn join_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl FyError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }
    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Returns true for the failures raised by the lookup pipeline itself rather than
    /// by the provider transport: missing statements or earnings dates, a missing
    /// year, or an empty price window.
    #[must_use]
    pub const fn is_lookup_miss(&self) -> bool {
        matches!(
            self,
            Self::DataUnavailable { .. }
                | Self::FiscalYearNotFound { .. }
                | Self::PriceDataUnavailable { .. }
                | Self::EarningsDataUnavailable { .. }
                | Self::EarningsYearNotFound { .. }
        )
    }
}

impl From<paft::market::MarketError> for FyError {
    fn from(e: paft::market::MarketError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}
