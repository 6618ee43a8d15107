//! Configuration types shared by the orchestrator and the CLI.

use std::time::Duration;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounding applied to the selected closing price before it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum PriceRounding {
    /// Round midpoints away from zero (171.205 -> 171.21).
    #[default]
    HalfUp,
    /// Round midpoints to the nearest even digit (171.205 -> 171.20).
    HalfEven,
}

impl PriceRounding {
    /// Number of fractional digits every reported price carries.
    pub const DECIMALS: u32 = 2;

    /// Round `value` to [`Self::DECIMALS`] places and pad the scale so the value
    /// always prints with exactly two fractional digits.
    #[must_use]
    pub fn apply(self, value: Decimal) -> Decimal {
        let strategy = match self {
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
        };
        let mut out = value.round_dp_with_strategy(Self::DECIMALS, strategy);
        out.rescale(Self::DECIMALS);
        out
    }
}

/// Global configuration for the `Fyclose` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FycloseConfig {
    /// Calendar days requested on each side of the fiscal year-end. The pad bridges
    /// weekends and market holidays around the statement date.
    pub window_pad_days: u32,
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Rounding mode for the reported closing price.
    pub rounding: PriceRounding,
    /// How many available statement dates to carry in a `FiscalYearNotFound` error.
    pub sample_dates: usize,
    /// Calendar days requested on each side of every earnings date.
    pub earnings_pad_days: u32,
}

impl FycloseConfig {
    /// Default pad on either side of the fiscal year-end.
    pub const DEFAULT_WINDOW_PAD_DAYS: u32 = 5;
    /// Default number of sample dates reported when the year is missing.
    pub const DEFAULT_SAMPLE_DATES: usize = 5;
    /// Default pad on either side of an earnings date.
    pub const DEFAULT_EARNINGS_PAD_DAYS: u32 = 3;
}

impl Default for FycloseConfig {
    fn default() -> Self {
        Self {
            window_pad_days: Self::DEFAULT_WINDOW_PAD_DAYS,
            provider_timeout: Duration::from_secs(30),
            rounding: PriceRounding::default(),
            sample_dates: Self::DEFAULT_SAMPLE_DATES,
            earnings_pad_days: Self::DEFAULT_EARNINGS_PAD_DAYS,
        }
    }
}
