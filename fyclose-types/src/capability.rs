use core::fmt;
use serde::{Deserialize, Serialize};

/// Provider capabilities the lookup pipeline depends on.
///
/// Used for `Unsupported` errors, provider timeouts, and tracing fields so the
/// labels stay consistent between connectors and the orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Fundamentals: annual income statement rows (period-end dates).
    IncomeStatement,
    /// Daily OHLCV history around a date.
    History,
    /// Corporate calendar: earnings dates.
    Calendar,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IncomeStatement => "income-statement",
            Self::History => "history",
            Self::Calendar => "calendar",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
