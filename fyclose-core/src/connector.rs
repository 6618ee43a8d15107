use async_trait::async_trait;

use crate::FyError;
pub use fyclose_types::ConnectorKey;
use paft::domain::{AssetKind, Instrument};
use paft::fundamentals::statements::{Calendar, IncomeStatementRow};
use paft::market::requests::history::{HistoryRequest, Interval};
use paft::market::responses::history::HistoryResponse;

/// Focused role trait for connectors that provide OHLCV history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch OHLCV history for the given instrument and request.
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, FyError>;

    /// REQUIRED: exact intervals this connector can natively serve for history.
    ///
    /// The lookup only ever asks for `Interval::D1`; connectors that cannot serve
    /// daily bars are rejected before any request is made.
    fn supported_history_intervals(&self, kind: AssetKind) -> &'static [Interval];
}

/// Focused role trait for connectors that provide income statements.
///
/// The period of each row labels a statement column; annual rows are used as the
/// source of fiscal year-end dates.
#[async_trait]
pub trait IncomeStatementProvider: Send + Sync {
    /// Fetch income statement rows for the given instrument, in provider order.
    async fn income_statement(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FyError>;
}

/// Focused role trait for connectors that provide the corporate calendar.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Fetch earnings and dividend dates for the given instrument.
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, FyError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait FyConnector: Send + Sync {
    /// A stable identifier (e.g., "fyclose-yfinance", "fyclose-mock").
    fn name(&self) -> &'static str;

    /// Whether this connector *claims* to support a given asset kind.
    ///
    /// Default: returns `false` for all kinds. Connectors must explicitly override
    /// this method to declare which asset kinds they support.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        let _ = kind;
        false
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// If implemented, returns a trait object for income statements.
    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        None
    }

    /// If implemented, returns a trait object for the corporate calendar.
    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        None
    }
}
