//! fyclose-yfinance
//!
//! Connector that implements `FyConnector` on top of the `yfinance-rs` client
//! library. Exposes annual/quarterly income statements (whose period labels are
//! the fiscal period-end dates), the earnings calendar, and OHLCV history.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YfFundamentals, YfHistory};
use async_trait::async_trait;
use fyclose_core::{
    AssetKind, Calendar, FyError, HistoryRequest, HistoryResponse, IncomeStatementRow, Instrument,
    Interval,
    connector::{
        CalendarProvider, ConnectorKey, FyConnector, HistoryProvider, IncomeStatementProvider,
    },
};

#[cfg(not(feature = "test-adapters"))]
type AdapterArc = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = AdapterArc;

#[cfg(feature = "test-adapters")]
type FundamentalsAdapter = Arc<dyn YfFundamentals>;
#[cfg(not(feature = "test-adapters"))]
type FundamentalsAdapter = AdapterArc;

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
    fundamentals: FundamentalsAdapter,
}

impl YfConnector {
    /// Static connector key used for error attribution and logs.
    pub const KEY: ConnectorKey = ConnectorKey::new("fyclose-yfinance");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: FyError, what: &str) -> FyError {
        match e {
            FyError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    FyError::not_found(what.to_string())
                } else {
                    FyError::connector(Self::KEY.as_str(), msg)
                }
            }
            FyError::Other(msg) => FyError::connector(Self::KEY.as_str(), msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the `YfClient` cannot be constructed.
    pub fn try_new_default() -> Result<Self, FyError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_adapter(&a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        let a = RealAdapter::new(client);
        Self::from_adapter(&a)
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// Note: The provided client should enable a cookie store for the yfinance crumb flow.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, FyError> {
        let a = RealAdapter::try_with_reqwest(http)?;
        Ok(Self::from_adapter(&a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            fundamentals: adapter.clone_arc_fundamentals(),
        }
    }

    #[cfg(not(feature = "test-adapters"))]
    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared),
            fundamentals: shared,
        }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose_yfinance::history",
            skip(self, instrument, req),
            fields(symbol = %instrument.symbol()),
        )
    )]
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, FyError> {
        let yf_req = yfinance_rs::core::services::HistoryRequest {
            range: req.range(),
            period: req.period().map(|(s, e)| (s.timestamp(), e.timestamp())),
            interval: req.interval(),
            include_prepost: req.include_prepost(),
            include_actions: req.include_actions(),
            auto_adjust: req.auto_adjust(),
            keepna: req.keepna(),
        };
        let symbol = instrument.symbol_str();
        self.history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))
    }

    fn supported_history_intervals(&self, _kind: AssetKind) -> &'static [Interval] {
        use fyclose_core::Interval as I;
        const YF_INTERVALS: &[I] = &[
            I::I1m,
            I::I2m,
            I::I5m,
            I::I15m,
            I::I30m,
            I::I1h,
            I::I90m,
            I::D1,
            I::D5,
            I::W1,
            I::M1,
            I::M3,
        ];
        YF_INTERVALS
    }
}

#[async_trait]
impl IncomeStatementProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose_yfinance::income_statement",
            skip(self, instrument),
            fields(symbol = %instrument.symbol(), quarterly = quarterly),
        )
    )]
    async fn income_statement(
        &self,
        instrument: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FyError> {
        let symbol = instrument.symbol_str();
        self.fundamentals
            .income_statement(symbol, quarterly)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("income statement for {symbol}")))
    }
}

#[async_trait]
impl CalendarProvider for YfConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose_yfinance::calendar",
            skip(self, instrument),
            fields(symbol = %instrument.symbol()),
        )
    )]
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, FyError> {
        let symbol = instrument.symbol_str();
        self.fundamentals
            .calendar(symbol)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("calendar for {symbol}")))
    }
}

#[async_trait]
impl FyConnector for YfConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        Some(self as &dyn IncomeStatementProvider)
    }

    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        Some(self as &dyn CalendarProvider)
    }

    /// Statements only exist for issuers; crypto and forex pairs have none.
    fn supports_kind(&self, kind: AssetKind) -> bool {
        matches!(kind, AssetKind::Equity | AssetKind::Fund | AssetKind::Index)
    }
}
