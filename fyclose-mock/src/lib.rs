//! Deterministic fixture connector.
//!
//! Symbols with fixtures: `AAPL`, `MSFT`, `KO`. A few symbols trigger edge cases:
//! `EMPTY` (no statements or earnings dates), `NOPRICE` (statements and earnings
//! dates but no bars), `FAIL` (connector error on every call) and `TIMEOUT`
//! (history sleeps past a one-second timeout).
use std::time::Duration;

use async_trait::async_trait;
use fyclose_core::connector::{
    CalendarProvider, FyConnector, HistoryProvider, IncomeStatementProvider,
};
use fyclose_core::{
    AssetKind, Calendar, FyError, HistoryRequest, HistoryResponse, IncomeStatementRow, Instrument,
    Interval,
};

mod fixtures;

/// Mock connector for CI-safe runs. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Connector name reported in errors.
    pub const NAME: &'static str = "fyclose-mock";

    /// Delay applied to `TIMEOUT` history calls.
    pub const TIMEOUT_DELAY: Duration = Duration::from_secs(2);

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> FyError {
        FyError::not_found(what.to_string())
    }

    async fn maybe_fail_or_delay(symbol: &str, capability: &'static str) -> Result<(), FyError> {
        match symbol {
            "FAIL" => Err(FyError::connector(
                Self::NAME,
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" if capability == "history" => {
                tokio::time::sleep(Self::TIMEOUT_DELAY).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl FyConnector for MockConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }
    fn supports_kind(&self, _kind: AssetKind) -> bool {
        true
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
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, FyError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_delay(s, "history").await?;
        if s == "TIMEOUT" {
            return Ok(HistoryResponse {
                candles: vec![],
                actions: vec![],
                adjusted: false,
                meta: None,
            });
        }
        fixtures::history::by_symbol(s, req.period())?
            .ok_or_else(|| Self::not_found(&format!("history for {s}")))
    }

    fn supported_history_intervals(&self, _kind: AssetKind) -> &'static [Interval] {
        const ONLY_D1: &[Interval] = &[Interval::D1];
        ONLY_D1
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(
        &self,
        instrument: &Instrument,
        _quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FyError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_delay(s, "income-statement").await?;
        fixtures::statements::by_symbol(s)?
            .ok_or_else(|| Self::not_found(&format!("income statement for {s}")))
    }
}

#[async_trait]
impl CalendarProvider for MockConnector {
    async fn calendar(&self, instrument: &Instrument) -> Result<Calendar, FyError> {
        let s = instrument.symbol_str();
        Self::maybe_fail_or_delay(s, "calendar").await?;
        fixtures::calendar::by_symbol(s)?.ok_or_else(|| Self::not_found(&format!("calendar for {s}")))
    }
}
