#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use fyclose_core::{
    AssetKind, Calendar, FyConnector, FyError, HistoryRequest, HistoryResponse,
    IncomeStatementRow, Instrument, Interval,
    connector::{CalendarProvider, HistoryProvider, IncomeStatementProvider},
};
use tokio::time::{Duration, sleep};

const DEFAULT_HISTORY_INTERVALS: &[Interval] = &[Interval::D1, Interval::W1];

/// In-memory connector driven by per-test closures.
pub struct MockConnector {
    pub name: &'static str,
    pub kind_ok: Option<AssetKind>,
    pub delay_ms: u64,
    pub history_intervals: &'static [Interval],
    pub income_statement_fn: Option<
        Arc<dyn Fn(&Instrument, bool) -> Result<Vec<IncomeStatementRow>, FyError> + Send + Sync>,
    >,
    pub history_fn: Option<
        Arc<dyn Fn(&Instrument, HistoryRequest) -> Result<HistoryResponse, FyError> + Send + Sync>,
    >,
    pub calendar_fn: Option<Arc<dyn Fn(&Instrument) -> Result<Calendar, FyError> + Send + Sync>>,
    pub statement_calls: Arc<AtomicUsize>,
    pub history_calls: Arc<AtomicUsize>,
    pub calendar_calls: Arc<AtomicUsize>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    pub fn statement_calls(&self) -> usize {
        self.statement_calls.load(Ordering::SeqCst)
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }

    pub fn calendar_calls(&self) -> usize {
        self.calendar_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IncomeStatementProvider for MockConnector {
    async fn income_statement(
        &self,
        i: &Instrument,
        quarterly: bool,
    ) -> Result<Vec<IncomeStatementRow>, FyError> {
        self.statement_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.income_statement_fn {
            return (f)(i, quarterly);
        }
        Err(FyError::unsupported("income-statement"))
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        i: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, FyError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.history_fn {
            return (f)(i, req);
        }
        Err(FyError::unsupported("history"))
    }

    fn supported_history_intervals(&self, _kind: AssetKind) -> &'static [Interval] {
        self.history_intervals
    }
}

#[async_trait]
impl CalendarProvider for MockConnector {
    async fn calendar(&self, i: &Instrument) -> Result<Calendar, FyError> {
        self.calendar_calls.fetch_add(1, Ordering::SeqCst);
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        if let Some(f) = &self.calendar_fn {
            return (f)(i);
        }
        Err(FyError::unsupported("calendar"))
    }
}

impl FyConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn supports_kind(&self, kind: AssetKind) -> bool {
        self.kind_ok.as_ref().is_none_or(|k| k == &kind)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        self.history_fn
            .as_ref()
            .map(|_| self as &dyn HistoryProvider)
    }

    fn as_income_statement_provider(&self) -> Option<&dyn IncomeStatementProvider> {
        self.income_statement_fn
            .as_ref()
            .map(|_| self as &dyn IncomeStatementProvider)
    }

    fn as_calendar_provider(&self) -> Option<&dyn CalendarProvider> {
        self.calendar_fn
            .as_ref()
            .map(|_| self as &dyn CalendarProvider)
    }
}

pub struct MockConnectorBuilder {
    name: &'static str,
    kind_ok: Option<AssetKind>,
    delay_ms: u64,
    history_intervals: &'static [Interval],
    income_statement_fn: Option<
        Arc<dyn Fn(&Instrument, bool) -> Result<Vec<IncomeStatementRow>, FyError> + Send + Sync>,
    >,
    history_fn: Option<
        Arc<dyn Fn(&Instrument, HistoryRequest) -> Result<HistoryResponse, FyError> + Send + Sync>,
    >,
    calendar_fn: Option<Arc<dyn Fn(&Instrument) -> Result<Calendar, FyError> + Send + Sync>>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            kind_ok: None,
            delay_ms: 0,
            history_intervals: DEFAULT_HISTORY_INTERVALS,
            income_statement_fn: None,
            history_fn: None,
            calendar_fn: None,
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn supports_kind(mut self, kind: AssetKind) -> Self {
        self.kind_ok = Some(kind);
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = u64::try_from(d.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_history_intervals(mut self, intervals: &'static [Interval]) -> Self {
        self.history_intervals = intervals;
        self
    }

    pub fn with_income_statement_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Instrument, bool) -> Result<Vec<IncomeStatementRow>, FyError>
            + Send
            + Sync
            + 'static,
    {
        self.income_statement_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_income_statement_ok(mut self, rows: Vec<IncomeStatementRow>) -> Self {
        self.income_statement_fn = Some(Arc::new(move |_i, _q| Ok(rows.clone())));
        self
    }

    pub fn with_history_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Instrument, HistoryRequest) -> Result<HistoryResponse, FyError>
            + Send
            + Sync
            + 'static,
    {
        self.history_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_history_ok(mut self, resp: HistoryResponse) -> Self {
        self.history_fn = Some(Arc::new(move |_i, _r| Ok(resp.clone())));
        self
    }

    pub fn with_calendar_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Instrument) -> Result<Calendar, FyError> + Send + Sync + 'static,
    {
        self.calendar_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_calendar_ok(mut self, cal: Calendar) -> Self {
        self.calendar_fn = Some(Arc::new(move |_i| Ok(cal.clone())));
        self
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            kind_ok: self.kind_ok,
            delay_ms: self.delay_ms,
            history_intervals: self.history_intervals,
            income_statement_fn: self.income_statement_fn,
            history_fn: self.history_fn,
            calendar_fn: self.calendar_fn,
            statement_calls: Arc::new(AtomicUsize::new(0)),
            history_calls: Arc::new(AtomicUsize::new(0)),
            calendar_calls: Arc::new(AtomicUsize::new(0)),
        })
    }
}
