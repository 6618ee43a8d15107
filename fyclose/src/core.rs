use std::sync::Arc;
use std::time::Duration;

use fyclose_core::connector::{CalendarProvider, HistoryProvider, IncomeStatementProvider};
use fyclose_core::{Capability, FyConnector, FyError, FycloseConfig, Instrument, PriceRounding};

/// Orchestrator that runs fiscal year-end price lookups against registered providers.
pub struct Fyclose {
    pub(crate) connectors: Vec<Arc<dyn FyConnector>>,
    pub(crate) cfg: FycloseConfig,
}

/// Builder for constructing a `Fyclose` orchestrator with custom configuration.
pub struct FycloseBuilder {
    connectors: Vec<Arc<dyn FyConnector>>,
    cfg: FycloseConfig,
}

impl Default for FycloseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FycloseBuilder {
    /// Create a new builder with the default configuration and no connectors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: FycloseConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Each capability is served by the first registered connector that supports the
    /// instrument's asset kind and advertises it. There is no fallback to later
    /// connectors when that call fails.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn FyConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Calendar days requested on either side of the fiscal year-end.
    #[must_use]
    pub const fn window_pad_days(mut self, days: u32) -> Self {
        self.cfg.window_pad_days = days;
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Rounding applied to the selected close.
    #[must_use]
    pub const fn rounding(mut self, rounding: PriceRounding) -> Self {
        self.cfg.rounding = rounding;
        self
    }

    /// Number of available statement dates carried by `FiscalYearNotFound`.
    #[must_use]
    pub const fn sample_dates(mut self, n: usize) -> Self {
        self.cfg.sample_dates = n;
        self
    }

    /// Calendar days requested on either side of each earnings date.
    #[must_use]
    pub const fn earnings_pad_days(mut self, days: u32) -> Self {
        self.cfg.earnings_pad_days = days;
        self
    }

    /// Replace the whole configuration at once.
    #[must_use]
    pub fn config(mut self, cfg: FycloseConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Fyclose` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via [`with_connector`],
    /// or if either window pad is zero.
    ///
    /// [`with_connector`]: FycloseBuilder::with_connector
    pub fn build(self) -> Result<Fyclose, FyError> {
        if self.connectors.is_empty() {
            return Err(FyError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        if self.cfg.window_pad_days == 0 {
            return Err(FyError::InvalidArg(
                "window_pad_days must be at least 1".to_string(),
            ));
        }
        if self.cfg.earnings_pad_days == 0 {
            return Err(FyError::InvalidArg(
                "earnings_pad_days must be at least 1".to_string(),
            ));
        }
        Ok(Fyclose {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

impl Fyclose {
    /// Start building a new `Fyclose` instance.
    #[must_use]
    pub fn builder() -> FycloseBuilder {
        FycloseBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &FycloseConfig {
        &self.cfg
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose::core::provider_call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                capability = capability,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, FyError>
    where
        Fut: core::future::Future<Output = Result<T, FyError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(FyError::provider_timeout(connector_name, capability)))
    }

    pub(crate) fn income_statement_provider(
        &self,
        inst: &Instrument,
    ) -> Result<(&'static str, &dyn IncomeStatementProvider), FyError> {
        self.connectors
            .iter()
            .filter(|c| c.supports_kind(*inst.kind()))
            .find_map(|c| c.as_income_statement_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| FyError::unsupported(Capability::IncomeStatement.as_str()))
    }

    pub(crate) fn history_provider(
        &self,
        inst: &Instrument,
    ) -> Result<(&'static str, &dyn HistoryProvider), FyError> {
        self.connectors
            .iter()
            .filter(|c| c.supports_kind(*inst.kind()))
            .find_map(|c| c.as_history_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| FyError::unsupported(Capability::History.as_str()))
    }

    pub(crate) fn calendar_provider(
        &self,
        inst: &Instrument,
    ) -> Result<(&'static str, &dyn CalendarProvider), FyError> {
        self.connectors
            .iter()
            .filter(|c| c.supports_kind(*inst.kind()))
            .find_map(|c| c.as_calendar_provider().map(|p| (c.name(), p)))
            .ok_or_else(|| FyError::unsupported(Capability::Calendar.as_str()))
    }
}
