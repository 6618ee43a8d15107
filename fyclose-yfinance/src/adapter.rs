#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use fyclose_core::FyError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, FyError>;
}

/// Fundamentals abstraction for income statements and the earnings calendar.
#[async_trait]
pub trait YfFundamentals: Send + Sync {
    /// Fetch income statement rows, annual when `quarterly` is false.
    async fn income_statement(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FyError>;

    /// Fetch the earnings/dividend calendar. Default returns `unsupported`.
    async fn calendar(&self, _symbol: &str) -> Result<yf::fundamentals::Calendar, FyError> {
        Err(FyError::unsupported("calendar"))
    }
}

/// Real adapter backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` with a cookie-enabled HTTP client and a browser user agent.
    ///
    /// # Errors
    /// Returns `FyError::Other` if either the HTTP client or the `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, FyError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| FyError::Other(format!("http client: {e}")))?;
        Self::try_with_reqwest(http)
    }

    /// Build a `YfClient` on top of a caller-supplied `reqwest::Client`.
    ///
    /// # Errors
    /// Returns `FyError::Other` if the `YfClient` cannot be built.
    pub fn try_with_reqwest(http: reqwest::Client) -> Result<Self, FyError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FyError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> FyError {
    match e {
        yf::YfError::NotFound { .. } => FyError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            FyError::connector("fyclose-yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => FyError::connector(
            "fyclose-yfinance",
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            FyError::connector("fyclose-yfinance", format!("status {status}: {context}"))
        }
        other => FyError::connector("fyclose-yfinance", other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, FyError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[async_trait]
impl YfFundamentals for RealAdapter {
    async fn income_statement(
        &self,
        symbol: &str,
        quarterly: bool,
    ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FyError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        fb.income_statement(quarterly, None)
            .await
            .map_err(|e| map_yf_err(&e, &format!("income statement for {symbol}")))
    }

    async fn calendar(&self, symbol: &str) -> Result<yf::fundamentals::Calendar, FyError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        fb.calendar()
            .await
            .map_err(|e| map_yf_err(&e, &format!("calendar for {symbol}")))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, yf::core::services::HistoryRequest) -> Result<yf::HistoryResponse, FyError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, FyError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, FyError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfFundamentals {
    /// Build a `YfFundamentals` from an income-statement closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfFundamentals>
    where
        F: Send
            + Sync
            + 'static
            + Fn(String, bool) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FyError>,
    {
        struct FnFund<F>(F);
        #[async_trait]
        impl<F> YfFundamentals for FnFund<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, bool) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FyError>,
        {
            async fn income_statement(
                &self,
                symbol: &str,
                quarterly: bool,
            ) -> Result<Vec<yf::fundamentals::IncomeStatementRow>, FyError> {
                (self.0)(symbol.to_string(), quarterly)
            }
        }
        Arc::new(FnFund(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
///
/// Every method defaults to an adapter that reports `unsupported`, so tests only
/// override the side they exercise.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YfHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        <dyn YfHistory>::from_fn(|_, _| Err(FyError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YfFundamentals>`.
    fn clone_arc_fundamentals(&self) -> Arc<dyn YfFundamentals> {
        <dyn YfFundamentals>::from_fn(|_, _| Err(FyError::unsupported("income-statement")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YfHistory> {
        Arc::new(self.clone()) as Arc<dyn YfHistory>
    }
    fn clone_arc_fundamentals(&self) -> Arc<dyn YfFundamentals> {
        Arc::new(self.clone()) as Arc<dyn YfFundamentals>
    }
}
