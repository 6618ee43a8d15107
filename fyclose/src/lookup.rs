use fyclose_core::{
    AssetKind, FyError, Instrument, LookupRequest, LookupResult, select_nearest,
};

use crate::Fyclose;

impl Fyclose {
    /// Run the full lookup: fiscal year-end, price window, nearest trading day, rounding.
    ///
    /// The ticker is treated as an equity symbol and passed to providers unmodified.
    ///
    /// # Errors
    /// Propagates the first failure of any stage; see
    /// [`resolve_fiscal_yearend`](Fyclose::resolve_fiscal_yearend) and
    /// [`fetch_price_window`](Fyclose::fetch_price_window).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose::lookup",
            skip(self, req),
            fields(ticker = %req.ticker(), year = req.year()),
        )
    )]
    pub async fn lookup(&self, req: &LookupRequest) -> Result<LookupResult, FyError> {
        let inst = Instrument::from_symbol(req.ticker(), AssetKind::Equity)
            .map_err(|e| FyError::InvalidArg(format!("ticker {}: {e}", req.ticker())))?;

        let fiscal_yearend = self.resolve_fiscal_yearend(&inst, req.year()).await?;
        let window = self.fetch_price_window(&inst, fiscal_yearend).await?;
        let (price_date, bar) =
            select_nearest(&window, fiscal_yearend).ok_or_else(|| {
                FyError::PriceDataUnavailable {
                    symbol: req.ticker().to_string(),
                    around: fiscal_yearend,
                }
            })?;

        #[cfg(feature = "tracing")]
        tracing::debug!(%fiscal_yearend, %price_date, bars = window.len(), "selected trading day");

        Ok(LookupResult {
            ticker: req.ticker().to_string(),
            fiscal_year: req.year(),
            fiscal_yearend,
            price_date,
            close_price: self.cfg.rounding.apply(bar.close),
        })
    }
}
