use chrono::NaiveDate;
use fyclose_core::{
    AssetKind, Capability, EarningsPrice, EarningsReport, FyError, Instrument, LookupRequest,
    earnings_dates_in_year, select_nearest,
};

use crate::Fyclose;

impl Fyclose {
    /// Earnings announcement dates of `inst` that fall in `year`, ascending.
    ///
    /// # Errors
    /// - `EarningsDataUnavailable` when the calendar carries no earnings dates.
    /// - `EarningsYearNotFound` when none of them falls in `year`.
    /// - Provider errors as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose::resolve_earnings_dates",
            skip(self, inst),
            fields(symbol = %inst.symbol(), year = year),
        )
    )]
    pub async fn resolve_earnings_dates(
        &self,
        inst: &Instrument,
        year: i32,
    ) -> Result<Vec<NaiveDate>, FyError> {
        let (name, provider) = self.calendar_provider(inst)?;
        let calendar = Self::provider_call_with_timeout(
            name,
            Capability::Calendar.as_str(),
            self.cfg.provider_timeout,
            provider.calendar(inst),
        )
        .await?;

        if calendar.earnings_dates.is_empty() {
            return Err(FyError::EarningsDataUnavailable {
                symbol: inst.symbol_str().to_string(),
            });
        }
        let dates = earnings_dates_in_year(&calendar, year);
        if dates.is_empty() {
            return Err(FyError::EarningsYearNotFound {
                symbol: inst.symbol_str().to_string(),
                year,
            });
        }
        Ok(dates)
    }

    /// Close nearest to every earnings date in the requested year.
    ///
    /// Each date gets its own `± earnings_pad_days` window. A date whose window has
    /// no trading days yields an entry without a price instead of failing the run;
    /// any other error aborts the whole report.
    ///
    /// # Errors
    /// See [`resolve_earnings_dates`](Fyclose::resolve_earnings_dates); provider
    /// errors from the history calls are propagated.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose::earnings_prices",
            skip(self, req),
            fields(ticker = %req.ticker(), year = req.year()),
        )
    )]
    pub async fn earnings_prices(&self, req: &LookupRequest) -> Result<EarningsReport, FyError> {
        let inst = Instrument::from_symbol(req.ticker(), AssetKind::Equity)
            .map_err(|e| FyError::InvalidArg(format!("ticker {}: {e}", req.ticker())))?;

        let dates = self.resolve_earnings_dates(&inst, req.year()).await?;
        let mut entries = Vec::with_capacity(dates.len());
        for earnings_date in dates {
            let window = match self
                .fetch_padded_window(&inst, earnings_date, self.cfg.earnings_pad_days)
                .await
            {
                Ok(w) => w,
                Err(FyError::PriceDataUnavailable { .. }) => {
                    #[cfg(feature = "tracing")]
                    tracing::info!(%earnings_date, "no trading days around earnings date");
                    entries.push(EarningsPrice {
                        earnings_date,
                        price_date: None,
                        close_price: None,
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };
            let nearest = select_nearest(&window, earnings_date);
            entries.push(EarningsPrice {
                earnings_date,
                price_date: nearest.map(|(date, _)| date),
                close_price: nearest.map(|(_, bar)| self.cfg.rounding.apply(bar.close)),
            });
        }

        Ok(EarningsReport {
            ticker: req.ticker().to_string(),
            year: req.year(),
            entries,
        })
    }
}
