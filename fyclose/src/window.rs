use chrono::{Days, NaiveDate, NaiveTime};
use fyclose_core::{
    Capability, FyError, HistoryRequest, Instrument, Interval, PriceWindow,
};

use crate::Fyclose;

impl Fyclose {
    /// Fetch daily bars for `center ± window_pad_days`, keyed by exchange-local date.
    ///
    /// The request period ends at midnight UTC the day after the last padded day,
    /// since providers treat the period end as exclusive. Bars whose exchange-local
    /// date falls outside the padded range are dropped.
    ///
    /// # Errors
    /// - `Unsupported` if no connector serves daily history for the instrument.
    /// - `PriceDataUnavailable` if the window comes back empty.
    /// - Provider errors as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose::fetch_price_window",
            skip(self, inst),
            fields(symbol = %inst.symbol(), center = %center, pad = self.cfg.window_pad_days),
        )
    )]
    pub async fn fetch_price_window(
        &self,
        inst: &Instrument,
        center: NaiveDate,
    ) -> Result<PriceWindow, FyError> {
        self.fetch_padded_window(inst, center, self.cfg.window_pad_days)
            .await
    }

    pub(crate) async fn fetch_padded_window(
        &self,
        inst: &Instrument,
        center: NaiveDate,
        pad_days: u32,
    ) -> Result<PriceWindow, FyError> {
        let (name, provider) = self.history_provider(inst)?;
        if !provider
            .supported_history_intervals(*inst.kind())
            .contains(&Interval::D1)
        {
            return Err(FyError::unsupported("history/1d"));
        }

        let pad = Days::new(u64::from(pad_days));
        let first = center
            .checked_sub_days(pad)
            .ok_or_else(|| FyError::InvalidArg(format!("window start before {center}")))?;
        let last = center
            .checked_add_days(pad)
            .ok_or_else(|| FyError::InvalidArg(format!("window end after {center}")))?;
        let end_exclusive = last
            .succ_opt()
            .ok_or_else(|| FyError::InvalidArg(format!("window end after {center}")))?;
        let req = HistoryRequest::try_from_period(
            first.and_time(NaiveTime::MIN).and_utc(),
            end_exclusive.and_time(NaiveTime::MIN).and_utc(),
            Interval::D1,
        )?;

        let resp = Self::provider_call_with_timeout(
            name,
            Capability::History.as_str(),
            self.cfg.provider_timeout,
            provider.history(inst, req),
        )
        .await?;

        let mut window = PriceWindow::from_history(&resp);
        window.retain_between(first, last);
        if window.is_empty() {
            return Err(FyError::PriceDataUnavailable {
                symbol: inst.symbol_str().to_string(),
                around: center,
            });
        }
        Ok(window)
    }
}
