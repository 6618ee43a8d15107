use chrono::NaiveDate;
use fyclose_core::{Capability, FyError, Instrument, first_in_year, statement_period_ends};

use crate::Fyclose;

impl Fyclose {
    /// Resolve the fiscal year-end for `year` from the annual income statement.
    ///
    /// Period-end dates are scanned in provider order and the first one falling in
    /// `year` wins.
    ///
    /// # Errors
    /// - `DataUnavailable` when the provider returns no dated statement rows.
    /// - `FiscalYearNotFound` when no row falls in `year`; carries up to
    ///   `sample_dates` of the dates that were returned.
    /// - Provider errors (`Connector`, `NotFound`, `ProviderTimeout`, `Unsupported`) as-is.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "fyclose::resolve_fiscal_yearend",
            skip(self, inst),
            fields(symbol = %inst.symbol(), year = year),
        )
    )]
    pub async fn resolve_fiscal_yearend(
        &self,
        inst: &Instrument,
        year: i32,
    ) -> Result<NaiveDate, FyError> {
        let (name, provider) = self.income_statement_provider(inst)?;
        let rows = Self::provider_call_with_timeout(
            name,
            Capability::IncomeStatement.as_str(),
            self.cfg.provider_timeout,
            provider.income_statement(inst, false),
        )
        .await?;

        let dates = statement_period_ends(&rows);
        if dates.is_empty() {
            return Err(FyError::DataUnavailable {
                what: inst.symbol_str().to_string(),
            });
        }
        if let Some(found) = first_in_year(&dates, year) {
            return Ok(found);
        }

        let available: Vec<NaiveDate> = dates.into_iter().take(self.cfg.sample_dates).collect();
        #[cfg(feature = "tracing")]
        tracing::warn!(
            symbol = %inst.symbol(),
            year,
            available = ?available,
            "no statement period ends in requested year"
        );
        Err(FyError::FiscalYearNotFound {
            symbol: inst.symbol_str().to_string(),
            year,
            available,
        })
    }
}
