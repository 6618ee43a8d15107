//! Daily price windows keyed by exchange-local trading date.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, NaiveDate, Utc};
use paft::market::responses::history::{HistoryMeta, HistoryResponse};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One trading day's OHLCV record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Opening price.
    pub open: Decimal,
    /// Session high.
    pub high: Decimal,
    /// Session low.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume, when reported.
    pub volume: Option<u64>,
}

impl PriceBar {
    /// Bar where every price field equals `close`; handy for sparse fixtures.
    #[must_use]
    pub const fn flat(close: Decimal) -> Self {
        Self {
            open: close,
            high: close,
            low: close,
            close,
            volume: None,
        }
    }
}

/// Trading days around a target date, ordered by date.
///
/// Keys are unique calendar dates. When a provider returns two candles that map
/// to the same date, the first one seen is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceWindow {
    bars: BTreeMap<NaiveDate, PriceBar>,
}

impl PriceWindow {
    /// Empty window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a window from a provider history response.
    ///
    /// Candle timestamps are mapped to the exchange-local date using the response
    /// metadata (IANA timezone first, then fixed UTC offset, else UTC).
    #[must_use]
    pub fn from_history(resp: &HistoryResponse) -> Self {
        let meta = resp.meta.as_ref();
        let mut window = Self::new();
        for c in &resp.candles {
            let date = local_date(c.ts, meta);
            let kept = window.insert(
                date,
                PriceBar {
                    open: c.open.amount(),
                    high: c.high.amount(),
                    low: c.low.amount(),
                    close: c.close.amount(),
                    volume: c.volume,
                },
            );
            if !kept {
                #[cfg(feature = "tracing")]
                tracing::debug!(%date, ts = %c.ts, "dropping second candle for trading date");
            }
        }
        window
    }

    /// Drop every bar dated outside `first..=last`. Returns how many were removed.
    ///
    /// Exchange-local dates can fall one day outside a period requested in UTC.
    pub fn retain_between(&mut self, first: NaiveDate, last: NaiveDate) -> usize {
        let before = self.bars.len();
        self.bars.retain(|d, _| (first..=last).contains(d));
        let removed = before - self.bars.len();
        if removed > 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(%first, %last, removed, "dropped bars outside window");
        }
        removed
    }

    /// Insert a bar. Returns `false` and keeps the existing bar if `date` is already present.
    pub fn insert(&mut self, date: NaiveDate, bar: PriceBar) -> bool {
        match self.bars.entry(date) {
            Entry::Vacant(v) => {
                v.insert(bar);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Number of trading days in the window.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the provider returned no usable trading days.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar for `date`, if that date was a trading day in the window.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&PriceBar> {
        self.bars.get(&date)
    }

    /// Whether `date` is a key of the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.bars.contains_key(&date)
    }

    /// Trading days in ascending order.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.bars.keys().copied()
    }

    /// `(date, bar)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &PriceBar)> + '_ {
        self.bars.iter().map(|(d, b)| (*d, b))
    }
}

impl FromIterator<(NaiveDate, PriceBar)> for PriceWindow {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, PriceBar)>>(iter: I) -> Self {
        let mut window = Self::new();
        for (date, bar) in iter {
            window.insert(date, bar);
        }
        window
    }
}

fn local_date(ts: DateTime<Utc>, meta: Option<&HistoryMeta>) -> NaiveDate {
    if let Some(m) = meta {
        if let Some(tz) = m.timezone {
            return ts.with_timezone(&tz).date_naive();
        }
        if let Some(off) = m.utc_offset_seconds {
            return (ts + chrono::Duration::seconds(off)).date_naive();
        }
    }
    ts.date_naive()
}
