//! Nearest-trading-day selection.

use chrono::NaiveDate;

use super::window::{PriceBar, PriceWindow};

/// Absolute distance between two dates in whole calendar days.
#[must_use]
pub fn day_distance(a: NaiveDate, b: NaiveDate) -> u64 {
    (a - b).num_days().unsigned_abs()
}

/// Pick the trading day in `window` closest to `target`.
///
/// Ties go to the first candidate in the window's ascending order, i.e. the
/// earlier of two equidistant days. Returns `None` only for an empty window.
#[must_use]
pub fn select_nearest(window: &PriceWindow, target: NaiveDate) -> Option<(NaiveDate, &PriceBar)> {
    let mut best: Option<(u64, NaiveDate, &PriceBar)> = None;
    for (date, bar) in window.iter() {
        let dist = day_distance(date, target);
        if best.as_ref().is_none_or(|&(b, _, _)| dist < b) {
            best = Some((dist, date, bar));
        }
    }
    best.map(|(_, date, bar)| (date, bar))
}
