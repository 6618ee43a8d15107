//! Text rendering of lookup results.

use std::fmt::Write as _;

use fyclose_core::{EarningsReport, LookupResult};

/// Width of the `=` rule framing the report.
pub const RULE_WIDTH: usize = 50;

/// Render the bordered report printed by the CLI.
///
/// ```text
/// ==================================================
/// Ticker:          AAPL
/// Fiscal year-end: 2023-09-30
/// Price date:      2023-09-29
/// Close:           171.21
/// ==================================================
/// ```
#[must_use]
pub fn render_report(result: &LookupResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:<17}{}", "Ticker:", result.ticker);
    let _ = writeln!(out, "{:<17}{}", "Fiscal year-end:", result.fiscal_yearend.format("%Y-%m-%d"));
    let _ = writeln!(out, "{:<17}{}", "Price date:", result.price_date.format("%Y-%m-%d"));
    let _ = writeln!(out, "{:<17}{:.2}", "Close:", result.close_price);
    let _ = writeln!(out, "{rule}");
    out
}

/// Render the earnings-date table: one row per earnings date, `N/A` where no
/// trading day was found.
///
/// ```text
/// ==================================================
/// Ticker:          AAPL
/// Year:            2023
/// --------------------------------------------------
/// Earnings date    Price date       Close
/// 2023-02-02       2023-02-02       150.82
/// 2023-11-02       N/A              N/A
/// ==================================================
/// ```
#[must_use]
pub fn render_earnings_report(report: &EarningsReport) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:<17}{}", "Ticker:", report.ticker);
    let _ = writeln!(out, "{:<17}{}", "Year:", report.year);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{:<17}{:<17}{}", "Earnings date", "Price date", "Close");
    for e in &report.entries {
        let price_date = e
            .price_date
            .map_or_else(|| "N/A".to_string(), |d| d.format("%Y-%m-%d").to_string());
        let close = e
            .close_price
            .map_or_else(|| "N/A".to_string(), |c| format!("{c:.2}"));
        let _ = writeln!(
            out,
            "{:<17}{:<17}{}",
            e.earnings_date.format("%Y-%m-%d").to_string(),
            price_date,
            close
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}
