//! Price-window utilities used by connectors and the orchestrator.
//!
//! - `window`: map provider candles to one bar per exchange-local trading date
//! - `nearest`: pick the trading day closest to a target date
/// Nearest-trading-day selection.
pub mod nearest;
/// Date-keyed daily price windows.
pub mod window;
