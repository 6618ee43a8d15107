//! fyclose-core
//!
//! Core types, traits, and utilities shared across the fyclose workspace.
//!
//! - `types`: re-exported `paft` domain types plus the fyclose DTOs.
//! - `connector`: the `FyConnector` trait and the capability traits lookups need.
//! - `statements`: period-end extraction from income statement rows and earnings
//!   dates from the corporate calendar.
//! - `timeseries`: date-keyed price windows and nearest-trading-day selection.
//!
//! Connector traits are async (`async-trait`) and assume a Tokio 1.x runtime in
//! the crates that drive them.
#![warn(missing_docs)]

/// Connector capability traits and the primary `FyConnector` interface.
pub mod connector;
/// Statement row helpers.
pub mod statements;
/// Price windows and nearest-day selection.
pub mod timeseries;
pub mod types;

pub use connector::FyConnector;
pub use statements::{earnings_dates_in_year, first_in_year, statement_period_ends};
pub use timeseries::nearest::{day_distance, select_nearest};
pub use timeseries::window::{PriceBar, PriceWindow};
pub use types::*;
