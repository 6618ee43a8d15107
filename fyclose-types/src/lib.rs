//! Fyclose-specific error, configuration, and report types built on top of `paft`.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
/// Unified error type.
pub mod error;
mod reports;

pub use capability::Capability;
pub use config::{FycloseConfig, PriceRounding};
pub use connector::ConnectorKey;
pub use error::FyError;
pub use reports::{EarningsPrice, EarningsReport, LookupRequest, LookupResult};
