//! Re-export of foundational types from `paft` and `fyclose-types`.
// Consolidated re-exports so downstream crates can depend on `fyclose-core` only

pub use fyclose_types::{
    Capability, ConnectorKey, EarningsPrice, EarningsReport, FyError, FycloseConfig,
    LookupRequest, LookupResult, PriceRounding,
};

pub use paft::domain::{AssetKind, Instrument, Period, Symbol};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use rust_decimal::Decimal;

pub use paft::fundamentals::statements::{Calendar, IncomeStatementRow};

pub use paft::market::requests::history::{HistoryRequest, Interval, Range};
pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
