//! Technical indicator implementations.
//!
//! Every function maps a column with possible gaps to a series of the same
//! length, with `None` in warm-up and gap positions.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod vwap;

pub use bollinger::bollinger_bands;
pub use ema::ema;
pub use macd::macd;
pub use rsi::rsi;
pub use sma::{sma, std_dev};
pub use vwap::vwap;
