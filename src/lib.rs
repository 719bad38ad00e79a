//! Tickerlens - technical indicator engine and rule-based signal interpreter
//! for stock price charts.

pub mod config;
pub mod error;
pub mod services;
pub mod types;

pub use config::{AnalysisConfig, BreakoutPolicy, SignalWeights};
pub use error::{AnalysisError, Result};
pub use services::Analyzer;
pub use types::*;
