//! The rule table, one rule per indicator family.

pub mod bollinger;
pub mod fibonacci;
pub mod macd;
pub mod rsi;
pub mod vwap;

pub use bollinger::BollingerRule;
pub use fibonacci::FibonacciRule;
pub use macd::MacdCrossRule;
pub use rsi::{RsiCrossRule, RsiRule};
pub use vwap::VwapRule;

use super::Rule;
use crate::config::AnalysisConfig;

/// Get the full rule table, in evaluation order.
pub fn all_rules(config: &AnalysisConfig) -> Vec<Box<dyn Rule>> {
    let w = &config.weights;
    vec![
        Box::new(VwapRule::new(w.vwap)),
        Box::new(BollingerRule::new(w.bollinger, config.breakout_policy)),
        Box::new(RsiRule::new(w.rsi, config.rsi_overbought, config.rsi_oversold)),
        Box::new(RsiCrossRule::new(w.rsi_cross)),
        Box::new(MacdCrossRule::new(w.macd_cross)),
        Box::new(FibonacciRule::new(config.fibonacci_tolerance)),
    ]
}

#[cfg(test)]
pub(crate) mod fixture {
    use crate::services::signals::Snapshot;
    use crate::types::{BollingerBands, MacdResult};

    /// Owned series to build a [`Snapshot`] from in rule tests.
    #[derive(Default)]
    pub struct Fixture {
        pub close: Vec<Option<f64>>,
        pub vwap: Vec<Option<f64>>,
        pub bollinger: BollingerBands,
        pub rsi: Vec<Option<f64>>,
        pub macd: MacdResult,
        pub price_range: Option<(f64, f64)>,
    }

    impl Fixture {
        pub fn snapshot(&self) -> Snapshot<'_> {
            Snapshot {
                close: &self.close,
                vwap: &self.vwap,
                bollinger: &self.bollinger,
                rsi: &self.rsi,
                macd: &self.macd,
                price_range: self.price_range,
            }
        }
    }

    pub fn col(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().copied().map(Some).collect()
    }
}
