//! RSI level and RSI midline-cross rules.

use crate::services::signals::{latest, latest_two, side_of, Rule, Snapshot};
use crate::types::{Signal, SignalFamily};
use std::cmp::Ordering;

/// RSI level rule.
///
/// - Above overbought (70): negative
/// - Below oversold (30): positive
/// - Otherwise: neutral
pub struct RsiRule {
    weight: f64,
    overbought: f64,
    oversold: f64,
}

impl RsiRule {
    pub fn new(weight: f64, overbought: f64, oversold: f64) -> Self {
        Self {
            weight,
            overbought,
            oversold,
        }
    }
}

impl Default for RsiRule {
    fn default() -> Self {
        Self::new(1.0, 70.0, 30.0)
    }
}

impl Rule for RsiRule {
    fn family(&self) -> SignalFamily {
        SignalFamily::Rsi
    }

    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal> {
        let [rsi] = latest([snapshot.rsi])?;

        let signal = if rsi > self.overbought {
            Signal::negative(
                self.family(),
                format!(
                    "RSI > {} ({:.1}): overbought, watch for profit taking.",
                    self.overbought, rsi
                ),
                -self.weight,
            )
        } else if rsi < self.oversold {
            Signal::positive(
                self.family(),
                format!(
                    "RSI < {} ({:.1}): oversold, a technical rebound may follow.",
                    self.oversold, rsi
                ),
                self.weight,
            )
        } else {
            Signal::neutral(
                self.family(),
                format!("RSI neutral ({:.1}): inside the neutral zone.", rsi),
            )
        };

        Some(signal)
    }
}

/// RSI crossing the 50 midline between the two latest defined values.
///
/// Emits nothing unless both values exist and a cross happened.
pub struct RsiCrossRule {
    weight: f64,
}

impl RsiCrossRule {
    const MIDLINE: f64 = 50.0;

    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for RsiCrossRule {
    fn default() -> Self {
        Self::new(1.5)
    }
}

impl Rule for RsiCrossRule {
    fn family(&self) -> SignalFamily {
        SignalFamily::RsiCross
    }

    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal> {
        let ([prev], [curr]) = latest_two([snapshot.rsi])?;
        let before = side_of(prev, Self::MIDLINE);
        let now = side_of(curr, Self::MIDLINE);

        if before != Ordering::Greater && now == Ordering::Greater {
            Some(Signal::positive(
                self.family(),
                format!(
                    "RSI crossed above 50 ({:.1} -> {:.1}): momentum turning bullish.",
                    prev, curr
                ),
                self.weight,
            ))
        } else if before != Ordering::Less && now == Ordering::Less {
            Some(Signal::negative(
                self.family(),
                format!(
                    "RSI crossed below 50 ({:.1} -> {:.1}): momentum turning bearish.",
                    prev, curr
                ),
                -self.weight,
            ))
        } else {
            None
        }
    }
}
