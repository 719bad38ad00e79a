//! Close relative to the Bollinger Bands.

use crate::config::BreakoutPolicy;
use crate::services::signals::{latest, Rule, Snapshot};
use crate::types::{Signal, SignalFamily};

/// Scores a close outside the bands according to a [`BreakoutPolicy`].
/// A close inside the bands is neutral.
pub struct BollingerRule {
    weight: f64,
    policy: BreakoutPolicy,
}

impl BollingerRule {
    pub fn new(weight: f64, policy: BreakoutPolicy) -> Self {
        Self { weight, policy }
    }
}

impl Default for BollingerRule {
    fn default() -> Self {
        Self::new(1.5, BreakoutPolicy::default())
    }
}

impl Rule for BollingerRule {
    fn family(&self) -> SignalFamily {
        SignalFamily::Bollinger
    }

    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal> {
        let bands = snapshot.bollinger;
        let [close, upper, lower] = latest([snapshot.close, &bands.upper[..], &bands.lower[..]])?;
        let family = self.family();

        let signal = match self.policy {
            BreakoutPolicy::MeanReversion if close > upper => Signal::negative(
                family,
                format!(
                    "Close above upper Bollinger Band ({:.2} > {:.2}): overbought, short-term pullback likely.",
                    close, upper
                ),
                -self.weight,
            ),
            BreakoutPolicy::MeanReversion if close < lower => Signal::positive(
                family,
                format!(
                    "Close below lower Bollinger Band ({:.2} < {:.2}): oversold, technical rebound possible.",
                    close, lower
                ),
                self.weight,
            ),
            BreakoutPolicy::Momentum if close > upper => Signal::positive(
                family,
                format!(
                    "Breakout above upper Bollinger Band ({:.2} > {:.2}): strong buying pressure.",
                    close, upper
                ),
                self.weight,
            ),
            BreakoutPolicy::Momentum if close < lower => Signal::negative(
                family,
                format!(
                    "Breakdown below lower Bollinger Band ({:.2} < {:.2}): strong selling pressure.",
                    close, lower
                ),
                -self.weight,
            ),
            _ => Signal::neutral(
                family,
                format!(
                    "Close inside Bollinger Bands ({:.2} - {:.2}): no band signal.",
                    lower, upper
                ),
            ),
        };

        Some(signal)
    }
}
