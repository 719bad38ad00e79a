//! MACD line / signal line crossover rule.

use crate::services::signals::{latest_two, side_of, Rule, Snapshot};
use crate::types::{Signal, SignalFamily};
use std::cmp::Ordering;

/// MACD crossover rule.
///
/// Buy signal: MACD crosses above signal line (golden cross)
/// Sell signal: MACD crosses below signal line (dead cross)
/// No cross: neutral, describing which line is on top
///
/// Needs two defined (line, signal) pairs; emits nothing otherwise. Lines
/// within rounding distance of each other count as touching, so a steady
/// trend does not flicker between crosses.
pub struct MacdCrossRule {
    weight: f64,
}

impl MacdCrossRule {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for MacdCrossRule {
    fn default() -> Self {
        Self::new(2.0)
    }
}

impl Rule for MacdCrossRule {
    fn family(&self) -> SignalFamily {
        SignalFamily::MacdCross
    }

    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal> {
        let macd = snapshot.macd;
        let ([prev_line, prev_signal], [line, signal]) =
            latest_two([&macd.line[..], &macd.signal[..]])?;
        let family = self.family();
        let before = side_of(prev_line, prev_signal);
        let now = side_of(line, signal);

        let result = if before != Ordering::Greater && now == Ordering::Greater {
            Signal::positive(
                family,
                "MACD golden cross: the MACD line crossed above the signal line, upward momentum is building.",
                self.weight,
            )
        } else if before != Ordering::Less && now == Ordering::Less {
            Signal::negative(
                family,
                "MACD dead cross: the MACD line crossed below the signal line, downward momentum is building.",
                -self.weight,
            )
        } else if now == Ordering::Greater {
            Signal::neutral(
                family,
                format!(
                    "MACD above signal line ({:.3} > {:.3}), no new cross.",
                    line, signal
                ),
            )
        } else if now == Ordering::Less {
            Signal::neutral(
                family,
                format!(
                    "MACD below signal line ({:.3} < {:.3}), no new cross.",
                    line, signal
                ),
            )
        } else {
            Signal::neutral(family, format!("MACD on its signal line ({:.3}).", line))
        };

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::rules::fixture::{col, Fixture};
    use crate::types::{MacdResult, SignalKind};

    fn fixture(line: Vec<Option<f64>>, signal: Vec<Option<f64>>) -> Fixture {
        Fixture {
            macd: MacdResult {
                histogram: vec![None; line.len()],
                line,
                signal,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_golden_cross() {
        let f = fixture(col(&[-0.5, 0.3]), col(&[0.0, 0.1]));
        let signal = MacdCrossRule::default().evaluate(&f.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Positive);
        assert_eq!(signal.score, 2.0);
    }

    #[test]
    fn test_golden_cross_from_touch() {
        let f = fixture(col(&[0.1, 0.3]), col(&[0.1, 0.2]));
        let signal = MacdCrossRule::default().evaluate(&f.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Positive);
    }

    #[test]
    fn test_dead_cross() {
        let f = fixture(col(&[0.5, -0.1]), col(&[0.2, 0.0]));
        let signal = MacdCrossRule::default().evaluate(&f.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Negative);
        assert_eq!(signal.score, -2.0);
    }

    #[test]
    fn test_no_cross_is_neutral() {
        let above = fixture(col(&[0.5, 0.6]), col(&[0.2, 0.3]));
        let signal = MacdCrossRule::default().evaluate(&above.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Neutral);
        assert_eq!(signal.score, 0.0);

        let below = fixture(col(&[-0.5, -0.6]), col(&[0.2, 0.3]));
        let signal = MacdCrossRule::default().evaluate(&below.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Neutral);
    }

    #[test]
    fn test_rounding_noise_is_not_a_cross() {
        let f = fixture(
            col(&[2.5900000000000105, 2.5900000000000034]),
            col(&[2.5900000000000096, 2.5900000000000083]),
        );
        let signal = MacdCrossRule::default().evaluate(&f.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Neutral);
        assert_eq!(signal.score, 0.0);
    }

    #[test]
    fn test_single_pair_emits_nothing() {
        let f = fixture(vec![Some(-0.5), Some(0.3)], vec![None, Some(0.1)]);
        assert!(MacdCrossRule::default().evaluate(&f.snapshot()).is_none());
    }
}
