//! Fibonacci retracement proximity. Informational only, always neutral.

use crate::services::signals::{latest, Rule, Snapshot};
use crate::types::{Signal, SignalFamily};

/// Retracement ratios measured down from the series high.
pub const FIBONACCI_RATIOS: [f64; 5] = [0.236, 0.382, 0.5, 0.618, 0.786];

/// Retracement price levels for a (high, low) range, in ratio order.
pub fn retracement_levels(high: f64, low: f64) -> [(f64, f64); 5] {
    FIBONACCI_RATIOS.map(|ratio| (ratio, high - (high - low) * ratio))
}

/// Reports the retracement level nearest to the latest close.
pub struct FibonacciRule {
    tolerance: f64,
}

impl FibonacciRule {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

impl Default for FibonacciRule {
    fn default() -> Self {
        Self::new(0.02)
    }
}

impl Rule for FibonacciRule {
    fn family(&self) -> SignalFamily {
        SignalFamily::Fibonacci
    }

    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal> {
        let (high, low) = snapshot.price_range?;
        if high <= low {
            return None;
        }
        let [close] = latest([snapshot.close])?;

        let (ratio, level, distance) = retracement_levels(high, low)
            .into_iter()
            .filter(|(_, level)| *level != 0.0)
            .map(|(ratio, level)| (ratio, level, ((close - level) / level).abs()))
            .min_by(|a, b| a.2.total_cmp(&b.2))?;

        let message = if distance <= self.tolerance {
            format!(
                "Price {:.2} is near the {:.1}% Fibonacci retracement ({:.2}); watch for support or resistance.",
                close,
                ratio * 100.0,
                level
            )
        } else {
            format!(
                "Price {:.2} is between Fibonacci levels; nearest is {:.1}% at {:.2}.",
                close,
                ratio * 100.0,
                level
            )
        };

        Some(Signal::neutral(self.family(), message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::rules::fixture::{col, Fixture};
    use crate::types::SignalKind;

    fn fixture(close: f64, range: Option<(f64, f64)>) -> Fixture {
        Fixture {
            close: col(&[close]),
            price_range: range,
            ..Default::default()
        }
    }

    #[test]
    fn test_levels() {
        let levels = retracement_levels(200.0, 100.0);
        assert_eq!(levels[2], (0.5, 150.0));
        assert!((levels[0].1 - 176.4).abs() < 1e-9);
        assert!((levels[4].1 - 121.4).abs() < 1e-9);
    }

    #[test]
    fn test_near_level() {
        let signal = FibonacciRule::default()
            .evaluate(&fixture(151.0, Some((200.0, 100.0))).snapshot())
            .unwrap();
        assert_eq!(signal.kind, SignalKind::Neutral);
        assert_eq!(signal.score, 0.0);
        assert!(signal.message.contains("near the 50.0%"), "{}", signal.message);
    }

    #[test]
    fn test_between_levels() {
        let signal = FibonacciRule::default()
            .evaluate(&fixture(195.0, Some((200.0, 100.0))).snapshot())
            .unwrap();
        assert_eq!(signal.kind, SignalKind::Neutral);
        assert!(signal.message.contains("between"), "{}", signal.message);
    }

    #[test]
    fn test_flat_or_missing_range() {
        let rule = FibonacciRule::default();
        assert!(rule.evaluate(&fixture(100.0, Some((100.0, 100.0))).snapshot()).is_none());
        assert!(rule.evaluate(&fixture(100.0, None).snapshot()).is_none());
    }
}
