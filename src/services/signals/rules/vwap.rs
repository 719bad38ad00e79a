//! Price position relative to VWAP.

use crate::services::signals::{latest, Rule, Snapshot};
use crate::types::{Signal, SignalFamily};

/// Price above VWAP = buyers in control, below = sellers in control.
pub struct VwapRule {
    weight: f64,
}

impl VwapRule {
    pub fn new(weight: f64) -> Self {
        Self { weight }
    }
}

impl Default for VwapRule {
    fn default() -> Self {
        Self { weight: 0.5 }
    }
}

impl Rule for VwapRule {
    fn family(&self) -> SignalFamily {
        SignalFamily::Vwap
    }

    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal> {
        let [close, vwap] = latest([snapshot.close, snapshot.vwap])?;

        let signal = if close > vwap {
            Signal::positive(
                self.family(),
                format!(
                    "Price above VWAP ({:.2} > {:.2}): short-term buying pressure dominates.",
                    close, vwap
                ),
                self.weight,
            )
        } else if close < vwap {
            Signal::negative(
                self.family(),
                format!(
                    "Price below VWAP ({:.2} < {:.2}): short-term selling pressure dominates.",
                    close, vwap
                ),
                -self.weight,
            )
        } else {
            Signal::neutral(
                self.family(),
                format!("Price at VWAP ({:.2}): no side has the edge.", vwap),
            )
        };

        Some(signal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::rules::fixture::{col, Fixture};
    use crate::types::SignalKind;

    #[test]
    fn test_vwap_above_and_below() {
        let mut fixture = Fixture {
            close: col(&[10.0, 12.0]),
            vwap: col(&[11.0, 11.0]),
            ..Default::default()
        };
        let signal = VwapRule::default().evaluate(&fixture.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Positive);
        assert_eq!(signal.score, 0.5);

        fixture.close = col(&[12.0, 10.0]);
        let signal = VwapRule::default().evaluate(&fixture.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Negative);
        assert_eq!(signal.score, -0.5);
    }

    #[test]
    fn test_vwap_equal_is_neutral() {
        let fixture = Fixture {
            close: col(&[11.0]),
            vwap: col(&[11.0]),
            ..Default::default()
        };
        let signal = VwapRule::default().evaluate(&fixture.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Neutral);
        assert_eq!(signal.score, 0.0);
    }

    #[test]
    fn test_vwap_uses_latest_defined_pair() {
        // The newest bar has no VWAP (zero volume), so the previous pair is used.
        let fixture = Fixture {
            close: col(&[10.0, 9.0]),
            vwap: vec![Some(9.5), None],
            ..Default::default()
        };
        let signal = VwapRule::default().evaluate(&fixture.snapshot()).unwrap();
        assert_eq!(signal.kind, SignalKind::Positive);
    }

    #[test]
    fn test_vwap_missing() {
        let fixture = Fixture {
            close: col(&[10.0]),
            vwap: vec![None],
            ..Default::default()
        };
        assert!(VwapRule::default().evaluate(&fixture.snapshot()).is_none());
    }
}
