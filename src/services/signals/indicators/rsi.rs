//! Relative Strength Index (RSI) indicator.

use crate::error::{check_period, Result};
use crate::types::IndicatorSeries;

/// RSI (Relative Strength Index) with Wilder smoothing.
///
/// Measures momentum by comparing the magnitude of recent gains to recent losses.
/// Values range from 0-100:
/// - Below 30: Oversold
/// - Above 70: Overbought
///
/// Average gain/loss are seeded with the simple mean of the first `period`
/// price differences, then smoothed as `avg = (avg * (period - 1) + x) / period`.
/// The first value lands at index `period`, so the output starts with `period`
/// missing entries. A zero average loss gives 100, including the flat case.
///
/// A missing price breaks the two differences around it; smoothing restarts
/// and re-seeds after `period` consecutive differences.
pub fn rsi(series: &[Option<f64>], period: usize) -> Result<IndicatorSeries> {
    check_period("rsi", period)?;

    let mut out = vec![None; series.len()];
    let p = period as f64;
    let mut run = 0usize;
    let mut seed_gain = 0.0;
    let mut seed_loss = 0.0;
    let mut averages: Option<(f64, f64)> = None;

    for i in 1..series.len() {
        let (Some(prev), Some(curr)) = (series[i - 1], series[i]) else {
            run = 0;
            seed_gain = 0.0;
            seed_loss = 0.0;
            averages = None;
            continue;
        };

        let change = curr - prev;
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        let (avg_gain, avg_loss) = match averages {
            Some((avg_gain, avg_loss)) => (
                (avg_gain * (p - 1.0) + gain) / p,
                (avg_loss * (p - 1.0) + loss) / p,
            ),
            None => {
                run += 1;
                seed_gain += gain;
                seed_loss += loss;
                if run < period {
                    continue;
                }
                (seed_gain / p, seed_loss / p)
            }
        };

        averages = Some((avg_gain, avg_loss));
        out[i] = Some(rsi_value(avg_gain, avg_loss));
    }

    Ok(out)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
