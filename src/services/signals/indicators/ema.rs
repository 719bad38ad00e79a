//! Exponential Moving Average (EMA) indicator.

use crate::error::{check_period, Result};
use crate::types::IndicatorSeries;

/// Exponential moving average.
///
/// Seeded at index `period - 1` with the simple mean of the first `period`
/// samples, then `ema[i] = (x[i] - ema[i-1]) * 2/(period+1) + ema[i-1]`.
///
/// A missing sample yields a missing output and restarts the warm-up: the
/// average re-seeds once `period` consecutive samples are available again.
pub fn ema(series: &[Option<f64>], period: usize) -> Result<IndicatorSeries> {
    check_period("ema", period)?;

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(series.len());
    let mut run = 0usize;
    let mut prev: Option<f64> = None;

    for (i, sample) in series.iter().enumerate() {
        let Some(x) = *sample else {
            run = 0;
            prev = None;
            out.push(None);
            continue;
        };

        run += 1;
        let value = match prev {
            Some(p) => Some((x - p) * multiplier + p),
            // First EMA is SMA
            None if run == period => {
                let seed = series[i + 1 - period..=i].iter().flatten().sum::<f64>();
                Some(seed / period as f64)
            }
            None => None,
        };

        prev = value;
        out.push(value);
    }

    Ok(out)
}
