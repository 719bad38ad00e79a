//! Simple Moving Average (SMA) and rolling standard deviation.

use crate::error::{check_period, Result};
use crate::types::IndicatorSeries;

/// Simple moving average over a trailing window.
///
/// The first `period - 1` outputs are missing, and so is every output whose
/// window contains a missing sample.
pub fn sma(series: &[Option<f64>], period: usize) -> Result<IndicatorSeries> {
    check_period("sma", period)?;
    Ok(rolling(series, period, |window| {
        window.iter().sum::<f64>() / period as f64
    }))
}

/// Population standard deviation (divides by `period`) over the same
/// trailing window as [`sma`].
pub fn std_dev(series: &[Option<f64>], period: usize) -> Result<IndicatorSeries> {
    check_period("std_dev", period)?;
    Ok(rolling(series, period, |window| {
        let mean = window.iter().sum::<f64>() / period as f64;
        let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
        variance.sqrt()
    }))
}

/// Apply `f` to every complete trailing window of `period` samples.
fn rolling<F>(series: &[Option<f64>], period: usize, f: F) -> IndicatorSeries
where
    F: Fn(&[f64]) -> f64,
{
    let mut out = vec![None; series.len()];
    if period > series.len() {
        return out;
    }
    let mut window = Vec::with_capacity(period);

    for end in period.saturating_sub(1)..series.len() {
        window.clear();
        window.extend(series[end + 1 - period..=end].iter().map_while(|v| *v));
        if window.len() == period {
            out[end] = Some(f(&window));
        }
    }

    out
}
