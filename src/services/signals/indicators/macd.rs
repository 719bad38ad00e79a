//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::ema;
use crate::error::{check_period, AnalysisError, Result};
use crate::types::MacdResult;

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(fast) - EMA(slow)
/// - Signal Line = EMA(signal) of the MACD Line
/// - Histogram = MACD Line - Signal Line
///
/// The signal EMA runs over the compacted line (defined values only) and is
/// scattered back to the positions the line was defined at, so gaps in the
/// line stay gaps in the signal.
pub fn macd(
    series: &[Option<f64>],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdResult> {
    check_period("macd_fast", fast_period)?;
    check_period("macd_slow", slow_period)?;
    check_period("macd_signal", signal_period)?;
    if fast_period >= slow_period {
        return Err(AnalysisError::InvalidParameter {
            name: "macd_fast",
            reason: format!(
                "fast period {} must be shorter than slow period {}",
                fast_period, slow_period
            ),
        });
    }

    let fast = ema(series, fast_period)?;
    let slow = ema(series, slow_period)?;

    let line: Vec<Option<f64>> = fast
        .iter()
        .zip(&slow)
        .map(|(f, s)| Some(f.as_ref()? - s.as_ref()?))
        .collect();

    let compacted: Vec<Option<f64>> = line.iter().filter(|v| v.is_some()).copied().collect();
    let mut raw_signal = ema(&compacted, signal_period)?.into_iter();

    let signal: Vec<Option<f64>> = line
        .iter()
        .map(|v| match v {
            Some(_) => raw_signal.next().flatten(),
            None => None,
        })
        .collect();

    let histogram = line
        .iter()
        .zip(&signal)
        .map(|(l, s)| Some(l.as_ref()? - s.as_ref()?))
        .collect();

    Ok(MacdResult {
        line,
        signal,
        histogram,
    })
}
