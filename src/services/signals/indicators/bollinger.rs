//! Bollinger Bands indicator.

use super::sma::{sma, std_dev};
use crate::error::{AnalysisError, Result};
use crate::types::BollingerBands;

/// Bollinger Bands.
///
/// Consists of:
/// - Middle band: SMA(period)
/// - Upper band: SMA + k * StdDev
/// - Lower band: SMA - k * StdDev
///
/// Upper and lower are missing wherever the middle band or the deviation is.
pub fn bollinger_bands(series: &[Option<f64>], period: usize, k: f64) -> Result<BollingerBands> {
    if !k.is_finite() || k < 0.0 {
        return Err(AnalysisError::InvalidMultiplier(k));
    }

    let middle = sma(series, period)?;
    let deviation = std_dev(series, period)?;

    let band = |sign: f64| -> Vec<Option<f64>> {
        middle
            .iter()
            .zip(&deviation)
            .map(|(m, sd)| Some(m.as_ref()? + sign * sd.as_ref()? * k))
            .collect()
    };
    let upper = band(1.0);
    let lower = band(-1.0);

    Ok(BollingerBands {
        middle,
        upper,
        lower,
    })
}
