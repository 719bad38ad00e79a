//! Volume Weighted Average Price (VWAP) indicator.

use crate::error::{check_len, Result};
use crate::types::IndicatorSeries;

/// VWAP (Volume Weighted Average Price).
///
/// Cumulative typical price weighted by volume:
/// VWAP = Cumulative(TP * Volume) / Cumulative(Volume), TP = (H + L + C) / 3
///
/// Cumulative over the whole series, never reset. Bars missing any of the
/// four inputs, or with non-positive volume, produce a missing value and do
/// not touch the running sums.
pub fn vwap(
    high: &[Option<f64>],
    low: &[Option<f64>],
    close: &[Option<f64>],
    volume: &[Option<f64>],
) -> Result<IndicatorSeries> {
    check_len("high", close.len(), high.len())?;
    check_len("low", close.len(), low.len())?;
    check_len("volume", close.len(), volume.len())?;

    let mut cum_tp_vol = 0.0;
    let mut cum_vol = 0.0;

    let out = (0..close.len())
        .map(|i| {
            let (h, l, c, v) = (high[i]?, low[i]?, close[i]?, volume[i]?);
            if v <= 0.0 {
                return None;
            }
            let typical_price = (h + l + c) / 3.0;
            cum_tp_vol += typical_price * v;
            cum_vol += v;
            Some(cum_tp_vol / cum_vol)
        })
        .collect();

    Ok(out)
}
