use crate::error::{check_len, AnalysisError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV bar. Any price or volume field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar open time, seconds since the Unix epoch.
    pub time: i64,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

impl PriceBar {
    /// Bar open time as a UTC datetime.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// Column-oriented OHLCV series.
///
/// Every column has the length of `timestamps` and timestamps never decrease.
/// Both are checked on construction, so indicator code can index columns
/// without re-checking.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    timestamps: Vec<i64>,
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

impl PriceSeries {
    /// Build a series from columns.
    ///
    /// Non-finite samples are stored as missing so that NaN never doubles as a
    /// "no data" marker.
    pub fn new(
        timestamps: Vec<i64>,
        open: Vec<Option<f64>>,
        high: Vec<Option<f64>>,
        low: Vec<Option<f64>>,
        close: Vec<Option<f64>>,
        volume: Vec<Option<f64>>,
    ) -> Result<Self> {
        let len = timestamps.len();
        check_len("open", len, open.len())?;
        check_len("high", len, high.len())?;
        check_len("low", len, low.len())?;
        check_len("close", len, close.len())?;
        check_len("volume", len, volume.len())?;

        if let Some(index) = timestamps.windows(2).position(|w| w[1] < w[0]) {
            return Err(AnalysisError::UnorderedTimestamps { index: index + 1 });
        }

        Ok(Self {
            timestamps,
            open: sanitize(open),
            high: sanitize(high),
            low: sanitize(low),
            close: sanitize(close),
            volume: sanitize(volume),
        })
    }

    /// Build a close-only series with synthetic one-day spacing.
    pub fn from_closes(closes: &[f64]) -> Self {
        let len = closes.len();
        Self {
            timestamps: (0..len as i64).map(|i| i * 86_400).collect(),
            open: vec![None; len],
            high: vec![None; len],
            low: vec![None; len],
            close: sanitize(closes.iter().copied().map(Some).collect()),
            volume: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn open(&self) -> &[Option<f64>] {
        &self.open
    }

    pub fn high(&self) -> &[Option<f64>] {
        &self.high
    }

    pub fn low(&self) -> &[Option<f64>] {
        &self.low
    }

    pub fn close(&self) -> &[Option<f64>] {
        &self.close
    }

    pub fn volume(&self) -> &[Option<f64>] {
        &self.volume
    }

    /// Row view of bar `index`.
    pub fn bar(&self, index: usize) -> Option<PriceBar> {
        Some(PriceBar {
            time: *self.timestamps.get(index)?,
            open: self.open[index],
            high: self.high[index],
            low: self.low[index],
            close: self.close[index],
            volume: self.volume[index],
        })
    }

    /// Iterate over all bars in order.
    pub fn bars(&self) -> impl Iterator<Item = PriceBar> + '_ {
        (0..self.len()).filter_map(move |i| self.bar(i))
    }

    /// Highest high and lowest low across the series.
    ///
    /// Falls back to closes for bars without high/low. `None` when no price is
    /// available at all.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        let highs = self
            .high
            .iter()
            .zip(&self.close)
            .filter_map(|(h, c)| h.or(*c));
        let lows = self
            .low
            .iter()
            .zip(&self.close)
            .filter_map(|(l, c)| l.or(*c));

        let high = highs.fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))?;
        let low = lows.fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))))?;
        Some((high, low))
    }
}

fn sanitize(values: Vec<Option<f64>>) -> Vec<Option<f64>> {
    values
        .into_iter()
        .map(|v| v.filter(|x| x.is_finite()))
        .collect()
}
