use serde::Serialize;

/// A derived series aligned index-for-index with its input.
///
/// Warm-up and gap positions are `None`, never zero.
pub type IndicatorSeries = Vec<Option<f64>>;

/// Bollinger Bands derived from one price column.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BollingerBands {
    pub middle: IndicatorSeries,
    pub upper: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// MACD line, signal line and histogram.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MacdResult {
    pub line: IndicatorSeries,
    pub signal: IndicatorSeries,
    pub histogram: IndicatorSeries,
}

/// Every indicator series computed for one analysis request.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorBundle {
    pub sma: IndicatorSeries,
    pub bollinger: BollingerBands,
    pub rsi: IndicatorSeries,
    pub ema_fast: IndicatorSeries,
    pub ema_slow: IndicatorSeries,
    pub macd: MacdResult,
    pub vwap: IndicatorSeries,
}

/// Latest defined value of a series, with its index.
pub fn last_defined(series: &[Option<f64>]) -> Option<(usize, f64)> {
    series
        .iter()
        .enumerate()
        .rev()
        .find_map(|(i, v)| v.map(|v| (i, v)))
}

/// Number of defined values in a series.
pub fn defined_count(series: &[Option<f64>]) -> usize {
    series.iter().filter(|v| v.is_some()).count()
}
