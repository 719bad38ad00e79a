//! Chart ranges and decoding of the upstream chart payload.
//!
//! The payload follows the Yahoo Finance chart layout:
//! `chart.result[0].timestamp` plus `indicators.quote[0]` columns with `null`
//! for missing samples.

use crate::error::{AnalysisError, Result};
use crate::types::PriceSeries;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chart time range requested from the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartRange {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[default]
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "max")]
    Max,
}

impl ChartRange {
    /// Get the range from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1d" => Some(ChartRange::OneDay),
            "5d" => Some(ChartRange::FiveDays),
            "1mo" => Some(ChartRange::OneMonth),
            "3mo" => Some(ChartRange::ThreeMonths),
            "6mo" => Some(ChartRange::SixMonths),
            "1y" => Some(ChartRange::OneYear),
            "2y" => Some(ChartRange::TwoYears),
            "5y" => Some(ChartRange::FiveYears),
            "max" => Some(ChartRange::Max),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartRange::OneDay => "1d",
            ChartRange::FiveDays => "5d",
            ChartRange::OneMonth => "1mo",
            ChartRange::ThreeMonths => "3mo",
            ChartRange::SixMonths => "6mo",
            ChartRange::OneYear => "1y",
            ChartRange::TwoYears => "2y",
            ChartRange::FiveYears => "5y",
            ChartRange::Max => "max",
        }
    }

    /// Bar interval paired with this range: intraday bars for a single day,
    /// daily bars otherwise.
    pub fn default_interval(&self) -> ChartInterval {
        match self {
            ChartRange::OneDay => ChartInterval::FiveMinutes,
            _ => ChartInterval::OneDay,
        }
    }
}

/// Bar interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartInterval {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1wk")]
    OneWeek,
}

impl ChartInterval {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "5m" => Some(ChartInterval::FiveMinutes),
            "1h" => Some(ChartInterval::OneHour),
            "1d" => Some(ChartInterval::OneDay),
            "1wk" => Some(ChartInterval::OneWeek),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartInterval::FiveMinutes => "5m",
            ChartInterval::OneHour => "1h",
            ChartInterval::OneDay => "1d",
            ChartInterval::OneWeek => "1wk",
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Option<ChartMeta>,
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    symbol: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

/// A decoded chart payload.
#[derive(Debug, Clone)]
pub struct DecodedChart {
    /// Symbol reported by the provider, if any.
    pub symbol: Option<String>,
    pub series: PriceSeries,
}

/// Decode a chart payload into a [`PriceSeries`].
///
/// Absent columns become all-missing. A provider error object, an empty
/// result list, missing timestamps or a missing close column are reported as
/// errors; mismatched column lengths fail validation like any other
/// malformed input.
pub fn decode_chart(json: &str) -> Result<DecodedChart> {
    let response: ChartResponse = serde_json::from_str(json)?;

    if let Some(error) = response.chart.error {
        return Err(AnalysisError::Upstream(format!(
            "{}: {}",
            error.code, error.description
        )));
    }

    let result = response
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AnalysisError::NoData("chart result is empty".to_string()))?;

    let symbol = result.meta.and_then(|m| m.symbol);
    let timestamps = result
        .timestamp
        .ok_or_else(|| AnalysisError::NoData("chart has no timestamps".to_string()))?;
    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::NoData("chart has no quote block".to_string()))?;
    let close = quote
        .close
        .ok_or_else(|| AnalysisError::NoData("chart has no close prices".to_string()))?;

    let len = timestamps.len();
    let fill = |column: Option<Vec<Option<f64>>>| column.unwrap_or_else(|| vec![None; len]);

    let series = PriceSeries::new(
        timestamps,
        fill(quote.open),
        fill(quote.high),
        fill(quote.low),
        close,
        fill(quote.volume),
    )?;

    debug!(
        "Decoded chart for {}: {} bars",
        symbol.as_deref().unwrap_or("unknown"),
        series.len()
    );

    Ok(DecodedChart { symbol, series })
}
