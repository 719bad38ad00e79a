use crate::types::IndicatorBundle;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Polarity of an interpreted signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Positive,
    Negative,
    Neutral,
}

/// Indicator family a signal was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalFamily {
    Vwap,
    Bollinger,
    Rsi,
    RsiCross,
    MacdCross,
    Fibonacci,
}

impl SignalFamily {
    /// Get display name for this family.
    pub fn name(&self) -> &'static str {
        match self {
            SignalFamily::Vwap => "VWAP",
            SignalFamily::Bollinger => "Bollinger Bands",
            SignalFamily::Rsi => "RSI",
            SignalFamily::RsiCross => "RSI 50 Cross",
            SignalFamily::MacdCross => "MACD Cross",
            SignalFamily::Fibonacci => "Fibonacci Retracement",
        }
    }
}

impl fmt::Display for SignalFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One interpreted signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub family: SignalFamily,
    pub kind: SignalKind,
    /// Human-readable explanation.
    pub message: String,
    /// Signed contribution to the aggregate score.
    pub score: f64,
}

impl Signal {
    pub fn new(family: SignalFamily, kind: SignalKind, message: impl Into<String>, score: f64) -> Self {
        Self {
            family,
            kind,
            message: message.into(),
            score,
        }
    }

    pub fn positive(family: SignalFamily, message: impl Into<String>, score: f64) -> Self {
        Self::new(family, SignalKind::Positive, message, score)
    }

    pub fn negative(family: SignalFamily, message: impl Into<String>, score: f64) -> Self {
        Self::new(family, SignalKind::Negative, message, score)
    }

    pub fn neutral(family: SignalFamily, message: impl Into<String>) -> Self {
        Self::new(family, SignalKind::Neutral, message, 0.0)
    }
}

/// Aggregate recommendation bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictLabel {
    StrongBuy,
    Buy,
    Neutral,
    Sell,
    StrongSell,
    InsufficientData,
}

impl VerdictLabel {
    /// Bucket a summed score. Thresholds are symmetric around zero.
    pub fn from_score(total: f64) -> Self {
        match total {
            s if s >= 3.0 => VerdictLabel::StrongBuy,
            s if s >= 1.0 => VerdictLabel::Buy,
            s if s > -1.0 => VerdictLabel::Neutral,
            s if s > -3.0 => VerdictLabel::Sell,
            _ => VerdictLabel::StrongSell,
        }
    }

    /// Get display label for this verdict.
    pub fn label(&self) -> &'static str {
        match self {
            VerdictLabel::StrongBuy => "Strong Buy",
            VerdictLabel::Buy => "Buy",
            VerdictLabel::Neutral => "Neutral",
            VerdictLabel::Sell => "Sell",
            VerdictLabel::StrongSell => "Strong Sell",
            VerdictLabel::InsufficientData => "Insufficient Data",
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Aggregated result over all signals of one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub label: VerdictLabel,
    pub total_score: f64,
    pub signal_count: usize,
}

/// Latest defined values, as shown in summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vwap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_band: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_band: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd_signal: Option<f64>,
}

/// Everything produced for one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub timestamps: Vec<i64>,
    pub indicators: IndicatorBundle,
    pub latest: LatestValues,
    pub signals: Vec<Signal>,
    pub verdict: Verdict,
}
