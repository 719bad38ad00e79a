use crate::error::{check_period, AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// How a close outside the Bollinger Bands is scored.
///
/// Chart script revisions disagreed on this, so it is a setting rather than a
/// fixed rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BreakoutPolicy {
    /// Above the upper band is overbought (negative), below the lower band is
    /// oversold (positive).
    #[default]
    MeanReversion,
    /// Above the upper band is a bullish breakout (positive), below the lower
    /// band a bearish breakdown (negative).
    Momentum,
}

impl BreakoutPolicy {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mean_reversion" | "reversion" | "contrarian" => Some(Self::MeanReversion),
            "momentum" | "breakout" | "trend" => Some(Self::Momentum),
            _ => None,
        }
    }
}

/// Magnitude of the score each rule contributes. Signs come from the rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalWeights {
    pub vwap: f64,
    pub bollinger: f64,
    pub rsi: f64,
    pub rsi_cross: f64,
    pub macd_cross: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            vwap: 0.5,
            bollinger: 1.5,
            rsi: 1.0,
            rsi_cross: 1.5,
            macd_cross: 2.0,
        }
    }
}

/// Analysis configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// SMA / Bollinger window.
    pub sma_period: usize,
    /// Bollinger band width in standard deviations.
    pub bollinger_multiplier: f64,
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    /// Relative distance to a Fibonacci level that counts as "near" (0.02 = 2%).
    pub fibonacci_tolerance: f64,
    /// Fewer signals than this yields an insufficient-data verdict.
    pub min_signals: usize,
    pub breakout_policy: BreakoutPolicy,
    pub weights: SignalWeights,
    /// TTL for cached reports, in seconds.
    pub cache_ttl_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sma_period: 20,
            bollinger_multiplier: 2.0,
            rsi_period: 14,
            rsi_overbought: 70.0,
            rsi_oversold: 30.0,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            fibonacci_tolerance: 0.02,
            min_signals: 5,
            breakout_policy: BreakoutPolicy::default(),
            weights: SignalWeights::default(),
            cache_ttl_secs: 3600,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse_usize = |key: &str, default: usize| -> usize {
            lookup(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
        };
        let parse_f64 = |key: &str, default: f64| -> f64 {
            lookup(key)
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| v.is_finite())
                .unwrap_or(default)
        };

        let weights = SignalWeights {
            vwap: parse_f64("TICKERLENS_WEIGHT_VWAP", defaults.weights.vwap),
            bollinger: parse_f64("TICKERLENS_WEIGHT_BOLLINGER", defaults.weights.bollinger),
            rsi: parse_f64("TICKERLENS_WEIGHT_RSI", defaults.weights.rsi),
            rsi_cross: parse_f64("TICKERLENS_WEIGHT_RSI_CROSS", defaults.weights.rsi_cross),
            macd_cross: parse_f64("TICKERLENS_WEIGHT_MACD_CROSS", defaults.weights.macd_cross),
        };

        Self {
            sma_period: parse_usize("TICKERLENS_SMA_PERIOD", defaults.sma_period),
            bollinger_multiplier: parse_f64(
                "TICKERLENS_BOLLINGER_MULTIPLIER",
                defaults.bollinger_multiplier,
            ),
            rsi_period: parse_usize("TICKERLENS_RSI_PERIOD", defaults.rsi_period),
            rsi_overbought: parse_f64("TICKERLENS_RSI_OVERBOUGHT", defaults.rsi_overbought),
            rsi_oversold: parse_f64("TICKERLENS_RSI_OVERSOLD", defaults.rsi_oversold),
            macd_fast: parse_usize("TICKERLENS_MACD_FAST", defaults.macd_fast),
            macd_slow: parse_usize("TICKERLENS_MACD_SLOW", defaults.macd_slow),
            macd_signal: parse_usize("TICKERLENS_MACD_SIGNAL", defaults.macd_signal),
            fibonacci_tolerance: parse_f64(
                "TICKERLENS_FIBONACCI_TOLERANCE",
                defaults.fibonacci_tolerance,
            ),
            min_signals: parse_usize("TICKERLENS_MIN_SIGNALS", defaults.min_signals),
            breakout_policy: lookup("TICKERLENS_BREAKOUT_POLICY")
                .and_then(|v| BreakoutPolicy::from_str(v.trim()))
                .unwrap_or(defaults.breakout_policy),
            weights,
            cache_ttl_secs: lookup("TICKERLENS_CACHE_TTL_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.cache_ttl_secs),
        }
    }

    /// Check the configuration contract.
    pub fn validate(&self) -> Result<()> {
        check_period("sma_period", self.sma_period)?;
        check_period("rsi_period", self.rsi_period)?;
        check_period("macd_fast", self.macd_fast)?;
        check_period("macd_slow", self.macd_slow)?;
        check_period("macd_signal", self.macd_signal)?;

        if !self.bollinger_multiplier.is_finite() || self.bollinger_multiplier < 0.0 {
            return Err(AnalysisError::InvalidMultiplier(self.bollinger_multiplier));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(invalid(
                "macd_fast",
                format!(
                    "fast period {} must be shorter than slow period {}",
                    self.macd_fast, self.macd_slow
                ),
            ));
        }
        if !(0.0..=100.0).contains(&self.rsi_oversold)
            || !(0.0..=100.0).contains(&self.rsi_overbought)
            || self.rsi_oversold >= self.rsi_overbought
        {
            return Err(invalid(
                "rsi_thresholds",
                format!(
                    "need 0 <= oversold ({}) < overbought ({}) <= 100",
                    self.rsi_oversold, self.rsi_overbought
                ),
            ));
        }
        if !(self.fibonacci_tolerance > 0.0 && self.fibonacci_tolerance.is_finite()) {
            return Err(invalid(
                "fibonacci_tolerance",
                format!("must be positive, got {}", self.fibonacci_tolerance),
            ));
        }

        let w = &self.weights;
        for (name, value) in [
            ("weights.vwap", w.vwap),
            ("weights.bollinger", w.bollinger),
            ("weights.rsi", w.rsi),
            ("weights.rsi_cross", w.rsi_cross),
            ("weights.macd_cross", w.macd_cross),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(name, format!("must be finite and non-negative, got {}", value)));
            }
        }

        Ok(())
    }

    /// Report cache TTL.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }
}

fn invalid(name: &'static str, reason: String) -> AnalysisError {
    AnalysisError::InvalidParameter { name, reason }
}
