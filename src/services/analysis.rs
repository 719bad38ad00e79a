//! End-to-end analysis: price series in, indicator bundle, signals and
//! verdict out.

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::services::signals::indicators::{bollinger_bands, ema, macd, rsi, sma, vwap};
use crate::services::signals::{SignalInterpreter, Snapshot};
use crate::types::{
    defined_count, last_defined, AnalysisReport, IndicatorBundle, LatestValues, PriceSeries,
};
use tracing::{debug, warn};

/// Compute every indicator series for `series` with the periods in `config`.
pub fn compute_indicators(series: &PriceSeries, config: &AnalysisConfig) -> Result<IndicatorBundle> {
    let close = series.close();

    Ok(IndicatorBundle {
        sma: sma(close, config.sma_period)?,
        bollinger: bollinger_bands(close, config.sma_period, config.bollinger_multiplier)?,
        rsi: rsi(close, config.rsi_period)?,
        ema_fast: ema(close, config.macd_fast)?,
        ema_slow: ema(close, config.macd_slow)?,
        macd: macd(close, config.macd_fast, config.macd_slow, config.macd_signal)?,
        vwap: vwap(series.high(), series.low(), close, series.volume())?,
    })
}

/// Latest defined value of every summary series.
pub fn latest_values(series: &PriceSeries, indicators: &IndicatorBundle) -> LatestValues {
    fn last(s: &[Option<f64>]) -> Option<f64> {
        last_defined(s).map(|(_, v)| v)
    }

    LatestValues {
        close: last(series.close()),
        vwap: last(&indicators.vwap),
        upper_band: last(&indicators.bollinger.upper),
        lower_band: last(&indicators.bollinger.lower),
        rsi: last(&indicators.rsi),
        macd: last(&indicators.macd.line),
        macd_signal: last(&indicators.macd.signal),
    }
}

/// Stateless analyzer. Safe to share across threads; every call allocates
/// its own output.
pub struct Analyzer {
    config: AnalysisConfig,
    interpreter: SignalInterpreter,
}

impl Analyzer {
    /// Create an analyzer, rejecting an invalid configuration.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        let interpreter = SignalInterpreter::from_config(&config);
        Ok(Self {
            config,
            interpreter,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Run the full pipeline over `series`.
    pub fn analyze(&self, series: &PriceSeries) -> Result<AnalysisReport> {
        let defined_closes = defined_count(series.close());
        if !series.is_empty() && defined_closes == 0 {
            warn!("Price series has {} bars but no closes", series.len());
        }

        let indicators = compute_indicators(series, &self.config)?;
        let snapshot = Snapshot::new(series, &indicators);
        let signals = self.interpreter.interpret(&snapshot);
        let verdict = self.interpreter.aggregate(&signals);
        let latest = latest_values(series, &indicators);

        debug!(
            "Analyzed {} bars ({} closes): {} signals, score {:+.2} -> {}",
            series.len(),
            defined_closes,
            verdict.signal_count,
            verdict.total_score,
            verdict.label
        );

        Ok(AnalysisReport {
            timestamps: series.timestamps().to_vec(),
            indicators,
            latest,
            signals,
            verdict,
        })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        let config = AnalysisConfig::default();
        let interpreter = SignalInterpreter::from_config(&config);
        Self {
            config,
            interpreter,
        }
    }
}
