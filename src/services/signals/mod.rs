//! Trading signals service module.
//!
//! Turns the latest values of each indicator series into typed signals
//! through a fixed rule table, then reduces them to a single verdict.

pub mod indicators;
pub mod rules;

use crate::config::AnalysisConfig;
use std::cmp::Ordering;
use crate::types::{
    BollingerBands, IndicatorBundle, MacdResult, PriceSeries, Signal, SignalFamily, Verdict,
    VerdictLabel,
};

/// Trait for implementing one row of the rule table.
pub trait Rule: Send + Sync {
    /// Family of the signals this rule emits.
    fn family(&self) -> SignalFamily;

    /// Evaluate against the latest values.
    /// Returns None when the inputs this rule needs are not available.
    fn evaluate(&self, snapshot: &Snapshot<'_>) -> Option<Signal>;
}

/// Borrowed view of the series the rules read from.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub close: &'a [Option<f64>],
    pub vwap: &'a [Option<f64>],
    pub bollinger: &'a BollingerBands,
    pub rsi: &'a [Option<f64>],
    pub macd: &'a MacdResult,
    /// Series-wide (high, low).
    pub price_range: Option<(f64, f64)>,
}

impl<'a> Snapshot<'a> {
    pub fn new(series: &'a PriceSeries, indicators: &'a IndicatorBundle) -> Self {
        Self {
            close: series.close(),
            vwap: &indicators.vwap,
            bollinger: &indicators.bollinger,
            rsi: &indicators.rsi,
            macd: &indicators.macd,
            price_range: series.price_range(),
        }
    }
}

/// Rows (newest first) where every column is defined.
fn defined_rows<'a, const N: usize>(
    columns: [&'a [Option<f64>]; N],
) -> impl Iterator<Item = [f64; N]> + 'a {
    let len = columns.iter().map(|c| c.len()).min().unwrap_or(0);
    (0..len).rev().filter_map(move |i| {
        let mut row = [0.0; N];
        for (slot, column) in row.iter_mut().zip(columns.iter()) {
            *slot = column[i]?;
        }
        Some(row)
    })
}

/// Latest row where every column is defined.
pub fn latest<const N: usize>(columns: [&[Option<f64>]; N]) -> Option<[f64; N]> {
    defined_rows(columns).next()
}

/// Latest two rows where every column is defined, as `(previous, current)`.
pub fn latest_two<const N: usize>(columns: [&[Option<f64>]; N]) -> Option<([f64; N], [f64; N])> {
    let mut rows = defined_rows(columns);
    let current = rows.next()?;
    let previous = rows.next()?;
    Some((previous, current))
}

/// Relative tolerance under which two values count as level.
const LEVEL_EPSILON: f64 = 1e-9;

/// Side of `reference` that `value` is on, treating rounding-level
/// differences as `Equal`.
pub fn side_of(value: f64, reference: f64) -> Ordering {
    let scale = value.abs().max(reference.abs()).max(1.0);
    if (value - reference).abs() <= LEVEL_EPSILON * scale {
        Ordering::Equal
    } else if value > reference {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Reduce signals to a verdict.
///
/// Scores are summed and bucketed; fewer than `min_signals` signals override
/// the bucket with `InsufficientData`.
pub fn aggregate(signals: &[Signal], min_signals: usize) -> Verdict {
    let total_score = signals.iter().fold(0.0, |acc, s| acc + s.score);
    let label = if signals.len() < min_signals {
        VerdictLabel::InsufficientData
    } else {
        VerdictLabel::from_score(total_score)
    };

    Verdict {
        label,
        total_score,
        signal_count: signals.len(),
    }
}

/// Runs the rule table and aggregates the result.
pub struct SignalInterpreter {
    rules: Vec<Box<dyn Rule>>,
    min_signals: usize,
}

impl SignalInterpreter {
    pub fn new(rules: Vec<Box<dyn Rule>>, min_signals: usize) -> Self {
        Self { rules, min_signals }
    }

    /// Interpreter with the full rule table configured from `config`.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(rules::all_rules(config), config.min_signals)
    }

    /// Evaluate every rule, in table order.
    pub fn interpret(&self, snapshot: &Snapshot<'_>) -> Vec<Signal> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(snapshot))
            .collect()
    }

    pub fn aggregate(&self, signals: &[Signal]) -> Verdict {
        aggregate(signals, self.min_signals)
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}
