//! Signal interpretation and verdict tests

use tickerlens::services::signals::indicators::macd;
use tickerlens::services::signals::{SignalInterpreter, Snapshot};
use tickerlens::types::*;
use tickerlens::{AnalysisConfig, Analyzer, BreakoutPolicy};

const DAY: i64 = 86_400;

fn ohlcv(closes: &[f64]) -> PriceSeries {
    let n = closes.len();
    PriceSeries::new(
        (0..n as i64).map(|i| 1_700_000_000 + i * DAY).collect(),
        closes.iter().map(|c| Some(c - 0.2)).collect(),
        closes.iter().map(|c| Some(c + 1.0)).collect(),
        closes.iter().map(|c| Some(c - 1.0)).collect(),
        closes.iter().map(|c| Some(*c)).collect(),
        vec![Some(10_000.0); n],
    )
    .unwrap()
}

fn sine(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 100.0 + 5.0 * (i as f64 * std::f64::consts::TAU / 30.0).sin())
        .collect()
}

fn of_family(signals: &[Signal], family: SignalFamily) -> Vec<&Signal> {
    signals.iter().filter(|s| s.family == family).collect()
}

#[test]
fn test_golden_cross_snapshot() {
    let empty: Vec<Option<f64>> = Vec::new();
    let bands = BollingerBands::default();
    let macd = MacdResult {
        line: vec![Some(-0.4), Some(0.25)],
        signal: vec![Some(0.0), Some(0.1)],
        histogram: vec![Some(-0.4), Some(0.15)],
    };
    let snapshot = Snapshot {
        close: &empty,
        vwap: &empty,
        bollinger: &bands,
        rsi: &empty,
        macd: &macd,
        price_range: None,
    };

    let interpreter = SignalInterpreter::from_config(&AnalysisConfig::default());
    let signals = interpreter.interpret(&snapshot);

    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].family, SignalFamily::MacdCross);
    assert_eq!(signals[0].kind, SignalKind::Positive);
    assert_eq!(signals[0].score, 2.0);
    assert_eq!(
        interpreter.aggregate(&signals).label,
        VerdictLabel::InsufficientData
    );
}

#[test]
fn test_golden_cross_end_to_end() {
    let closes = sine(200);
    let full = macd(&closes.iter().copied().map(Some).collect::<Vec<_>>(), 12, 26, 9).unwrap();
    let cross = (34..closes.len())
        .find(|&i| match (full.line[i - 1], full.signal[i - 1], full.line[i], full.signal[i]) {
            (Some(pl), Some(ps), Some(l), Some(s)) => pl <= ps && l > s,
            _ => false,
        })
        .expect("sine series has a golden cross");

    let report = Analyzer::default().analyze(&ohlcv(&closes[..=cross])).unwrap();
    let macd_signals = of_family(&report.signals, SignalFamily::MacdCross);

    assert_eq!(macd_signals.len(), 1);
    assert_eq!(macd_signals[0].kind, SignalKind::Positive);
    assert_eq!(macd_signals[0].score, 2.0);
}

#[test]
fn test_steady_trend_has_no_macd_cross() {
    let closes: Vec<f64> = (0..80).map(|i| 50.0 + 0.37 * i as f64).collect();
    let analyzer = Analyzer::default();

    for n in 35..=closes.len() {
        let report = analyzer.analyze(&ohlcv(&closes[..n])).unwrap();
        let macd_signals = of_family(&report.signals, SignalFamily::MacdCross);
        assert_eq!(macd_signals.len(), 1, "n = {}", n);
        assert_eq!(macd_signals[0].kind, SignalKind::Neutral, "n = {}", n);
        assert_eq!(macd_signals[0].score, 0.0, "n = {}", n);
    }
}

#[test]
fn test_too_few_signals_is_insufficient() {
    // Closes only: no VWAP, and a steady climb never crosses RSI 50.
    let closes: Vec<f64> = (0..40).map(|i| 50.0 + i as f64 * 0.5).collect();
    let report = Analyzer::default()
        .analyze(&PriceSeries::from_closes(&closes))
        .unwrap();

    assert!(of_family(&report.signals, SignalFamily::Vwap).is_empty());
    assert!(report.signals.len() < 5);
    assert_eq!(report.verdict.label, VerdictLabel::InsufficientData);
    assert_eq!(report.verdict.signal_count, report.signals.len());
}

#[test]
fn test_full_data_reaches_a_verdict() {
    let report = Analyzer::default().analyze(&ohlcv(&sine(120))).unwrap();

    assert!(report.signals.len() >= 5, "{:?}", report.signals);
    assert_ne!(report.verdict.label, VerdictLabel::InsufficientData);

    let total: f64 = report.signals.iter().map(|s| s.score).sum();
    assert!((total - report.verdict.total_score).abs() < 1e-12);
    assert_eq!(report.verdict.label, VerdictLabel::from_score(total));

    for family in [
        SignalFamily::Vwap,
        SignalFamily::Bollinger,
        SignalFamily::Rsi,
        SignalFamily::MacdCross,
        SignalFamily::Fibonacci,
    ] {
        assert_eq!(of_family(&report.signals, family).len(), 1, "{}", family);
    }
    assert!(report.latest.close.is_some());
    assert!(report.latest.vwap.is_some());
    assert!(report.latest.macd_signal.is_some());
}

#[test]
fn test_breakout_policy_flips_bollinger() {
    let mut closes = vec![100.0; 30];
    closes.push(130.0);
    let series = ohlcv(&closes);

    let reversion = Analyzer::default().analyze(&series).unwrap();
    let band = of_family(&reversion.signals, SignalFamily::Bollinger);
    assert_eq!(band[0].kind, SignalKind::Negative);
    assert_eq!(band[0].score, -1.5);

    let momentum = Analyzer::new(AnalysisConfig {
        breakout_policy: BreakoutPolicy::Momentum,
        ..Default::default()
    })
    .unwrap()
    .analyze(&series)
    .unwrap();
    let band = of_family(&momentum.signals, SignalFamily::Bollinger);
    assert_eq!(band[0].kind, SignalKind::Positive);
    assert_eq!(band[0].score, 1.5);
}

#[test]
fn test_report_serializes() {
    let report = Analyzer::default().analyze(&ohlcv(&sine(60))).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["timestamps"].as_array().map(Vec::len), Some(60));
    assert!(json["indicators"]["bollinger"]["upper"].is_array());
    assert!(json["verdict"]["label"].is_string());
}

#[test]
fn test_analysis_is_deterministic() {
    let series = ohlcv(&sine(90));
    let analyzer = Analyzer::default();
    assert_eq!(analyzer.analyze(&series).unwrap(), analyzer.analyze(&series).unwrap());
}
