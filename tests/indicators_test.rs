//! Integration tests for the indicator engine

use tickerlens::services::signals::indicators::*;
use tickerlens::types::{defined_count, last_defined};
use tickerlens::AnalysisError;

fn col(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[test]
fn test_rsi_on_flat_series_is_100() {
    let closes = col(&[50.0; 30]);
    let out = rsi(&closes, 14).unwrap();

    assert_eq!(out.len(), 30);
    assert!(out[..14].iter().all(Option::is_none));
    assert!(out[14..].iter().all(|v| *v == Some(100.0)));
}

#[test]
fn test_rsi_on_rising_series_is_100() {
    let closes: Vec<Option<f64>> = (10..=29).map(|v| Some(v as f64)).collect();
    let out = rsi(&closes, 14).unwrap();

    assert_eq!(out.len(), 20);
    assert_eq!(defined_count(&out), 6);
    assert!(out[14..].iter().all(|v| *v == Some(100.0)));
}

#[test]
fn test_bollinger_on_exactly_one_window() {
    let closes: Vec<Option<f64>> = (0..20).map(|i| Some(100.0 + i as f64)).collect();
    let bands = bollinger_bands(&closes, 20, 2.0).unwrap();

    for series in [&bands.middle, &bands.upper, &bands.lower] {
        assert_eq!(series.len(), 20);
        assert_eq!(defined_count(series), 1);
        assert_eq!(last_defined(series).map(|(i, _)| i), Some(19));
    }
    assert_eq!(bands.middle[19], Some(109.5));
}

#[test]
fn test_bollinger_huge_period_is_all_missing() {
    let bands = bollinger_bands(&col(&[1.0, 2.0, 3.0]), usize::MAX, 2.0).unwrap();
    assert_eq!(bands.upper, vec![None; 3]);
    assert_eq!(bands.lower, vec![None; 3]);
}

#[test]
fn test_gap_propagates_through_window() {
    let mut closes = col(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    closes[2] = None;
    let out = sma(&closes, 3).unwrap();
    assert_eq!(out, vec![None, None, None, None, None, Some(5.0)]);
}

#[test]
fn test_macd_alignment() {
    let closes: Vec<Option<f64>> = (0..60).map(|i| Some(100.0 + (i as f64 * 0.3).sin())).collect();
    let result = macd(&closes, 12, 26, 9).unwrap();

    assert_eq!(result.line.len(), 60);
    assert_eq!(result.line.iter().position(Option::is_some), Some(25));
    assert_eq!(result.signal.iter().position(Option::is_some), Some(33));
    for i in 0..60 {
        match (result.line[i], result.signal[i], result.histogram[i]) {
            (Some(l), Some(s), Some(h)) => assert!((h - (l - s)).abs() < 1e-12),
            (_, _, None) => {}
            other => panic!("histogram defined without both lines at {}: {:?}", i, other),
        }
    }
}

#[test]
fn test_macd_rejects_fast_not_below_slow() {
    let closes = col(&[1.0; 40]);
    let err = macd(&closes, 26, 12, 9).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidParameter { .. }));
    assert!(err.is_malformed_input());
}

#[test]
fn test_zero_period_rejected() {
    let closes = col(&[1.0, 2.0]);
    assert!(matches!(
        sma(&closes, 0),
        Err(AnalysisError::InvalidPeriod { value: 0, .. })
    ));
    assert!(ema(&closes, 0).is_err());
    assert!(rsi(&closes, 0).is_err());
    assert!(bollinger_bands(&closes, 0, 2.0).is_err());
}

#[test]
fn test_vwap_skips_zero_volume_bars() {
    let high = col(&[11.0, 12.0, 13.0]);
    let low = col(&[9.0, 10.0, 11.0]);
    let close = col(&[10.0, 11.0, 12.0]);
    let volume = col(&[100.0, 0.0, 100.0]);

    let out = vwap(&high, &low, &close, &volume).unwrap();
    assert_eq!(out[0], Some(10.0));
    assert_eq!(out[1], None);
    assert_eq!(out[2], Some(11.0));
}

#[test]
fn test_vwap_length_mismatch() {
    let err = vwap(&col(&[1.0]), &col(&[1.0]), &col(&[1.0, 2.0]), &col(&[1.0, 2.0])).unwrap_err();
    assert!(matches!(err, AnalysisError::LengthMismatch { field: "high", .. }));
}

#[test]
fn test_indicators_are_deterministic() {
    let closes: Vec<Option<f64>> = (0..80)
        .map(|i| if i % 17 == 5 { None } else { Some(50.0 + (i as f64 * 0.45).cos() * 4.0) })
        .collect();

    assert_eq!(rsi(&closes, 14).unwrap(), rsi(&closes, 14).unwrap());
    assert_eq!(ema(&closes, 9).unwrap(), ema(&closes, 9).unwrap());
    assert_eq!(macd(&closes, 12, 26, 9).unwrap(), macd(&closes, 12, 26, 9).unwrap());
}
