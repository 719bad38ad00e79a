//! Rule-of-thumb scoring of company fundamentals.

use crate::types::{CompanyInfo, FundamentalGrade, FundamentalScores, FundamentalStats};

/// Score valuation, growth, profitability and balance-sheet stability, each
/// 0-100, and grade their mean.
///
/// A metric that is not reported (or not finite) scores 0 for its category.
pub fn score_fundamentals(info: &CompanyInfo) -> FundamentalStats {
    let scores = FundamentalScores {
        value: reported(info.trailing_pe).map_or(0, value_score),
        growth: reported(info.earnings_growth).map_or(0, growth_score),
        profitability: reported(info.return_on_equity).map_or(0, profitability_score),
        stability: reported(info.debt_to_equity).map_or(0, stability_score),
    };
    let total_score = scores.mean();

    FundamentalStats {
        scores,
        total_score,
        grade: FundamentalGrade::from_score(total_score),
    }
}

fn reported(metric: Option<f64>) -> Option<f64> {
    metric.filter(|v| v.is_finite())
}

/// Trailing P/E. A non-positive P/E (losses) is not scored.
fn value_score(pe: f64) -> u8 {
    match pe {
        p if p <= 0.0 => 0,
        p if p < 10.0 => 100,
        p if p < 15.0 => 80,
        p if p < 25.0 => 60,
        _ => 30,
    }
}

/// Earnings growth as a fraction (0.2 = 20%).
fn growth_score(growth: f64) -> u8 {
    match growth {
        g if g > 0.2 => 100,
        g if g > 0.1 => 80,
        g if g > 0.0 => 60,
        _ => 20,
    }
}

/// Return on equity as a fraction.
fn profitability_score(roe: f64) -> u8 {
    match roe {
        r if r > 0.20 => 100,
        r if r > 0.15 => 80,
        _ => 50,
    }
}

/// Debt-to-equity in percent (50 = 0.5x).
fn stability_score(debt_to_equity: f64) -> u8 {
    match debt_to_equity {
        d if d < 50.0 => 100,
        d if d < 100.0 => 80,
        d if d < 200.0 => 50,
        _ => 20,
    }
}
