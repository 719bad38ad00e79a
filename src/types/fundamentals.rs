use serde::{Deserialize, Serialize};
use std::fmt;

/// Company fundamentals as reported by the upstream info endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyInfo {
    #[serde(default)]
    pub long_name: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub long_business_summary: Option<String>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default, rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
    #[serde(default)]
    pub earnings_growth: Option<f64>,
    #[serde(default)]
    pub return_on_equity: Option<f64>,
    #[serde(default)]
    pub debt_to_equity: Option<f64>,
}

/// Per-category scores, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalScores {
    pub value: u8,
    pub growth: u8,
    pub profitability: u8,
    pub stability: u8,
}

impl FundamentalScores {
    /// Mean of the four category scores.
    pub fn mean(&self) -> f64 {
        let sum = self.value as f64
            + self.growth as f64
            + self.profitability as f64
            + self.stability as f64;
        sum / 4.0
    }
}

/// Letter grade for a total fundamental score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FundamentalGrade {
    A,
    B,
    C,
    D,
    F,
}

impl FundamentalGrade {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 80.0 => FundamentalGrade::A,
            s if s >= 70.0 => FundamentalGrade::B,
            s if s >= 60.0 => FundamentalGrade::C,
            s if s >= 50.0 => FundamentalGrade::D,
            _ => FundamentalGrade::F,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FundamentalGrade::A => "Excellent",
            FundamentalGrade::B => "Good",
            FundamentalGrade::C => "Fair",
            FundamentalGrade::D => "Caution",
            FundamentalGrade::F => "Risky",
        }
    }
}

impl fmt::Display for FundamentalGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            FundamentalGrade::A => "A",
            FundamentalGrade::B => "B",
            FundamentalGrade::C => "C",
            FundamentalGrade::D => "D",
            FundamentalGrade::F => "F",
        };
        write!(f, "{} ({})", letter, self.description())
    }
}

/// Scored fundamentals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundamentalStats {
    pub scores: FundamentalScores,
    pub total_score: f64,
    pub grade: FundamentalGrade,
}
