use thiserror::Error;

/// Analysis error types.
///
/// Only caller contract violations and upstream payload problems surface here.
/// Short series are not errors: they produce missing indicator values and an
/// `insufficient_data` verdict.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid period for {name}: {value} (must be at least 1)")]
    InvalidPeriod { name: &'static str, value: usize },

    #[error("Invalid band multiplier: {0} (must be finite and non-negative)")]
    InvalidMultiplier(f64),

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Length mismatch for {field}: expected {expected}, got {actual}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Timestamps must be non-decreasing (violated at index {index})")]
    UnorderedTimestamps { index: usize },

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("No data: {0}")]
    NoData(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    /// Whether this error is a caller contract violation (as opposed to a
    /// problem with upstream data).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            AnalysisError::InvalidPeriod { .. }
                | AnalysisError::InvalidMultiplier(_)
                | AnalysisError::InvalidParameter { .. }
                | AnalysisError::LengthMismatch { .. }
                | AnalysisError::UnorderedTimestamps { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Reject a zero period.
pub(crate) fn check_period(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(AnalysisError::InvalidPeriod { name, value });
    }
    Ok(())
}

/// Reject an input column whose length differs from the reference column.
pub(crate) fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(AnalysisError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
