//! Ticker symbol normalization.

/// Yahoo suffix for KOSPI listings.
pub const KOSPI_SUFFIX: &str = ".KS";
/// Yahoo suffix for KOSDAQ listings.
pub const KOSDAQ_SUFFIX: &str = ".KQ";

/// Normalize user input into a chart symbol.
///
/// Input is trimmed and upper-cased. A bare six-digit Korean exchange code
/// gets `.KQ` when `is_kosdaq` says it trades on KOSDAQ and `.KS` otherwise
/// (unknown codes default to KOSPI). Returns `None` for blank input.
pub fn normalize_ticker(input: &str, is_kosdaq: impl Fn(&str) -> bool) -> Option<String> {
    let ticker = input.trim().to_uppercase();
    if ticker.is_empty() {
        return None;
    }

    if is_korean_code(&ticker) {
        let suffix = if is_kosdaq(&ticker) {
            KOSDAQ_SUFFIX
        } else {
            KOSPI_SUFFIX
        };
        return Some(format!("{}{}", ticker, suffix));
    }

    Some(ticker)
}

fn is_korean_code(ticker: &str) -> bool {
    ticker.len() == 6 && ticker.bytes().all(|b| b.is_ascii_digit())
}
