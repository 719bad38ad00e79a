pub mod analysis;
pub mod cache;
pub mod fundamentals;
pub mod signals;
pub mod ticker;

pub use analysis::{compute_indicators, latest_values, Analyzer};
pub use cache::{AnalysisKey, Cache};
pub use fundamentals::score_fundamentals;
pub use signals::{aggregate, Rule, SignalInterpreter, Snapshot};
pub use ticker::normalize_ticker;
