pub mod chart;
pub mod fundamentals;
pub mod indicator;
pub mod price;
pub mod signals;

pub use chart::*;
pub use fundamentals::*;
pub use indicator::*;
pub use price::*;
pub use signals::*;
