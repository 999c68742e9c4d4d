pub mod keyed;
pub mod sized;

pub use keyed::{CacheMetrics, RlogcCache};
pub use sized::SizedCache;
