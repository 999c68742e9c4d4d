pub mod heap;
pub mod rank;

pub use heap::{EntryId, RlogcHeap};
pub use rank::Rank;
