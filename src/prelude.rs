pub use crate::ds::{EntryId, Rank, RlogcHeap};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::keyed::{CacheMetrics, RlogcCache};
pub use crate::policy::sized::SizedCache;
pub use crate::timer::{IncrementTimer, IntervalTimer, SecondsTimer, Timer};
pub use crate::traits::{HostCache, HostHandle, HostNode};
