//! Thread-safe keyed cache over the rank heap.
//!
//! [`RlogcCache`] is the classic map-shaped cache: a key index layered over
//! an [`RlogcHeap`], bounded by an entry count, with an eviction callback.
//! Eviction picks the entry whose decayed log-count ranks lowest — an entry
//! with many hits can outlive fresher entries with few, and when all
//! frequencies are equal the policy degenerates to LRU.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────────────────────┐
//!   │  RlogcCache<K, V>                                             │
//!   │                                                               │
//!   │   Mutex ── CacheInner                                         │
//!   │             ├── index: FxHashMap<K, EntryId>                  │
//!   │             ├── heap:  RlogcHeap<(K, Arc<V>)>                 │
//!   │             └── capacity: usize                               │
//!   │                                                               │
//!   │   evict_cb: Fn(&K, &Arc<V>)        counters: CacheCounters    │
//!   └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index and heap always agree: every indexed key maps to a live heap
//! element and vice versa, and `len() <= capacity` holds after every
//! completed operation.
//!
//! ## Locking
//!
//! One `parking_lot::Mutex` serializes every operation for its full
//! duration; there is no lock-free fast path. The eviction callback runs
//! **while the mutex is held** — it must not call back into the same cache
//! instance, and should not take locks that can be held while calling this
//! cache.
//!
//! ## Core Operations
//!
//! | Method | Complexity | Description |
//! |---|---|---|
//! | `insert(k, v)` | O(log n) | add or overwrite, evicting the minimum on overflow |
//! | `get(&k)` | O(log n) | lookup + promote |
//! | `peek(&k)` | O(1) | lookup without promotion or counters |
//! | `contains(&k)` | O(1) | presence check |
//! | `remove(&k)` | O(log n) | detach + callback |
//! | `peek_or_insert(k, v)` | O(log n) | lookup without promotion, insert on miss |
//! | `peek_oldest` / `pop_oldest` | O(1) / O(log n) | current eviction victim |
//! | `resize(n)` | O(k log n) | evict down to the new capacity |

use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::ds::heap::{EntryId, RlogcHeap};
use crate::ds::rank::Rank;
use crate::error::ConfigError;
use crate::timer::Timer;

/// Callback invoked for every eviction and explicit removal.
///
/// Runs under the cache mutex; it must not re-enter the cache. Overwriting
/// an existing key via [`RlogcCache::insert`] does not fire it.
pub type EvictCallback<K, V> = Box<dyn Fn(&K, &Arc<V>) + Send + Sync>;

/// Hit/miss/churn counters using atomics for thread-safe updates.
///
/// All counters use `Ordering::Relaxed`; they are monotonic totals, not a
/// consistent snapshot of a single instant.
#[derive(Debug, Default)]
struct CacheCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    updates: AtomicU64,
    removes: AtomicU64,
    evictions: AtomicU64,
}

impl CacheCounters {
    fn snapshot(&self) -> CacheMetrics {
        CacheMetrics {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            removes: self.removes.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn inc_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_remove(&self) {
        self.removes.fetch_add(1, Ordering::Relaxed);
    }

    fn inc_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }
}

/// Snapshot of a cache's counters.
///
/// `peek` and `contains` deliberately touch no counters, so hit/miss totals
/// reflect only rank-affecting lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheMetrics {
    /// Successful lookups via `get()`.
    pub hits: u64,
    /// Failed lookups via `get()`.
    pub misses: u64,
    /// New key insertions.
    pub inserts: u64,
    /// Overwrites of existing keys.
    pub updates: u64,
    /// Explicit removals via `remove()`.
    pub removes: u64,
    /// Capacity evictions (including `pop_oldest` and `resize`).
    pub evictions: u64,
}

struct CacheInner<K, V> {
    heap: RlogcHeap<(K, Arc<V>)>,
    index: FxHashMap<K, EntryId>,
    capacity: usize,
}

/// Thread-safe fixed-capacity cache ranked by decaying access counts.
///
/// Values are shared as `Arc<V>`; keys must be `Eq + Hash + Clone` (the key
/// lives both in the index and alongside its value in the heap).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use rlogc::policy::keyed::RlogcCache;
/// use rlogc::timer::IncrementTimer;
///
/// let cache: RlogcCache<&str, i32> = RlogcCache::new(0.9f64.ln(), IncrementTimer::new(), 2);
///
/// cache.insert("a", Arc::new(1));
/// cache.insert("b", Arc::new(2));
/// cache.get(&"a");
///
/// // over capacity: "b" (fewer hits, not newer enough) is evicted
/// let evicted = cache.insert("c", Arc::new(3));
/// assert!(evicted);
/// assert!(cache.contains(&"a"));
/// assert!(!cache.contains(&"b"));
/// ```
pub struct RlogcCache<K, V> {
    inner: Mutex<CacheInner<K, V>>,
    evict_cb: EvictCallback<K, V>,
    counters: CacheCounters,
}

impl<K, V> RlogcCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with a no-op eviction callback.
    ///
    /// # Panics
    ///
    /// Panics if `decay` is positive or non-finite; use
    /// [`try_new`](Self::try_new) to handle that as an error.
    pub fn new(decay: f64, timer: impl Timer + 'static, capacity: usize) -> Self {
        Self::with_callback(decay, timer, capacity, |_, _| {})
    }

    /// Creates a cache invoking `evict_cb` on every eviction and removal.
    ///
    /// # Panics
    ///
    /// Panics if `decay` is positive or non-finite.
    pub fn with_callback(
        decay: f64,
        timer: impl Timer + 'static,
        capacity: usize,
        evict_cb: impl Fn(&K, &Arc<V>) + Send + Sync + 'static,
    ) -> Self {
        match Self::try_with_callback(decay, timer, capacity, evict_cb) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible variant of [`new`](Self::new).
    pub fn try_new(
        decay: f64,
        timer: impl Timer + 'static,
        capacity: usize,
    ) -> Result<Self, ConfigError> {
        Self::try_with_callback(decay, timer, capacity, |_, _| {})
    }

    /// Fallible variant of [`with_callback`](Self::with_callback).
    ///
    /// `decay` must be finite and `<= 0` (`ln` of a decay factor in
    /// `(0, 1]`). `capacity = 0` is legal: every insert immediately evicts
    /// the entry it just admitted.
    pub fn try_with_callback(
        decay: f64,
        timer: impl Timer + 'static,
        capacity: usize,
        evict_cb: impl Fn(&K, &Arc<V>) + Send + Sync + 'static,
    ) -> Result<Self, ConfigError> {
        validate_decay(decay)?;
        Ok(Self {
            inner: Mutex::new(CacheInner {
                heap: RlogcHeap::with_capacity(decay, timer, capacity),
                index: FxHashMap::default(),
                capacity,
            }),
            evict_cb: Box::new(evict_cb),
            counters: CacheCounters::default(),
        })
    }

    /// Adds or overwrites an entry; returns `true` if the insert evicted
    /// another entry.
    ///
    /// Overwriting an existing key replaces its value and promotes it; the
    /// displaced value is dropped without invoking the eviction callback
    /// (replacement is not eviction).
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rlogc::policy::keyed::RlogcCache;
    /// use rlogc::timer::IncrementTimer;
    ///
    /// let cache: RlogcCache<&str, i32> = RlogcCache::new(0.9f64.ln(), IncrementTimer::new(), 1);
    /// assert!(!cache.insert("a", Arc::new(1)));
    /// assert!(!cache.insert("a", Arc::new(2))); // overwrite, no eviction
    /// assert_eq!(cache.get(&"a").as_deref(), Some(&2));
    /// ```
    pub fn insert(&self, key: K, value: Arc<V>) -> bool {
        let mut inner = self.inner.lock();

        if let Some(&id) = inner.index.get(&key) {
            if let Some(payload) = inner.heap.payload_mut(id) {
                payload.1 = value;
            }
            inner.heap.promote(id);
            self.counters.inc_update();
            return false;
        }

        let id = inner.heap.insert((key.clone(), value));
        inner.index.insert(key, id);
        self.counters.inc_insert();

        if inner.heap.len() > inner.capacity {
            return self.evict_min(&mut inner);
        }
        false
    }

    /// Looks up an entry, promoting it on a hit.
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        let mut inner = self.inner.lock();
        let Some(&id) = inner.index.get(key) else {
            self.counters.inc_miss();
            return None;
        };
        inner.heap.promote(id);
        self.counters.inc_hit();
        inner.heap.payload(id).map(|(_, value)| Arc::clone(value))
    }

    /// Looks up an entry without promoting it or touching the counters.
    pub fn peek(&self, key: &K) -> Option<Arc<V>> {
        let inner = self.inner.lock();
        let &id = inner.index.get(key)?;
        inner.heap.payload(id).map(|(_, value)| Arc::clone(value))
    }

    /// Returns `true` if `key` is present. No promotion.
    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().index.contains_key(key)
    }

    /// Removes an entry, invoking the eviction callback; returns whether it
    /// was present.
    pub fn remove(&self, key: &K) -> bool {
        let mut inner = self.inner.lock();
        let Some(id) = inner.index.remove(key) else {
            return false;
        };
        if let Some((key, value)) = inner.heap.remove(id) {
            self.counters.inc_remove();
            (self.evict_cb)(&key, &value);
        }
        true
    }

    /// Returns the existing value without promotion, or inserts `value`.
    ///
    /// On a hit the result is `(Some(existing), false)` and `value` is
    /// dropped. On a miss the entry is inserted like
    /// [`insert`](Self::insert) and the result is `(None, evicted)`.
    pub fn peek_or_insert(&self, key: K, value: Arc<V>) -> (Option<Arc<V>>, bool) {
        let mut inner = self.inner.lock();

        if let Some(&id) = inner.index.get(&key) {
            return (
                inner.heap.payload(id).map(|(_, value)| Arc::clone(value)),
                false,
            );
        }

        let id = inner.heap.insert((key.clone(), value));
        inner.index.insert(key, id);
        self.counters.inc_insert();

        if inner.heap.len() > inner.capacity {
            return (None, self.evict_min(&mut inner));
        }
        (None, false)
    }

    /// [`peek_or_insert`](Self::peek_or_insert) dropping the value: returns
    /// `(was_present, evicted)`.
    pub fn contains_or_insert(&self, key: K, value: Arc<V>) -> (bool, bool) {
        let (previous, evicted) = self.peek_or_insert(key, value);
        (previous.is_some(), evicted)
    }

    /// Returns the current eviction victim without removing or promoting
    /// it.
    pub fn peek_oldest(&self) -> Option<(K, Arc<V>)> {
        let inner = self.inner.lock();
        inner
            .heap
            .peek_min()
            .map(|(key, value)| (key.clone(), Arc::clone(value)))
    }

    /// Pops the current eviction victim, invoking the eviction callback.
    pub fn pop_oldest(&self) -> Option<(K, Arc<V>)> {
        let mut inner = self.inner.lock();
        let (key, value) = inner.heap.pop_min()?;
        inner.index.remove(&key);
        self.counters.inc_eviction();
        (self.evict_cb)(&key, &value);
        Some((key, value))
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().heap.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().heap.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity
    }

    /// Updates the capacity, evicting lowest-ranked entries (callback each)
    /// until the cache fits; returns how many were evicted.
    ///
    /// # Example
    ///
    /// ```
    /// use std::sync::Arc;
    /// use rlogc::policy::keyed::RlogcCache;
    /// use rlogc::timer::IncrementTimer;
    ///
    /// let cache: RlogcCache<u32, u32> = RlogcCache::new(0.9f64.ln(), IncrementTimer::new(), 10);
    /// for k in 0..10 {
    ///     cache.insert(k, Arc::new(k));
    /// }
    /// assert_eq!(cache.resize(3), 7);
    /// assert_eq!(cache.len(), 3);
    /// ```
    pub fn resize(&self, capacity: usize) -> usize {
        let mut inner = self.inner.lock();
        inner.capacity = capacity;
        let mut evicted = 0;
        while inner.heap.len() > inner.capacity {
            if !self.evict_min(&mut inner) {
                break;
            }
            evicted += 1;
        }
        evicted
    }

    /// Returns the rank currently attached to `key`, if present.
    ///
    /// Introspection only; does not promote.
    pub fn rank_of(&self, key: &K) -> Option<Rank> {
        let inner = self.inner.lock();
        let &id = inner.index.get(key)?;
        inner.heap.rank(id)
    }

    /// Returns a snapshot of the hit/miss/churn counters.
    pub fn metrics(&self) -> CacheMetrics {
        self.counters.snapshot()
    }

    /// Pops the heap minimum, unindexes it and fires the callback. Returns
    /// `false` only if the heap was already empty.
    fn evict_min(&self, inner: &mut CacheInner<K, V>) -> bool {
        let Some((key, value)) = inner.heap.pop_min() else {
            return false;
        };
        inner.index.remove(&key);
        self.counters.inc_eviction();
        (self.evict_cb)(&key, &value);
        true
    }
}

/// `decay` must be `ln` of a factor in `(0, 1]`: finite and non-positive.
pub(crate) fn validate_decay(decay: f64) -> Result<(), ConfigError> {
    if decay.is_finite() && decay <= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::new(format!(
            "decay must be finite and <= 0 (ln of a decay factor in (0, 1]), got {decay}"
        )))
    }
}

impl<K, V> fmt::Debug for RlogcCache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("RlogcCache")
            .field("len", &inner.heap.len())
            .field("capacity", &inner.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::timer::IncrementTimer;

    const DECAY: f64 = -0.105_360_515_657_826_3; // ln(0.9)

    fn cache(capacity: usize) -> RlogcCache<&'static str, i32> {
        RlogcCache::new(DECAY, IncrementTimer::new(), capacity)
    }

    #[test]
    fn equal_frequencies_degenerate_to_lru() {
        let evicted = Arc::new(StdMutex::new(Vec::new()));
        let log = Arc::clone(&evicted);
        let cache: RlogcCache<&str, i32> =
            RlogcCache::with_callback(DECAY, IncrementTimer::new(), 2, move |k, v| {
                log.lock().unwrap().push((*k, **v));
            });

        cache.insert("a", Arc::new(1));
        cache.insert("b", Arc::new(2));
        assert!(cache.insert("c", Arc::new(3)));

        assert_eq!(evicted.lock().unwrap().as_slice(), &[("a", 1)]);
        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b").as_deref(), Some(&2));
        assert_eq!(cache.get(&"c").as_deref(), Some(&3));
    }

    #[test]
    fn frequency_beats_recency() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1)); // t=1
        for _ in 0..5 {
            cache.get(&"a"); // t=2..6
        }
        cache.insert("b", Arc::new(2)); // t=7
        assert!(cache.insert("c", Arc::new(3))); // t=8, evicts "b"

        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"b"));
        assert!(cache.contains(&"c"));
    }

    #[test]
    fn overwrite_does_not_evict() {
        let fired = Arc::new(AtomicUsize::new(0));
        let count = Arc::clone(&fired);
        let cache: RlogcCache<&str, i32> =
            RlogcCache::with_callback(DECAY, IncrementTimer::new(), 1, move |_, _| {
                count.fetch_add(1, Ordering::SeqCst);
            });

        assert!(!cache.insert("a", Arc::new(1)));
        assert!(!cache.insert("a", Arc::new(2)));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(cache.get(&"a").as_deref(), Some(&2));
        assert_eq!(cache.metrics().updates, 1);
    }

    #[test]
    fn capacity_zero_evicts_every_insert() {
        let evicted = Arc::new(StdMutex::new(Vec::new()));
        let log = Arc::clone(&evicted);
        let cache: RlogcCache<&str, i32> =
            RlogcCache::with_callback(DECAY, IncrementTimer::new(), 0, move |k, v| {
                log.lock().unwrap().push((*k, **v));
            });

        assert!(cache.insert("a", Arc::new(1)));
        assert!(cache.is_empty());
        assert_eq!(evicted.lock().unwrap().as_slice(), &[("a", 1)]);
    }

    #[test]
    fn peek_does_not_promote() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1));
        cache.insert("b", Arc::new(2));

        let before = cache.rank_of(&"a").unwrap();
        assert_eq!(cache.peek(&"a").as_deref(), Some(&1));
        assert_eq!(cache.rank_of(&"a"), Some(before));

        // "a" is still the oldest, so it is the one displaced
        cache.insert("c", Arc::new(3));
        assert!(!cache.contains(&"a"));
        assert!(cache.contains(&"b"));
    }

    #[test]
    fn contains_does_not_promote() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1));
        let before = cache.rank_of(&"a").unwrap();
        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"x"));
        assert_eq!(cache.rank_of(&"a"), Some(before));
    }

    #[test]
    fn get_promotes_and_rescues_the_victim() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1));
        cache.insert("b", Arc::new(2));
        cache.get(&"a"); // "b" becomes the victim

        cache.insert("c", Arc::new(3));
        assert!(cache.contains(&"a"));
        assert!(!cache.contains(&"b"));
    }

    #[test]
    fn remove_fires_callback_and_reports_presence() {
        let evicted = Arc::new(StdMutex::new(Vec::new()));
        let log = Arc::clone(&evicted);
        let cache: RlogcCache<&str, i32> =
            RlogcCache::with_callback(DECAY, IncrementTimer::new(), 4, move |k, v| {
                log.lock().unwrap().push((*k, **v));
            });

        cache.insert("a", Arc::new(1));
        assert!(cache.remove(&"a"));
        assert!(!cache.remove(&"a"));
        assert_eq!(evicted.lock().unwrap().as_slice(), &[("a", 1)]);
        assert!(cache.is_empty());
    }

    #[test]
    fn peek_or_insert_returns_existing_without_promotion() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1));
        let before = cache.rank_of(&"a").unwrap();

        let (previous, evicted) = cache.peek_or_insert("a", Arc::new(99));
        assert_eq!(previous.as_deref(), Some(&1));
        assert!(!evicted);
        assert_eq!(cache.rank_of(&"a"), Some(before));
        assert_eq!(cache.peek(&"a").as_deref(), Some(&1));
    }

    #[test]
    fn peek_or_insert_inserts_and_may_evict() {
        let cache = cache(1);
        let (previous, evicted) = cache.peek_or_insert("a", Arc::new(1));
        assert_eq!(previous, None);
        assert!(!evicted);

        let (previous, evicted) = cache.peek_or_insert("b", Arc::new(2));
        assert_eq!(previous, None);
        assert!(evicted);
        assert!(cache.contains(&"b"));
        assert!(!cache.contains(&"a"));
    }

    #[test]
    fn contains_or_insert_reports_both_flags() {
        let cache = cache(2);
        assert_eq!(cache.contains_or_insert("a", Arc::new(1)), (false, false));
        assert_eq!(cache.contains_or_insert("a", Arc::new(2)), (true, false));
        assert_eq!(cache.contains_or_insert("b", Arc::new(3)), (false, false));
        assert_eq!(cache.contains_or_insert("c", Arc::new(4)), (false, true));
    }

    #[test]
    fn oldest_accessors_follow_the_heap_minimum() {
        let cache = cache(4);
        assert_eq!(cache.peek_oldest(), None);
        assert_eq!(cache.pop_oldest(), None);

        cache.insert("a", Arc::new(1));
        cache.insert("b", Arc::new(2));
        cache.get(&"a");

        let (key, value) = cache.peek_oldest().unwrap();
        assert_eq!((key, *value), ("b", 2));
        assert_eq!(cache.len(), 2);

        let (key, value) = cache.pop_oldest().unwrap();
        assert_eq!((key, *value), ("b", 2));
        assert_eq!(cache.len(), 1);
        assert!(!cache.contains(&"b"));
    }

    #[test]
    fn resize_down_evicts_lowest_ranked_first() {
        let cache: RlogcCache<u32, u32> = RlogcCache::new(DECAY, IncrementTimer::new(), 10);
        for k in 0..10 {
            cache.insert(k, Arc::new(k));
        }
        // keys 7..10 get an extra hit each and must survive
        for k in 7..10 {
            cache.get(&k);
        }

        assert_eq!(cache.resize(3), 7);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.capacity(), 3);
        for k in 7..10 {
            assert!(cache.contains(&k), "promoted key {k} was evicted");
        }
    }

    #[test]
    fn resize_up_evicts_nothing() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1));
        cache.insert("b", Arc::new(2));
        assert_eq!(cache.resize(10), 0);
        assert_eq!(cache.len(), 2);
        assert!(!cache.insert("c", Arc::new(3)));
    }

    #[test]
    fn metrics_count_rank_affecting_operations_only() {
        let cache = cache(2);
        cache.insert("a", Arc::new(1));
        cache.insert("a", Arc::new(2));
        cache.insert("b", Arc::new(3));
        cache.get(&"a");
        cache.get(&"missing");
        cache.peek(&"a");
        cache.contains(&"b");
        cache.insert("c", Arc::new(4)); // evicts
        cache.remove(&"c");

        let metrics = cache.metrics();
        assert_eq!(metrics.inserts, 3);
        assert_eq!(metrics.updates, 1);
        assert_eq!(metrics.hits, 1);
        assert_eq!(metrics.misses, 1);
        assert_eq!(metrics.evictions, 1);
        assert_eq!(metrics.removes, 1);
    }

    #[test]
    fn try_new_rejects_bad_decay() {
        assert!(RlogcCache::<u64, u64>::try_new(0.1, IncrementTimer::new(), 8).is_err());
        assert!(RlogcCache::<u64, u64>::try_new(f64::NAN, IncrementTimer::new(), 8).is_err());
        assert!(RlogcCache::<u64, u64>::try_new(f64::NEG_INFINITY, IncrementTimer::new(), 8).is_err());
        assert!(RlogcCache::<u64, u64>::try_new(0.0, IncrementTimer::new(), 8).is_ok());
        assert!(RlogcCache::<u64, u64>::try_new(DECAY, IncrementTimer::new(), 8).is_ok());
    }

    #[test]
    #[should_panic(expected = "decay")]
    fn new_panics_on_bad_decay() {
        let _ = RlogcCache::<u64, u64>::new(1.0, IncrementTimer::new(), 8);
    }
}
