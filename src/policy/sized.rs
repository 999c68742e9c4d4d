//! Byte-accounted cache backend for a host storage engine.
//!
//! [`SizedCache`] adapts the rank heap to the [`HostCache`] contract: the
//! host owns [`HostNode`]s, this cache decides which of them stay resident,
//! accounts residency in bytes, and holds one host [`handle`](HostNode::handle)
//! per resident node until the node leaves.
//!
//! ## Residency
//!
//! The original design stored a raw pointer slot on each host node (null /
//! banned sentinel / element pointer). Here the cache owns that state in a
//! residency map instead:
//!
//! ```text
//!   states: FxHashMap<(ns, key), Residency>
//!     absent            → node not tracked; promote() admits it
//!     Cached(EntryId)   → resident; promote() registers a hit
//!     Banned            → never admitted again; promote() is a no-op
//! ```
//!
//! ## Tombstones and bulk eviction
//!
//! [`ban`](SizedCache::ban), [`evict`](SizedCache::evict) and
//! [`evict_ns`](SizedCache::evict_ns) clear a resident element's payload in
//! place — releasing the handle and its bytes immediately — instead of
//! paying an O(log n) heap removal per node. The emptied elements ride
//! along as tombstones until a later capacity drain pops and frees them,
//! making namespace invalidation O(n) for any batch size.
//!
//! ## Capacity
//!
//! `set_capacity` never evicts by itself; the next
//! [`promote`](SizedCache::promote) drains until `space <= capacity`.
//! Lazy draining amortizes enforcement across the workload and keeps every
//! host call O(log n) outside the bulk operations.
//!
//! One `parking_lot::Mutex` serializes all operations; handle releases
//! happen under the lock.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::ds::heap::{EntryId, RlogcHeap};
use crate::error::ConfigError;
use crate::timer::Timer;
use crate::traits::{HostCache, HostHandle, HostNode};

/// A resident node plus the handle pinning it.
struct Tracked<N: HostNode> {
    node: Arc<N>,
    handle: Option<N::Handle>,
}

impl<N: HostNode> Tracked<N> {
    /// Releases the pinned handle, exactly once.
    fn release(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.release();
        }
    }
}

#[derive(Clone, Copy)]
enum Residency {
    /// Resident: the node's element in the heap.
    Cached(EntryId),
    /// Permanently excluded from admission.
    Banned,
}

struct SizedInner<N: HostNode> {
    heap: RlogcHeap<Tracked<N>>,
    states: FxHashMap<(u64, u64), Residency>,
    capacity: usize,
    /// Bytes currently resident; tombstoned elements are not counted.
    space: usize,
}

impl<N: HostNode> SizedInner<N> {
    /// Pops lowest-ranked residents until `space` fits `capacity`.
    fn drain(&mut self) {
        while self.space > self.capacity {
            let Some(tracked) = self.heap.pop_min() else {
                return;
            };
            self.space -= tracked.node.size();
            self.states.remove(&state_key(&*tracked.node));
            tracked.release();
        }
    }

    /// Clears a resident node's element to a tombstone, giving back its
    /// bytes and releasing its handle. No-op for banned or untracked nodes.
    fn clear_resident(&mut self, key: (u64, u64)) {
        if let Some(&Residency::Cached(id)) = self.states.get(&key) {
            if let Some(tracked) = self.heap.clear_payload(id) {
                self.space -= tracked.node.size();
                tracked.release();
            }
        }
    }
}

fn state_key<N: HostNode>(node: &N) -> (u64, u64) {
    (node.ns(), node.key())
}

/// Byte-accounted, banning cache backend satisfying [`HostCache`].
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use rlogc::policy::sized::SizedCache;
/// use rlogc::timer::SecondsTimer;
/// use rlogc::traits::HostNode;
///
/// fn wire_up<N: HostNode + 'static>(node: Arc<N>) {
///     let cache: SizedCache<N> = SizedCache::new(0.9f64.ln(), SecondsTimer::new(), 8 << 20);
///     cache.promote(&node);   // admit (or register a hit)
///     cache.ban(&*node);      // invalidate and refuse re-admission
/// }
/// ```
pub struct SizedCache<N: HostNode> {
    inner: Mutex<SizedInner<N>>,
}

impl<N: HostNode> SizedCache<N> {
    /// Creates a backend with the given decay, tick source and byte
    /// capacity.
    ///
    /// # Panics
    ///
    /// Panics if `decay` is positive or non-finite; use
    /// [`try_new`](Self::try_new) to handle that as an error.
    pub fn new(decay: f64, timer: impl Timer + 'static, capacity: usize) -> Self {
        match Self::try_new(decay, timer, capacity) {
            Ok(cache) => cache,
            Err(err) => panic!("{err}"),
        }
    }

    /// Fallible variant of [`new`](Self::new); `decay` must be finite and
    /// `<= 0`.
    pub fn try_new(
        decay: f64,
        timer: impl Timer + 'static,
        capacity: usize,
    ) -> Result<Self, ConfigError> {
        crate::policy::keyed::validate_decay(decay)?;
        Ok(Self {
            inner: Mutex::new(SizedInner {
                heap: RlogcHeap::new(decay, timer),
                states: FxHashMap::default(),
                capacity,
                space: 0,
            }),
        })
    }

    /// Returns the byte capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity
    }

    /// Updates the byte capacity without evicting; the next
    /// [`promote`](Self::promote) drains any excess.
    pub fn set_capacity(&self, capacity: usize) {
        self.inner.lock().capacity = capacity;
    }

    /// Returns the bytes currently resident.
    pub fn total_size(&self) -> usize {
        self.inner.lock().space
    }

    /// Admits `node` or registers a hit on it, then drains to capacity.
    ///
    /// Admission acquires a host handle and accounts `node.size()` bytes.
    /// Banned nodes are ignored.
    pub fn promote(&self, node: &Arc<N>) {
        let mut inner = self.inner.lock();
        match inner.states.get(&state_key(&**node)).copied() {
            Some(Residency::Banned) => {}
            Some(Residency::Cached(id)) => {
                inner.heap.promote(id);
            }
            None => {
                let handle = node.handle();
                let id = inner.heap.insert(Tracked {
                    node: Arc::clone(node),
                    handle: Some(handle),
                });
                inner.states.insert(state_key(&**node), Residency::Cached(id));
                inner.space += node.size();
                inner.drain();
            }
        }
    }

    /// Evicts `node` if resident and permanently bans it from re-admission.
    ///
    /// Its bytes and handle are released immediately; the emptied element
    /// stays in the heap as a tombstone until a later drain.
    pub fn ban(&self, node: &N) {
        let mut inner = self.inner.lock();
        let key = state_key(node);
        inner.clear_resident(key);
        inner.states.insert(key, Residency::Banned);
    }

    /// Evicts `node` if resident; unlike [`ban`](Self::ban) it may be
    /// admitted again later (and clears an existing ban).
    pub fn evict(&self, node: &N) {
        let mut inner = self.inner.lock();
        let key = state_key(node);
        inner.clear_resident(key);
        inner.states.remove(&key);
    }

    /// Evicts every resident node in namespace `ns`, leaving tombstones.
    ///
    /// Bans in `ns` stay in force.
    pub fn evict_ns(&self, ns: u64) {
        let mut inner = self.inner.lock();
        let ids: Vec<EntryId> = inner
            .heap
            .iter()
            .filter(|(_, tracked)| tracked.node.ns() == ns)
            .map(|(id, _)| id)
            .collect();
        for id in ids {
            if let Some(tracked) = inner.heap.clear_payload(id) {
                inner.space -= tracked.node.size();
                inner.states.remove(&state_key(&*tracked.node));
                tracked.release();
            }
        }
    }

    /// Evicts every resident node and resets the heap. Bans stay in force.
    pub fn evict_all(&self) {
        let mut inner = self.inner.lock();
        let drained = inner.heap.drain();
        for tracked in drained {
            inner.space -= tracked.node.size();
            inner.states.remove(&state_key(&*tracked.node));
            tracked.release();
        }
    }
}

impl<N: HostNode + 'static> HostCache<N> for SizedCache<N> {
    fn capacity(&self) -> usize {
        SizedCache::capacity(self)
    }

    fn set_capacity(&self, capacity: usize) {
        SizedCache::set_capacity(self, capacity)
    }

    fn promote(&self, node: &Arc<N>) {
        SizedCache::promote(self, node)
    }

    fn ban(&self, node: &N) {
        SizedCache::ban(self, node)
    }

    fn evict(&self, node: &N) {
        SizedCache::evict(self, node)
    }

    fn evict_ns(&self, ns: u64) {
        SizedCache::evict_ns(self, ns)
    }

    fn evict_all(&self) {
        SizedCache::evict_all(self)
    }

    fn close(&self) {}
}

impl<N: HostNode> fmt::Debug for SizedCache<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SizedCache")
            .field("space", &inner.space)
            .field("capacity", &inner.capacity)
            .field("elements", &inner.heap.len())
            .finish_non_exhaustive()
    }
}
