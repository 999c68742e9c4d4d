//! Host cache contract.
//!
//! [`SizedCache`](crate::policy::sized::SizedCache) does not own the data it
//! accounts for. A host storage engine owns nodes and hands out
//! reference-counted handles; this cache decides which nodes stay resident.
//! These traits pin down exactly what the cache needs from the host:
//!
//! ```text
//!   HostNode      identity (ns, key), a byte size, and a way to acquire
//!                 a handle pinning the node
//!   HostHandle    a pin on a host node, released exactly once when the
//!                 entry leaves the cache
//!   HostCache     the operations the host drives the cache through
//! ```
//!
//! ## Handle discipline
//!
//! The cache holds at most one handle per resident node and releases it
//! exactly once — on capacity eviction, [`ban`](HostCache::ban),
//! [`evict`](HostCache::evict), [`evict_ns`](HostCache::evict_ns) or
//! [`evict_all`](HostCache::evict_all). [`HostHandle::release`] consumes
//! the handle, so a double release is a compile error rather than a
//! runtime bug.

use std::sync::Arc;

/// A host-owned cache node: stable identity, a byte size, and a handle
/// factory.
///
/// `ns` partitions nodes into namespaces (one per table file, say) so the
/// host can invalidate a whole namespace at once; `key` must be unique
/// within a namespace. `size` is the node's accounting weight in bytes and
/// must not change while the node is resident.
pub trait HostNode: Send + Sync {
    /// The handle type pinning this node while resident.
    type Handle: HostHandle + Send;

    /// Returns the node's namespace id.
    fn ns(&self) -> u64;

    /// Returns the node's key within its namespace.
    fn key(&self) -> u64;

    /// Returns the node's accounting size in bytes.
    fn size(&self) -> usize;

    /// Acquires a new reference-counted handle on this node.
    fn handle(&self) -> Self::Handle;
}

/// A reference-counted pin on a host node.
///
/// Dropping a handle without calling [`release`](Self::release) is the
/// implementor's concern; the cache always releases explicitly.
pub trait HostHandle {
    /// Releases the pin. Consumes the handle, enforcing release-once.
    fn release(self);
}

/// The cache surface a host storage engine drives.
///
/// All operations are `&self`; implementations serialize internally.
pub trait HostCache<N: HostNode>: Send + Sync {
    /// Returns the byte capacity.
    fn capacity(&self) -> usize;

    /// Updates the byte capacity.
    ///
    /// Shrinking does not evict immediately; the next
    /// [`promote`](Self::promote) drains the excess.
    fn set_capacity(&self, capacity: usize);

    /// Admits `node` (acquiring a handle and accounting its size) or
    /// registers a hit if it is already resident. No-op for banned nodes.
    fn promote(&self, node: &Arc<N>);

    /// Evicts `node` if resident and permanently refuses to re-admit it.
    fn ban(&self, node: &N);

    /// Evicts `node` if resident; it may be admitted again later.
    fn evict(&self, node: &N);

    /// Evicts every resident node in namespace `ns`.
    fn evict_ns(&self, ns: u64);

    /// Evicts every resident node.
    fn evict_all(&self);

    /// Shuts the cache down. The rlogc backend holds no external
    /// resources, so this is a no-op for it.
    fn close(&self);
}
