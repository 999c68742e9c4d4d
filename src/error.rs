//! Error types for the rlogc library.
//!
//! The error surface is deliberately small:
//!
//! - [`ConfigError`]: invalid construction parameters, returned by the
//!   `try_*` constructors on the policy wrappers.
//! - [`InvariantError`]: violated internal bookkeeping, returned by
//!   [`RlogcHeap::check_invariants`](crate::ds::heap::RlogcHeap::check_invariants).
//!
//! Capacity pressure is handled internally by draining and is never
//! surfaced; nothing is retried and nothing is logged at this layer.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by `try_new`/`try_with_callback` on the cache wrappers, for
/// example when the decay constant is positive or non-finite.
///
/// # Example
///
/// ```
/// use rlogc::policy::keyed::RlogcCache;
/// use rlogc::timer::IncrementTimer;
///
/// let err = RlogcCache::<u64, u64>::try_new(0.5, IncrementTimer::new(), 8).unwrap_err();
/// assert!(err.to_string().contains("decay"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal data-structure invariants are violated.
///
/// Carries a human-readable description of which invariant failed. Seeing
/// one of these indicates a bug in this crate, not in the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
