//! Decaying log-count ranks.
//!
//! A [`Rank`] is the per-entry score used by the heap: the natural log of an
//! effective access count (`log_count`) plus the tick at which that count was
//! last current (`tick`). The count decays exponentially with elapsed ticks,
//! so a single scalar captures both frequency (accumulated accesses) and
//! recency (how long ago they happened).
//!
//! ## Update rules
//!
//! ```text
//!   enter(now):          log_count = 0        (count = 1 in log space)
//!                        tick      = now
//!
//!   access(now, decay):  log_count += (now - tick) * decay   (apply elapsed decay)
//!                        tick       = now
//!                        log_count  = F(log_count)           (count += 1 in log space)
//! ```
//!
//! `decay` is negative by convention: for a decay factor `0 < a < 1` per
//! tick, pass `decay = ln(a)`.
//!
//! ## The increment function
//!
//! `F(n) = ln(exp(n) + 1)` increments a log-space count by one. Evaluating
//! `exp(n)` directly overflows for large `n`, so the implementation uses the
//! identity `F(n) = n + F(-n)`:
//!
//! ```text
//!   F(n) = ln(exp(n) + 1)
//!        = ln(exp(n) + exp(0))
//!        = ln(exp(0) + exp(-n)) + n
//!        = n + ln(exp(-n) + 1)
//!        = n + F(-n)
//! ```
//!
//! which gives the overflow-safe form `F(n) = max(0, n) + ln_1p(exp(-|n|))`:
//! the argument to `exp` is never positive, and `ln_1p` keeps precision for
//! tiny operands. A side effect worth relying on: `F` maps every finite
//! input to a non-negative output, so `log_count >= 0` holds after any
//! `enter` or `access`.
//!
//! ## Comparison
//!
//! Two ranks captured at different ticks are compared by shifting one onto
//! the other's time base lazily, instead of rescoring every entry on every
//! tick:
//!
//! ```text
//!   delta = (a.log_count - b.log_count) - (a.tick - b.tick) * decay
//! ```
//!
//! `Rank` is not synchronized; callers provide external locking.

use std::cmp::Ordering;

/// Logarithmically increments `n`, treating it as a log-space count.
///
/// Computes `ln(exp(n) + 1)` in the overflow-safe form
/// `max(0, n) + ln_1p(exp(-|n|))`.
///
/// # Example
///
/// ```
/// use rlogc::ds::rank::log_increment;
///
/// // count 1 (log 0) incremented once is count 2
/// assert!((log_increment(0.0) - 2.0f64.ln()).abs() < 1e-12);
///
/// // no overflow for large log-space counts
/// assert!((log_increment(1000.0) - 1000.0).abs() < 1e-9);
/// ```
pub fn log_increment(n: f64) -> f64 {
    n.max(0.0) + (-n.abs()).exp().ln_1p()
}

/// Difference used by [`Rank::compare`]; paired infinities cancel to zero
/// instead of producing `inf - inf = NaN`.
fn log_diff(a: f64, b: f64) -> f64 {
    if a.is_infinite() && b.is_infinite() && a == b {
        0.0
    } else {
        a - b
    }
}

/// Per-entry rank: a decaying log-space access count and its capture tick.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use rlogc::ds::rank::Rank;
///
/// let decay = 0.9f64.ln();
///
/// let mut hot = Rank::default();
/// hot.enter(1);
/// hot.access(2, decay);
/// hot.access(3, decay);
///
/// let mut cold = Rank::default();
/// cold.enter(3);
///
/// // two accesses outweigh being two ticks older
/// assert_eq!(hot.compare(&cold, decay), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rank {
    log_count: f64,
    tick: i64,
}

impl Rank {
    /// Resets the rank for an entry entering a cache: count 1, captured now.
    pub fn enter(&mut self, now: i64) {
        self.log_count = 0.0;
        self.tick = now;
    }

    /// Registers a hit: decays the count over the elapsed ticks, moves the
    /// capture tick to `now`, then increments the count logarithmically.
    pub fn access(&mut self, now: i64, decay: f64) {
        self.log_count += (now - self.tick) as f64 * decay;
        self.tick = now;
        self.log_count = log_increment(self.log_count);
    }

    /// Compares two ranks under `decay`, shifting for their tick difference.
    ///
    /// Paired infinite counts compare through a zero log-difference; a NaN
    /// delta compares `Equal`.
    pub fn compare(&self, other: &Rank, decay: f64) -> Ordering {
        let delta =
            log_diff(self.log_count, other.log_count) - (self.tick - other.tick) as f64 * decay;
        if delta < 0.0 {
            Ordering::Less
        } else if delta > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns the current log-space count.
    pub fn log_count(&self) -> f64 {
        self.log_count
    }

    /// Returns the tick at which the count was last current.
    pub fn tick(&self) -> i64 {
        self.tick
    }
}
