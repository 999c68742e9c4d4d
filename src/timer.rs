//! Tick sources for rank timestamps.
//!
//! The heap never reads a clock directly; it asks a [`Timer`] for the
//! current tick. A timer only has to promise monotonically non-decreasing
//! `i64` ticks per instance — resolution is the caller's trade-off:
//!
//! | Implementation | Tick | Cost per call |
//! |---|---|---|
//! | [`SecondsTimer`] | whole seconds since construction | a clock read |
//! | [`IntervalTimer`] | background counter, +1 per period | a relaxed load |
//! | [`IncrementTimer`] | 1, 2, 3, … per call | a fetch-add |
//!
//! Closures work too: any `Fn() -> i64 + Send + Sync` is a `Timer`.
//! [`IncrementTimer`] is the deterministic choice for tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// A source of monotonically non-decreasing 64-bit ticks.
///
/// Implementations must be callable from any thread that uses the owning
/// cache; interior state (if any) is the implementation's responsibility.
pub trait Timer: Send + Sync {
    /// Returns the current tick.
    fn now(&self) -> i64;
}

impl<F> Timer for F
where
    F: Fn() -> i64 + Send + Sync,
{
    fn now(&self) -> i64 {
        self()
    }
}

/// Wall-clock timer ticking once per second, anchored at construction.
///
/// Backed by [`Instant`], so ticks never go backwards even if the system
/// clock is adjusted. Each call reads the monotonic clock, which is the
/// most expensive of the bundled timers.
///
/// # Example
///
/// ```
/// use rlogc::timer::{SecondsTimer, Timer};
///
/// let timer = SecondsTimer::new();
/// assert!(timer.now() >= 0);
/// ```
#[derive(Debug)]
pub struct SecondsTimer {
    origin: Instant,
}

impl SecondsTimer {
    /// Creates a timer whose tick 0 is "now".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SecondsTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer for SecondsTimer {
    fn now(&self) -> i64 {
        self.origin.elapsed().as_secs() as i64
    }
}

/// Coarse timer advanced by a background thread once per period.
///
/// Reads are a single relaxed atomic load, making this the cheapest timer
/// for hot paths that tolerate coarse ticks. The ticker thread is signalled
/// and joined when the timer is dropped, so constructing one per cache does
/// not leak a thread.
#[derive(Debug)]
pub struct IntervalTimer {
    ticks: Arc<AtomicI64>,
    stop: Option<mpsc::Sender<()>>,
    ticker: Option<thread::JoinHandle<()>>,
}

impl IntervalTimer {
    /// Spawns the ticker thread; the counter increments every `period`.
    pub fn new(period: Duration) -> Self {
        let ticks = Arc::new(AtomicI64::new(0));
        let (stop, stopped) = mpsc::channel::<()>();
        let counter = Arc::clone(&ticks);
        let ticker = thread::spawn(move || loop {
            match stopped.recv_timeout(period) {
                Err(RecvTimeoutError::Timeout) => {
                    counter.fetch_add(1, Ordering::Relaxed);
                }
                // Sender dropped (or an explicit stop): shut down.
                _ => return,
            }
        });
        Self {
            ticks,
            stop: Some(stop),
            ticker: Some(ticker),
        }
    }
}

impl Timer for IntervalTimer {
    fn now(&self) -> i64 {
        self.ticks.load(Ordering::Relaxed)
    }
}

impl Drop for IntervalTimer {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.join();
        }
    }
}

/// Pseudo-timer returning 1, 2, 3, … on successive calls.
///
/// Every call advances time by one tick, which makes cache behavior fully
/// deterministic — the timer of choice for tests.
///
/// # Example
///
/// ```
/// use rlogc::timer::{IncrementTimer, Timer};
///
/// let timer = IncrementTimer::new();
/// assert_eq!(timer.now(), 1);
/// assert_eq!(timer.now(), 2);
/// ```
#[derive(Debug, Default)]
pub struct IncrementTimer {
    last: AtomicI64,
}

impl IncrementTimer {
    /// Creates a timer whose first tick will be 1.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Timer for IncrementTimer {
    fn now(&self) -> i64 {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }
}
