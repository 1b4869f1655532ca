//! Timestamp-gated diagnostic throttle.
//!
//! Large batch conversions can trip the same warning millions of times.
//! [`WarnThrottle`] lets at most one emission through per window and
//! counts everything it holds back, independent of the logging backend.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Default window between two emitted warnings.
pub const DEFAULT_WARN_INTERVAL: Duration = Duration::from_millis(500);

/// Snapshot of a throttle's counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThrottleStats {
    /// Diagnostics let through.
    pub emitted: u64,
    /// Diagnostics held back because the window had not elapsed.
    pub suppressed: u64,
}

/// Allows at most one diagnostic per `window`.
///
/// Lock-free, so a throttle can sit behind `&self` methods of a type that
/// is shared across threads.
#[derive(Debug)]
pub struct WarnThrottle {
    window: Duration,
    origin: Instant,
    /// Nanoseconds since `origin` of the last emission, plus one. Zero
    /// means nothing has been emitted yet.
    last: AtomicU64,
    emitted: AtomicU64,
    suppressed: AtomicU64,
    /// Suppressed since the last emission.
    pending: AtomicU64,
}

impl Default for WarnThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_WARN_INTERVAL)
    }
}

impl Clone for WarnThrottle {
    /// Clones get the same window but fresh counters.
    fn clone(&self) -> Self {
        Self::new(self.window)
    }
}

impl WarnThrottle {
    /// Create a throttle with the given window. A zero window never
    /// suppresses.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            origin: Instant::now(),
            last: AtomicU64::new(0),
            emitted: AtomicU64::new(0),
            suppressed: AtomicU64::new(0),
            pending: AtomicU64::new(0),
        }
    }

    /// The configured window.
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Ask to emit a diagnostic now.
    ///
    /// Returns `Some(n)` when the caller should emit, where `n` is how many
    /// requests were suppressed since the previous emission. Returns `None`
    /// when the request falls inside the current window.
    pub fn try_acquire(&self) -> Option<u64> {
        self.try_acquire_at(Instant::now())
    }

    fn try_acquire_at(&self, now: Instant) -> Option<u64> {
        let window = self.window.as_nanos().min(u64::MAX as u128) as u64;
        let stamp = (now.saturating_duration_since(self.origin).as_nanos() as u64).saturating_add(1);

        let mut last = self.last.load(Ordering::Acquire);
        loop {
            if last != 0 && stamp.saturating_sub(last) < window {
                self.suppressed.fetch_add(1, Ordering::Relaxed);
                self.pending.fetch_add(1, Ordering::Relaxed);
                return None;
            }
            match self
                .last
                .compare_exchange_weak(last, stamp, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => {
                    self.emitted.fetch_add(1, Ordering::Relaxed);
                    return Some(self.pending.swap(0, Ordering::Relaxed));
                }
                Err(current) => last = current,
            }
        }
    }

    /// Current counters.
    pub fn stats(&self) -> ThrottleStats {
        ThrottleStats {
            emitted: self.emitted.load(Ordering::Relaxed),
            suppressed: self.suppressed.load(Ordering::Relaxed),
        }
    }
}
