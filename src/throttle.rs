//! Fixed-interval fetch throttling
//!
//! The remote image host is fetched strictly sequentially; the only
//! pacing device in the whole pipeline is a flat blocking pause applied
//! after each successful network texture fetch. The trait exists so
//! tests can substitute a no-op (or a counting fake) for the real sleep.

use std::time::Duration;

/// Blocking pause applied between successive network fetches.
pub trait Throttle {
    /// Block the caller for the configured spacing. Called only after a
    /// successful network fetch, never after a cache hit.
    fn pause(&self);
}

/// Sleeps a fixed interval on every pause. Flat-rate, not adaptive.
#[derive(Debug, Clone)]
pub struct IntervalThrottle {
    interval: Duration,
}

impl IntervalThrottle {
    /// Create a throttle with the given spacing.
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// The configured spacing.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Throttle for IntervalThrottle {
    fn pause(&self) {
        std::thread::sleep(self.interval);
    }
}

/// Throttle that never blocks, for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopThrottle;

impl Throttle for NoopThrottle {
    fn pause(&self) {}
}
