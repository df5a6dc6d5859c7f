//! Clock port: the engine's single source of time.
//!
//! All timers in the simulation are absolute deadlines compared against
//! `Clock::now_ms`, so tests can drive the engine with a manually
//! advanced clock instead of waiting on wall-clock timers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of simulation time, in milliseconds.
pub trait Clock: Send {
    fn now_ms(&self) -> u64;
}

/// Monotonic wall clock anchored at construction, so readings start
/// near zero and intercept timestamps are session-relative.
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Manually advanced clock. Clones share the same underlying time, so a
/// test can keep one handle and hand another to the engine.
#[derive(Clone, Default)]
pub struct ManualClock {
    ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, delta_ms: u64) {
        self.ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: u64) {
        self.ms.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ms.load(Ordering::SeqCst)
    }
}
