//! Time source abstraction.
//!
//! Persona expiry compares "now" against the moment a persona was last
//! activated. The engine reads time only through [`Clock`], so tests can
//! drive expiry with a [`ManualClock`] instead of sleeping.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use crate::types::Timestamp;

/// Capability for reading the current time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time in seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // Pre-1970 clocks clamp to the epoch.
        let secs = u64::try_from(Utc::now().timestamp()).unwrap_or(0);
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    secs: Arc<AtomicU64>,
}

impl ManualClock {
    /// Create a manual clock reading `secs`.
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self {
            secs: Arc::new(AtomicU64::new(secs)),
        }
    }

    /// Move the clock forward by `secs`.
    pub fn advance(&self, secs: u64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }

    /// Jump the clock to an absolute reading.
    pub fn set(&self, secs: u64) {
        self.secs.store(secs, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.load(Ordering::SeqCst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new(10);
        let handle = clock.clone();
        handle.advance(5);
        assert_eq!(clock.now(), Timestamp::from_secs(15));
        handle.set(2);
        assert_eq!(clock.now().secs, 2);
    }

    #[test]
    fn system_clock_is_past_epoch() {
        assert!(SystemClock.now().secs > 0);
    }
}
