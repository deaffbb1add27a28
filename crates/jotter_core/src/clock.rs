//! Time source for note identifiers.
//!
//! # Responsibility
//! - Provide epoch-millisecond timestamps to the note service.
//! - Let tests substitute a deterministic clock.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of creation timestamps.
pub trait Clock {
    /// Current time in Unix epoch milliseconds.
    fn now_epoch_ms(&self) -> u64;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> u64 {
        // A clock set before 1970 yields 0 rather than failing the save.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_epoch_ms(&self) -> u64 {
        (**self).now_epoch_ms()
    }
}
