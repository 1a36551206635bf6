//! Source of the timestamps attached to events.

use chrono::Utc;

/// Provides the current time as a UNIX timestamp in seconds.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> u32;
}

/// A [`Clock`] backed by the system's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u32 {
        // saturate outside of [1970, 2106)
        let timestamp = Utc::now().timestamp().max(0);

        u32::try_from(timestamp).unwrap_or(u32::MAX)
    }
}
