//! Pluggable time sources.
//!
//! The store and the clock never call `Utc::now` directly; they ask a
//! [`TimeSource`]. Production code uses [`SystemTimeSource`], tests use
//! [`ManualTimeSource`] to move time deterministically.

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;

/// A function of no arguments returning the current instant.
pub trait TimeSource: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A time source that only moves when told to.
///
/// # Example
///
/// ```
/// use shift_tracker::clock::{ManualTimeSource, TimeSource};
/// use chrono::{TimeDelta, TimeZone, Utc};
///
/// let start = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
/// let source = ManualTimeSource::new(start);
/// source.advance(TimeDelta::hours(2));
/// assert_eq!(source.now(), start + TimeDelta::hours(2));
/// ```
#[derive(Debug)]
pub struct ManualTimeSource {
    now: Mutex<DateTime<Utc>>,
}

impl ManualTimeSource {
    /// Creates a source frozen at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Jumps to `instant`. Moving backwards is allowed, to simulate skew.
    pub fn set(&self, instant: DateTime<Utc>) {
        *self.now.lock() = instant;
    }

    /// Moves the source by `delta`.
    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock();
        *now += delta;
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_manual_source_set_and_advance() {
        let start = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
        let source = ManualTimeSource::new(start);
        assert_eq!(source.now(), start);

        source.advance(TimeDelta::minutes(30));
        assert_eq!(source.now(), start + TimeDelta::minutes(30));

        source.set(start - TimeDelta::minutes(1));
        assert_eq!(source.now(), start - TimeDelta::minutes(1));
    }

    #[test]
    fn test_system_source_is_close_to_wall_clock() {
        let before = Utc::now();
        let sampled = SystemTimeSource.now();
        let after = Utc::now();
        assert!(sampled >= before && sampled <= after);
    }
}
