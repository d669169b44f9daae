//! Sampled display clock and its periodic ticker.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use super::source::TimeSource;

/// The "now" that live values are rendered against.
///
/// `now()` returns the most recent sample, which only changes on `tick()`.
/// Samples never go backwards: if the source reports an earlier instant than
/// the last sample, the last sample is kept. Accumulation never uses this
/// clock; the store reads its source directly at the moment a shift ends.
pub struct TimeClock {
    source: Arc<dyn TimeSource>,
    sender: watch::Sender<DateTime<Utc>>,
}

impl TimeClock {
    /// Creates a clock and takes the first sample.
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        let (sender, _) = watch::channel(source.now());
        Self { source, sender }
    }

    /// The most recent sample.
    pub fn now(&self) -> DateTime<Utc> {
        *self.sender.borrow()
    }

    /// Re-samples the source and notifies subscribers.
    ///
    /// # Returns
    ///
    /// The new sample, which is never earlier than the previous one.
    pub fn tick(&self) -> DateTime<Utc> {
        let sampled = self.source.now();
        let mut current = sampled;
        self.sender.send_modify(|now| {
            if sampled >= *now {
                *now = sampled;
            } else {
                warn!(sampled = %sampled, kept = %now, "Time source went backwards; keeping last sample");
            }
            current = *now;
        });
        current
    }

    /// Receives every sample from now on.
    pub fn subscribe(&self) -> watch::Receiver<DateTime<Utc>> {
        self.sender.subscribe()
    }
}

/// Spawns a task that ticks `clock` every `period`.
///
/// The first tick fires immediately. Ticks missed while the runtime was busy
/// are skipped rather than replayed. The host stops the ticker by aborting
/// the returned handle.
///
/// # Panics
///
/// Panics if `period` is zero.
pub fn spawn_ticker(clock: Arc<TimeClock>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            interval.tick().await;
            let now = clock.tick();
            debug!(now = %now, "Clock tick");
        }
    })
}
