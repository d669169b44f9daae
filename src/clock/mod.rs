//! Time handling for the shift tracker.
//!
//! This module provides the [`TimeSource`] abstraction the store reads
//! authoritative instants from, and the [`TimeClock`] that samples a source
//! at a fixed cadence so renderers can recompute live values.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shift_tracker::clock::{ManualTimeSource, TimeClock};
//! use chrono::{TimeDelta, Utc};
//!
//! let source = Arc::new(ManualTimeSource::new(Utc::now()));
//! let clock = TimeClock::new(source.clone());
//! let first = clock.now();
//!
//! source.advance(TimeDelta::seconds(1));
//! assert_eq!(clock.tick(), first + TimeDelta::seconds(1));
//! ```

mod source;
mod ticker;

pub use source::{ManualTimeSource, SystemTimeSource, TimeSource};
pub use ticker::{TimeClock, spawn_ticker};
