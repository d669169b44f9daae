//! Shift state ownership for the shift tracker.
//!
//! This module provides the [`ShiftStore`] that owns employee records and
//! applies shift transitions, the [`TransitionPolicy`] governing repeated
//! requests, and the [`StoreEvent`]s published to subscribers.

mod events;
mod policy;
mod shift_store;

pub use events::{EVENT_CHANNEL_CAPACITY, StoreEvent};
pub use policy::TransitionPolicy;
pub use shift_store::ShiftStore;
