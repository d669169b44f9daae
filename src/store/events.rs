//! Change notifications published by the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{CompletedShift, DailyTotal, EmployeeId};

/// Number of events a lagging subscriber may fall behind before it starts
/// missing them.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// A state change in the store.
///
/// Only real transitions are published. A no-op start or end sends nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// An employee was provisioned.
    EmployeeAdded {
        /// The new employee's id.
        employee_id: EmployeeId,
    },
    /// A shift was opened.
    ShiftStarted {
        /// The employee whose shift opened.
        employee_id: EmployeeId,
        /// The shift start instant.
        at: DateTime<Utc>,
    },
    /// A shift was closed and accrued.
    ShiftEnded {
        /// The closed shift.
        shift: CompletedShift,
    },
    /// The day was closed and accumulators zeroed.
    DailyReset {
        /// The reset instant.
        at: DateTime<Utc>,
        /// Per-employee totals of the closed day.
        totals: Vec<DailyTotal>,
    },
}
