//! Completed shift record.
//!
//! A [`CompletedShift`] is what `end_shift` produces: the closed interval
//! together with the hours and earnings that were added to the accumulators.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EmployeeId;

/// A shift that has been closed and accrued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedShift {
    /// Unique identifier for the shift.
    pub id: Uuid,
    /// The employee who worked the shift.
    pub employee_id: EmployeeId,
    /// When the shift was opened.
    pub started_at: DateTime<Utc>,
    /// When the shift was closed.
    pub ended_at: DateTime<Utc>,
    /// Hours credited for the shift.
    pub hours: Decimal,
    /// The hourly rate applied.
    pub rate: Decimal,
    /// Earnings credited for the shift (hours * rate).
    pub earnings: Decimal,
}
