//! Derived result models.
//!
//! This module contains the values the calculation layer produces for a
//! renderer: per-row [`EmployeeView`]s, the [`DepartmentSummary`] with its
//! [`PositionGroup`]s, and the [`DailyTotal`]s reported by a daily reset.
//! None of these are stored; they are recomputed from a snapshot and an instant.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::EmployeeId;

/// Employees sharing one position.
///
/// # Example
///
/// ```
/// use shift_tracker::models::PositionGroup;
/// use rust_decimal::Decimal;
///
/// let group = PositionGroup {
///     position: "Designer".to_string(),
///     count: 2,
///     average_hourly_rate: Decimal::new(2100, 0),
/// };
/// assert_eq!(group.count, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionGroup {
    /// The position string shared by the group.
    pub position: String,
    /// Number of employees holding the position.
    pub count: usize,
    /// Mean hourly rate across the group.
    pub average_hourly_rate: Decimal,
}

/// Department-wide statistics at a single instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    /// The instant every live value was evaluated at.
    pub as_of: DateTime<Utc>,
    /// Number of employees.
    pub total_employees: usize,
    /// Number of employees with an open shift.
    pub active_employees: usize,
    /// Completed plus live hours across the department.
    pub total_hours: Decimal,
    /// Completed plus live earnings across the department.
    pub total_earnings: Decimal,
    /// Mean hourly rate, absent when there are no employees.
    pub average_hourly_rate: Option<Decimal>,
    /// Per-position breakdown, in order of first appearance.
    pub positions: Vec<PositionGroup>,
}

/// One employee row with live values evaluated at `as_of`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeView {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// Pay in currency units per hour.
    pub hourly_rate: Decimal,
    /// Whether a shift is open.
    pub is_working: bool,
    /// Start of the open shift, if any.
    pub shift_start: Option<DateTime<Utc>>,
    /// Hours elapsed in the open shift.
    pub current_shift_hours: Decimal,
    /// Completed plus live hours today.
    pub hours_today: Decimal,
    /// Completed plus live earnings today.
    pub earnings_today: Decimal,
    /// The instant the live values were evaluated at.
    pub as_of: DateTime<Utc>,
}

/// Totals for one employee captured when the day was closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The employee the totals belong to.
    pub employee_id: EmployeeId,
    /// Hours worked in the closed day, including the open shift up to the reset.
    pub hours: Decimal,
    /// Earnings in the closed day, including the open shift up to the reset.
    pub earnings: Decimal,
}
