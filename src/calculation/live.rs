//! Live per-employee values.
//!
//! This module provides the functions that turn an employee record and an
//! instant into the values a renderer shows for the row: the open shift's
//! duration, the hours worked today and the earnings so far. Nothing here
//! reads a clock; the caller supplies `now`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Employee, EmployeeView};

/// Milliseconds in one hour.
pub const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Converts the interval between two instants into hours.
///
/// Negative intervals (the end instant is before the start, as happens with
/// clock skew) are clamped to zero.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::hours_between;
/// use chrono::{TimeDelta, Utc};
/// use rust_decimal::Decimal;
///
/// let start = Utc::now();
/// let end = start + TimeDelta::minutes(90);
/// assert_eq!(hours_between(start, end), Decimal::new(15, 1));
/// assert_eq!(hours_between(end, start), Decimal::ZERO);
/// ```
pub fn hours_between(start: DateTime<Utc>, end: DateTime<Utc>) -> Decimal {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        return Decimal::ZERO;
    }
    Decimal::from(millis) / Decimal::from(MILLIS_PER_HOUR)
}

/// Hours elapsed in the employee's open shift at `now`.
///
/// Returns zero for an idle employee, and zero when `now` is before the
/// shift start.
pub fn current_shift_duration(employee: &Employee, now: DateTime<Utc>) -> Decimal {
    match employee.shift_start {
        Some(start) => hours_between(start, now),
        None => Decimal::ZERO,
    }
}

/// Completed earnings plus the open shift's earnings at `now`.
///
/// Saturates at [`Decimal::MAX`] instead of overflowing.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::current_earnings;
/// use shift_tracker::models::Employee;
/// use chrono::{TimeDelta, Utc};
/// use rust_decimal::Decimal;
///
/// let start = Utc::now();
/// let employee = Employee {
///     id: 1,
///     name: "Mikhail".to_string(),
///     position: "Designer".to_string(),
///     hourly_rate: Decimal::new(2000, 0),
///     shift_start: Some(start),
///     total_hours_today: Decimal::ZERO,
///     total_earnings_today: Decimal::ZERO,
/// };
///
/// let earnings = current_earnings(&employee, start + TimeDelta::hours(2));
/// assert_eq!(earnings, Decimal::new(4000, 0));
/// ```
pub fn current_earnings(employee: &Employee, now: DateTime<Utc>) -> Decimal {
    let live = current_shift_duration(employee, now).saturating_mul(employee.hourly_rate);
    employee.total_earnings_today.saturating_add(live)
}

/// Completed hours plus the open shift's hours at `now`.
pub fn hours_today(employee: &Employee, now: DateTime<Utc>) -> Decimal {
    employee
        .total_hours_today
        .saturating_add(current_shift_duration(employee, now))
}

/// Builds the renderer row for one employee at `now`.
pub fn employee_view(employee: &Employee, now: DateTime<Utc>) -> EmployeeView {
    let current_shift_hours = current_shift_duration(employee, now);
    EmployeeView {
        id: employee.id,
        name: employee.name.clone(),
        position: employee.position.clone(),
        hourly_rate: employee.hourly_rate,
        is_working: employee.is_working(),
        shift_start: employee.shift_start,
        current_shift_hours,
        hours_today: hours_today(employee, now),
        earnings_today: current_earnings(employee, now),
        as_of: now,
    }
}

/// Builds rows for every employee, all evaluated at the same `now`.
pub fn employee_views(employees: &[Employee], now: DateTime<Utc>) -> Vec<EmployeeView> {
    employees.iter().map(|e| employee_view(e, now)).collect()
}
