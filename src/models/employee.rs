//! Employee model and provisioning input.
//!
//! This module defines the [`Employee`] record owned by the shift store and
//! the [`NewEmployee`] payload used to provision one.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Stable identifier of an employee. Assigned by the store, never reused.
pub type EmployeeId = u64;

/// Largest accepted hourly rate.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Largest accepted preset for hours worked today.
pub const MAX_PRESET_HOURS: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Largest accepted preset for earnings accrued today (10^15).
pub const MAX_PRESET_EARNINGS: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// An employee and their shift state for the current day.
///
/// The open shift is represented only by `shift_start`, so "working" and
/// "has a shift start" cannot disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Job position, used for grouping.
    pub position: String,
    /// Pay in currency units per hour.
    pub hourly_rate: Decimal,
    /// Start of the currently open shift, if any.
    #[serde(default)]
    pub shift_start: Option<DateTime<Utc>>,
    /// Hours from completed shifts today.
    #[serde(default)]
    pub total_hours_today: Decimal,
    /// Earnings from completed shifts today.
    #[serde(default)]
    pub total_earnings_today: Decimal,
}

impl Employee {
    /// Returns true if the employee has an open shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_tracker::models::Employee;
    /// use chrono::Utc;
    /// use rust_decimal::Decimal;
    ///
    /// let mut employee = Employee {
    ///     id: 1,
    ///     name: "Anna".to_string(),
    ///     position: "Developer".to_string(),
    ///     hourly_rate: Decimal::new(2500, 0),
    ///     shift_start: None,
    ///     total_hours_today: Decimal::ZERO,
    ///     total_earnings_today: Decimal::ZERO,
    /// };
    /// assert!(!employee.is_working());
    ///
    /// employee.shift_start = Some(Utc::now());
    /// assert!(employee.is_working());
    /// ```
    pub fn is_working(&self) -> bool {
        self.shift_start.is_some()
    }
}

/// Input for provisioning a new employee.
///
/// Accumulators may be preset, which is how a roster seeded mid-day
/// carries hours already worked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Job position.
    pub position: String,
    /// Pay in currency units per hour.
    pub hourly_rate: Decimal,
    /// Hours already worked today.
    #[serde(default)]
    pub total_hours_today: Decimal,
    /// Earnings already accrued today.
    #[serde(default)]
    pub total_earnings_today: Decimal,
}

impl NewEmployee {
    /// Creates provisioning input with zeroed accumulators.
    pub fn new(name: impl Into<String>, position: impl Into<String>, hourly_rate: Decimal) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            hourly_rate,
            total_hours_today: Decimal::ZERO,
            total_earnings_today: Decimal::ZERO,
        }
    }

    /// Checks the record before it enters the store.
    ///
    /// # Returns
    ///
    /// `InvalidEmployee` naming the first offending field: a blank name, or a
    /// rate or accumulator that is negative or above its upper bound.
    pub fn validate(&self) -> TrackerResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("name", "must not be blank"));
        }
        check_range("hourly_rate", self.hourly_rate, MAX_HOURLY_RATE)?;
        check_range("total_hours_today", self.total_hours_today, MAX_PRESET_HOURS)?;
        check_range(
            "total_earnings_today",
            self.total_earnings_today,
            MAX_PRESET_EARNINGS,
        )?;
        Ok(())
    }

    pub(crate) fn into_employee(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            position: self.position,
            hourly_rate: self.hourly_rate,
            shift_start: None,
            total_hours_today: self.total_hours_today,
            total_earnings_today: self.total_earnings_today,
        }
    }
}

fn check_range(field: &str, value: Decimal, max: Decimal) -> TrackerResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(field, "must not be negative"));
    }
    if value > max {
        return Err(invalid(field, &format!("must not exceed {}", max)));
    }
    Ok(())
}

fn invalid(field: &str, message: &str) -> TrackerError {
    TrackerError::InvalidEmployee {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_test_input() -> NewEmployee {
        NewEmployee::new("Anna Petrova", "Developer", Decimal::new(2500, 0))
    }

    #[test]
    fn test_new_employee_starts_idle_with_given_accumulators() {
        let mut input = create_test_input();
        input.total_hours_today = Decimal::new(65, 1);
        input.total_earnings_today = Decimal::new(16250, 0);

        let employee = input.into_employee(9);

        assert_eq!(employee.id, 9);
        assert!(!employee.is_working());
        assert_eq!(employee.total_hours_today, Decimal::new(65, 1));
        assert_eq!(employee.total_earnings_today, Decimal::new(16250, 0));
    }

    #[test]
    fn test_validate_accepts_zero_rate() {
        let mut input = create_test_input();
        input.hourly_rate = Decimal::ZERO;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut input = create_test_input();
        input.name = "   ".to_string();

        match input.validate().unwrap_err() {
            TrackerError::InvalidEmployee { field, .. } => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_negative_rate() {
        let mut input = create_test_input();
        input.hourly_rate = Decimal::new(-1, 0);

        match input.validate().unwrap_err() {
            TrackerError::InvalidEmployee { field, .. } => assert_eq!(field, "hourly_rate"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_rate_above_bound() {
        let mut input = create_test_input();
        input.hourly_rate = MAX_HOURLY_RATE + Decimal::ONE;

        match input.validate().unwrap_err() {
            TrackerError::InvalidEmployee { field, message } => {
                assert_eq!(field, "hourly_rate");
                assert_eq!(message, "must not exceed 1000000000");
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }

        input.hourly_rate = MAX_HOURLY_RATE;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_huge_presets() {
        let mut input = create_test_input();
        input.total_earnings_today = Decimal::MAX;

        match input.validate().unwrap_err() {
            TrackerError::InvalidEmployee { field, .. } => {
                assert_eq!(field, "total_earnings_today")
            }
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }

        let mut input = create_test_input();
        input.total_hours_today = MAX_PRESET_HOURS + Decimal::new(1, 1);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_earnings_bound_is_ten_to_the_fifteenth() {
        assert_eq!(MAX_PRESET_EARNINGS, Decimal::from(1_000_000_000_000_000i64));
    }

    #[test]
    fn test_validate_rejects_negative_accumulators() {
        let mut input = create_test_input();
        input.total_hours_today = Decimal::new(-5, 1);
        assert!(input.validate().is_err());

        let mut input = create_test_input();
        input.total_earnings_today = Decimal::new(-100, 0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_deserialize_new_employee_defaults_accumulators() {
        let json = r#"{
            "name": "Olga Morozova",
            "position": "Analyst",
            "hourly_rate": "2200"
        }"#;

        let input: NewEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(input.hourly_rate, Decimal::new(2200, 0));
        assert_eq!(input.total_hours_today, Decimal::ZERO);
        assert_eq!(input.total_earnings_today, Decimal::ZERO);
    }

    #[test]
    fn test_employee_serialization() {
        let employee = Employee {
            id: 2,
            name: "Mikhail Sidorov".to_string(),
            position: "Designer".to_string(),
            hourly_rate: Decimal::new(2000, 0),
            shift_start: Some(Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap()),
            total_hours_today: Decimal::new(2, 0),
            total_earnings_today: Decimal::new(4000, 0),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
        assert!(deserialized.is_working());
    }
}
