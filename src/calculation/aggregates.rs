//! Department-wide aggregates.
//!
//! This module provides the pure functions that reduce a set of employees and
//! a single instant to headcounts, hour and earnings totals, rate averages and
//! a per-position breakdown. Every live value in one computation must be
//! evaluated at the same `now`, otherwise the department total drifts from
//! the sum of the rows.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{DepartmentSummary, Employee, PositionGroup, Snapshot};

use super::live::{current_earnings, hours_today};

/// Number of employees with an open shift.
pub fn active_count(employees: &[Employee]) -> usize {
    employees.iter().filter(|e| e.is_working()).count()
}

/// Completed plus live hours across all employees at `now`.
pub fn total_hours(employees: &[Employee], now: DateTime<Utc>) -> Decimal {
    saturating_sum(employees.iter().map(|e| hours_today(e, now)))
}

/// Completed plus live earnings across all employees at `now`.
///
/// Always equal to the sum of [`current_earnings`] for each employee at the
/// same instant. Saturates at [`Decimal::MAX`] instead of overflowing.
pub fn total_earnings(employees: &[Employee], now: DateTime<Utc>) -> Decimal {
    saturating_sum(employees.iter().map(|e| current_earnings(e, now)))
}

/// Mean hourly rate across all employees.
///
/// # Returns
///
/// `EmptyEmployeeSet` when `employees` is empty; there is no meaningful mean
/// of nothing, and returning zero would read as a real rate.
///
/// # Examples
///
/// ```
/// use shift_tracker::calculation::average_hourly_rate;
/// use shift_tracker::error::TrackerError;
///
/// assert!(matches!(
///     average_hourly_rate(&[]),
///     Err(TrackerError::EmptyEmployeeSet { .. })
/// ));
/// ```
pub fn average_hourly_rate(employees: &[Employee]) -> TrackerResult<Decimal> {
    if employees.is_empty() {
        return Err(TrackerError::EmptyEmployeeSet {
            operation: "average hourly rate".to_string(),
        });
    }
    let sum = saturating_sum(employees.iter().map(|e| e.hourly_rate));
    Ok(sum / Decimal::from(employees.len()))
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Groups employees by exact position string.
///
/// Groups come out in the order their position first appears in
/// `employees`, so the same input always renders the same way.
pub fn group_by_position(employees: &[Employee]) -> Vec<PositionGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize, Decimal)> = Vec::new();

    for employee in employees {
        let position = employee.position.as_str();
        match index.get(position).copied() {
            Some(i) => {
                let (_, count, rate_sum) = &mut groups[i];
                *count += 1;
                *rate_sum = rate_sum.saturating_add(employee.hourly_rate);
            }
            None => {
                index.insert(position, groups.len());
                groups.push((position, 1, employee.hourly_rate));
            }
        }
    }

    groups
        .into_iter()
        .map(|(position, count, rate_sum)| PositionGroup {
            position: position.to_string(),
            count,
            average_hourly_rate: rate_sum / Decimal::from(count),
        })
        .collect()
}

/// Computes every department statistic at the snapshot's own instant.
///
/// An empty department reports `average_hourly_rate: None`.
pub fn summarize(snapshot: &Snapshot) -> DepartmentSummary {
    summarize_at(snapshot.employees(), snapshot.taken_at())
}

/// Computes every department statistic at `now`.
pub fn summarize_at(employees: &[Employee], now: DateTime<Utc>) -> DepartmentSummary {
    DepartmentSummary {
        as_of: now,
        total_employees: employees.len(),
        active_employees: active_count(employees),
        total_hours: total_hours(employees, now),
        total_earnings: total_earnings(employees, now),
        average_hourly_rate: average_hourly_rate(employees).ok(),
        positions: group_by_position(employees),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::current_shift_duration;
    use chrono::{TimeDelta, TimeZone};
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap()
    }

    fn employee(id: u64, position: &str, rate: &str, shift_start: Option<DateTime<Utc>>) -> Employee {
        Employee {
            id,
            name: format!("Employee {}", id),
            position: position.to_string(),
            hourly_rate: dec(rate),
            shift_start,
            total_hours_today: Decimal::ZERO,
            total_earnings_today: Decimal::ZERO,
        }
    }

    /// The five-person department the dashboard starts with.
    fn create_department(now: DateTime<Utc>) -> Vec<Employee> {
        let mut anna = employee(1, "Developer", "2500", None);
        anna.total_hours_today = dec("6.5");
        anna.total_earnings_today = dec("16250");

        let mut mikhail = employee(2, "Designer", "2000", Some(now - TimeDelta::hours(2)));
        mikhail.total_hours_today = dec("2");
        mikhail.total_earnings_today = dec("4000");

        let mut elena = employee(3, "Project Manager", "3000", None);
        elena.total_hours_today = dec("8");
        elena.total_earnings_today = dec("24000");

        let mut dmitry = employee(4, "QA Engineer", "1800", Some(now - TimeDelta::hours(4)));
        dmitry.total_hours_today = dec("4");
        dmitry.total_earnings_today = dec("7200");

        let mut olga = employee(5, "Analyst", "2200", None);
        olga.total_hours_today = dec("7");
        olga.total_earnings_today = dec("15400");

        vec![anna, mikhail, elena, dmitry, olga]
    }

    #[test]
    fn test_active_count_one_working_one_idle() {
        let employees = vec![
            employee(1, "Developer", "2500", Some(t0())),
            employee(2, "Designer", "2000", None),
        ];
        assert_eq!(active_count(&employees), 1);
    }

    #[test]
    fn test_total_hours_sums_stored_and_live_hours() {
        let mut working = employee(1, "Developer", "2500", Some(t0()));
        working.total_hours_today = dec("1.5");
        let mut idle = employee(2, "Designer", "2000", None);
        idle.total_hours_today = dec("3");
        let employees = vec![working, idle];

        let now = t0() + TimeDelta::hours(2);
        assert_eq!(total_hours(&employees, now), dec("6.5"));
    }

    #[test]
    fn test_department_totals() {
        let now = t0();
        let employees = create_department(now);

        assert_eq!(active_count(&employees), 2);
        // 27.5 stored + 2 live + 4 live
        assert_eq!(total_hours(&employees, now), dec("33.5"));
        // 66850 stored + 4000 live + 7200 live
        assert_eq!(total_earnings(&employees, now), dec("78050"));
        assert_eq!(average_hourly_rate(&employees).unwrap(), dec("2300"));
    }

    #[test]
    fn test_average_hourly_rate_empty_is_error() {
        match average_hourly_rate(&[]).unwrap_err() {
            TrackerError::EmptyEmployeeSet { operation } => {
                assert_eq!(operation, "average hourly rate");
            }
            other => panic!("Expected EmptyEmployeeSet, got {:?}", other),
        }
    }

    #[test]
    fn test_group_by_position_shared_position() {
        let employees = vec![
            employee(1, "Designer", "2000", None),
            employee(2, "Developer", "2500", None),
            employee(3, "Designer", "2200", None),
        ];

        let groups = group_by_position(&employees);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].position, "Designer");
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].average_hourly_rate, dec("2100"));
        assert_eq!(groups[1].position, "Developer");
        assert_eq!(groups[1].count, 1);
        assert_eq!(groups[1].average_hourly_rate, dec("2500"));
    }

    #[test]
    fn test_group_by_position_is_case_sensitive() {
        let employees = vec![
            employee(1, "designer", "2000", None),
            employee(2, "Designer", "2000", None),
        ];
        assert_eq!(group_by_position(&employees).len(), 2);
    }

    #[test]
    fn test_group_by_position_empty() {
        assert!(group_by_position(&[]).is_empty());
    }

    #[test]
    fn test_summarize_uses_snapshot_instant() {
        let now = t0();
        let snapshot = Snapshot::new(now, create_department(now));

        let summary = summarize(&snapshot);

        assert_eq!(summary.as_of, now);
        assert_eq!(summary.total_employees, 5);
        assert_eq!(summary.active_employees, 2);
        assert_eq!(summary.total_hours, dec("33.5"));
        assert_eq!(summary.total_earnings, dec("78050"));
        assert_eq!(summary.average_hourly_rate, Some(dec("2300")));
        assert_eq!(summary.positions.len(), 5);
    }

    #[test]
    fn test_summarize_empty_department() {
        let summary = summarize(&Snapshot::new(t0(), vec![]));

        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.active_employees, 0);
        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.total_earnings, Decimal::ZERO);
        assert_eq!(summary.average_hourly_rate, None);
        assert!(summary.positions.is_empty());
    }

    #[test]
    fn test_summarize_saturates_on_huge_accumulators() {
        let mut first = employee(1, "Developer", "2500", None);
        first.total_earnings_today = Decimal::MAX;
        let mut second = employee(2, "Developer", "2500", Some(t0() - TimeDelta::hours(1)));
        second.total_earnings_today = Decimal::MAX;
        second.total_hours_today = Decimal::MAX;

        let summary = summarize(&Snapshot::new(t0(), vec![first, second]));

        assert_eq!(summary.total_earnings, Decimal::MAX);
        assert_eq!(summary.total_hours, Decimal::MAX);
        assert_eq!(summary.active_employees, 1);
    }

    #[test]
    fn test_huge_rate_live_earnings_saturate() {
        let mut huge = employee(1, "Developer", "0", Some(t0() - TimeDelta::hours(2)));
        huge.hourly_rate = Decimal::MAX;
        let rows = [huge.clone(), huge];

        assert_eq!(current_earnings(&rows[0], t0()), Decimal::MAX);
        assert_eq!(total_earnings(&rows, t0()), Decimal::MAX);
        assert_eq!(average_hourly_rate(&rows).unwrap(), Decimal::MAX / Decimal::TWO);
        assert_eq!(group_by_position(&rows)[0].count, 2);
    }

    prop_compose! {
        fn arb_employee()(
            id in 1u64..1000,
            position in prop::sample::select(vec!["Developer", "Designer", "Analyst"]),
            rate_cents in 0i64..1_000_000,
            stored_minutes in 0i64..600,
            open_offset_secs in prop::option::of(-600i64..36_000),
        ) -> Employee {
            let rate = Decimal::new(rate_cents, 2);
            let stored_hours = Decimal::from(stored_minutes) / Decimal::from(60);
            Employee {
                id,
                name: format!("Employee {}", id),
                position: position.to_string(),
                hourly_rate: rate,
                shift_start: open_offset_secs.map(|s| t0() - TimeDelta::seconds(s)),
                total_hours_today: stored_hours,
                total_earnings_today: stored_hours * rate,
            }
        }
    }

    proptest! {
        #[test]
        fn test_total_earnings_equals_sum_of_rows(
            employees in prop::collection::vec(arb_employee(), 0..20),
            now_offset_secs in 0i64..86_400,
        ) {
            let now = t0() + TimeDelta::seconds(now_offset_secs);
            let row_sum: Decimal = employees.iter().map(|e| current_earnings(e, now)).sum();
            prop_assert_eq!(total_earnings(&employees, now), row_sum);
        }

        #[test]
        fn test_live_values_never_negative(
            employees in prop::collection::vec(arb_employee(), 1..20),
            now_offset_secs in -3_600i64..86_400,
        ) {
            let now = t0() + TimeDelta::seconds(now_offset_secs);
            for e in &employees {
                prop_assert!(current_shift_duration(e, now) >= Decimal::ZERO);
                prop_assert!(current_earnings(e, now) >= e.total_earnings_today);
            }
            prop_assert!(total_hours(&employees, now) >= Decimal::ZERO);
        }

        #[test]
        fn test_group_counts_cover_every_employee(
            employees in prop::collection::vec(arb_employee(), 0..30),
        ) {
            let groups = group_by_position(&employees);
            let covered: usize = groups.iter().map(|g| g.count).sum();
            prop_assert_eq!(covered, employees.len());
        }
    }
}
