//! The authoritative employee shift state.
//!
//! This module provides [`ShiftStore`], which owns every [`Employee`] record,
//! applies shift transitions, accrues hours and earnings when a shift ends,
//! and publishes a [`StoreEvent`] for every real change.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{current_earnings, hours_between, hours_today};
use crate::clock::TimeSource;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{CompletedShift, DailyTotal, Employee, EmployeeId, NewEmployee, Snapshot};

use super::events::{EVENT_CHANNEL_CAPACITY, StoreEvent};
use super::policy::TransitionPolicy;

/// Single source of truth for employee shift state.
///
/// Mutations take `&mut self` and reads take `&self`; a host that shares the
/// store between tasks wraps it in a lock, and a [`Snapshot`] taken under the
/// read lock is consistent with respect to every mutation.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use shift_tracker::clock::ManualTimeSource;
/// use shift_tracker::models::NewEmployee;
/// use shift_tracker::store::ShiftStore;
/// use chrono::{TimeDelta, Utc};
/// use rust_decimal::Decimal;
///
/// let source = Arc::new(ManualTimeSource::new(Utc::now()));
/// let mut store = ShiftStore::new(source.clone());
/// let id = store
///     .add_employee(NewEmployee::new("Mikhail", "Designer", Decimal::new(2000, 0)))
///     .unwrap();
///
/// store.start_shift(id).unwrap();
/// source.advance(TimeDelta::hours(2));
/// let shift = store.end_shift(id).unwrap().unwrap();
///
/// assert_eq!(shift.hours, Decimal::new(2, 0));
/// assert_eq!(shift.earnings, Decimal::new(4000, 0));
/// ```
pub struct ShiftStore {
    employees: Vec<Employee>,
    next_id: EmployeeId,
    completed: Vec<CompletedShift>,
    policy: TransitionPolicy,
    source: Arc<dyn TimeSource>,
    events: broadcast::Sender<StoreEvent>,
}

impl ShiftStore {
    /// Creates an empty store reading instants from `source`.
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            employees: Vec::new(),
            next_id: 1,
            completed: Vec::new(),
            policy: TransitionPolicy::default(),
            source,
            events,
        }
    }

    /// Sets the transition policy.
    pub fn with_policy(mut self, policy: TransitionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The active transition policy.
    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    /// Provisions a new idle employee.
    ///
    /// # Returns
    ///
    /// The assigned id, or `InvalidEmployee` if the input fails validation.
    pub fn add_employee(&mut self, input: NewEmployee) -> TrackerResult<EmployeeId> {
        input.validate()?;

        let id = self.next_id;
        self.next_id += 1;
        let employee = input.into_employee(id);
        info!(
            employee_id = id,
            name = %employee.name,
            position = %employee.position,
            hourly_rate = %employee.hourly_rate,
            "Employee added"
        );
        self.employees.push(employee);
        self.publish(StoreEvent::EmployeeAdded { employee_id: id });
        Ok(id)
    }

    /// Opens a shift for the employee at the current instant.
    ///
    /// # Returns
    ///
    /// `true` if a shift was opened, `false` if the employee was already
    /// working (idempotent policy). Fails with `EmployeeNotFound` for an
    /// unknown id and, under the strict policy, `InvalidStateTransition` for a
    /// working employee.
    pub fn start_shift(&mut self, id: EmployeeId) -> TrackerResult<bool> {
        let now = self.source.now();
        self.start_shift_at(id, now)
    }

    /// Opens a shift that began at `started_at`.
    ///
    /// Used to restore a roster whose shifts were opened before the store
    /// existed. Transition rules are the same as [`ShiftStore::start_shift`].
    pub fn start_shift_at(&mut self, id: EmployeeId, started_at: DateTime<Utc>) -> TrackerResult<bool> {
        let policy = self.policy;
        let employee = self.employee_mut(id)?;

        if let Some(open_since) = employee.shift_start {
            return match policy {
                TransitionPolicy::Idempotent => {
                    debug!(employee_id = id, open_since = %open_since, "Shift already open; ignoring start");
                    Ok(false)
                }
                TransitionPolicy::Strict => Err(TrackerError::InvalidStateTransition {
                    id,
                    message: format!("shift already open since {}", open_since),
                }),
            };
        }

        employee.shift_start = Some(started_at);
        info!(employee_id = id, started_at = %started_at, "Shift started");
        self.publish(StoreEvent::ShiftStarted {
            employee_id: id,
            at: started_at,
        });
        Ok(true)
    }

    /// Closes the employee's open shift and accrues it.
    ///
    /// Hours are the exact interval from the shift start to the instant this
    /// call reads from the time source, clamped to zero if the source reports
    /// an instant before the start. Earnings are hours times the hourly rate.
    ///
    /// # Returns
    ///
    /// The completed shift, or `None` if the employee was idle (idempotent
    /// policy). Fails with `EmployeeNotFound` for an unknown id, under the
    /// strict policy with `InvalidStateTransition` for an idle employee, and
    /// with `AccrualOverflow` if an accumulator would overflow. A failed call
    /// leaves the record untouched and the shift open.
    pub fn end_shift(&mut self, id: EmployeeId) -> TrackerResult<Option<CompletedShift>> {
        let now = self.source.now();
        let policy = self.policy;
        let employee = self.employee_mut(id)?;

        let Some(started_at) = employee.shift_start else {
            return match policy {
                TransitionPolicy::Idempotent => {
                    debug!(employee_id = id, "No open shift; ignoring end");
                    Ok(None)
                }
                TransitionPolicy::Strict => Err(TrackerError::InvalidStateTransition {
                    id,
                    message: "no open shift to end".to_string(),
                }),
            };
        };

        if now < started_at {
            warn!(
                employee_id = id,
                started_at = %started_at,
                now = %now,
                "Shift end precedes start; crediting zero hours"
            );
        }

        let hours = hours_between(started_at, now);
        let overflow = |message: &str| TrackerError::AccrualOverflow {
            id,
            message: message.to_string(),
        };
        let earnings = hours
            .checked_mul(employee.hourly_rate)
            .ok_or_else(|| overflow("shift earnings overflowed"))?;
        let total_hours = employee
            .total_hours_today
            .checked_add(hours)
            .ok_or_else(|| overflow("hours today overflowed"))?;
        let total_earnings = employee
            .total_earnings_today
            .checked_add(earnings)
            .ok_or_else(|| overflow("earnings today overflowed"))?;

        employee.total_hours_today = total_hours;
        employee.total_earnings_today = total_earnings;
        employee.shift_start = None;

        let shift = CompletedShift {
            id: Uuid::new_v4(),
            employee_id: id,
            started_at,
            ended_at: now.max(started_at),
            hours,
            rate: employee.hourly_rate,
            earnings,
        };
        info!(
            employee_id = id,
            shift_id = %shift.id,
            hours = %hours.round_dp(4),
            earnings = %earnings.round_dp(2),
            "Shift ended"
        );

        self.completed.push(shift.clone());
        self.publish(StoreEvent::ShiftEnded {
            shift: shift.clone(),
        });
        Ok(Some(shift))
    }

    /// Copies every employee record at the current instant.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.source.now(), self.employees.clone())
    }

    /// Looks up one employee.
    pub fn employee(&self, id: EmployeeId) -> TrackerResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or(TrackerError::EmployeeNotFound { id })
    }

    /// Today's completed shifts in completion order.
    pub fn completed_shifts(&self) -> &[CompletedShift] {
        &self.completed
    }

    /// Number of employees in the store.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the store holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Closes the current day.
    ///
    /// Each employee's totals up to this instant, including any open shift,
    /// are captured and returned. Accumulators are then zeroed and the
    /// completed-shift log is cleared. Open shifts stay open but are
    /// re-anchored to the reset instant, so the new day only accrues time
    /// worked after the boundary.
    pub fn reset_daily(&mut self) -> Vec<DailyTotal> {
        let now = self.source.now();
        let mut totals = Vec::with_capacity(self.employees.len());

        for employee in &mut self.employees {
            totals.push(DailyTotal {
                employee_id: employee.id,
                hours: hours_today(employee, now),
                earnings: current_earnings(employee, now),
            });
            employee.total_hours_today = Decimal::ZERO;
            employee.total_earnings_today = Decimal::ZERO;
            if let Some(start) = employee.shift_start {
                employee.shift_start = Some(start.max(now));
            }
        }
        self.completed.clear();

        info!(
            at = %now,
            employees = totals.len(),
            "Daily accumulators reset"
        );
        self.publish(StoreEvent::DailyReset {
            at: now,
            totals: totals.clone(),
        });
        totals
    }

    /// Receives every change published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn employee_mut(&mut self, id: EmployeeId) -> TrackerResult<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(TrackerError::EmployeeNotFound { id })
    }

    fn publish(&self, event: StoreEvent) {
        // No subscribers is the normal case for a headless store.
        let _ = self.events.send(event);
    }
}
