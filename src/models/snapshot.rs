//! Point-in-time copy of the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Employee, EmployeeId};

/// An immutable copy of every employee record, in store order, taken at one instant.
///
/// A snapshot owns its records. Later store mutations never show through it,
/// and it can be handed to readers on other tasks.
///
/// # Example
///
/// ```
/// use shift_tracker::models::Snapshot;
/// use chrono::Utc;
///
/// let snapshot = Snapshot::new(Utc::now(), vec![]);
/// assert!(snapshot.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    taken_at: DateTime<Utc>,
    employees: Vec<Employee>,
}

impl Snapshot {
    /// Creates a snapshot from records copied at `taken_at`.
    pub fn new(taken_at: DateTime<Utc>, employees: Vec<Employee>) -> Self {
        Self {
            taken_at,
            employees,
        }
    }

    /// The instant the snapshot was taken.
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }

    /// The employee records in store order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Looks up one record by id.
    pub fn find(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Number of employees in the snapshot.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the snapshot holds no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
