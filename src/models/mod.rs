//! Core data models for the shift tracker.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod shift;
mod snapshot;
mod summary;

pub use employee::{
    Employee, EmployeeId, MAX_HOURLY_RATE, MAX_PRESET_EARNINGS, MAX_PRESET_HOURS, NewEmployee,
};
pub use shift::CompletedShift;
pub use snapshot::Snapshot;
pub use summary::{DailyTotal, DepartmentSummary, EmployeeView, PositionGroup};
