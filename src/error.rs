//! Error types for the shift tracker.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a store, calculation or configuration call can report.

use thiserror::Error;

use crate::models::EmployeeId;

/// The main error type for the shift tracker.
///
/// Every fallible operation returns this type. Errors are local to the call
/// that produced them; none of them leave the store in a partial state.
///
/// # Example
///
/// ```
/// use shift_tracker::error::TrackerError;
///
/// let error = TrackerError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum TrackerError {
    /// An operation referenced an employee id the store does not hold.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was not found.
        id: EmployeeId,
    },

    /// A shift transition was rejected under the strict transition policy.
    #[error("Invalid state transition for employee {id}: {message}")]
    InvalidStateTransition {
        /// The employee the transition was attempted on.
        id: EmployeeId,
        /// A description of the rejected transition.
        message: String,
    },

    /// An average was requested over an empty set of employees.
    #[error("Cannot compute {operation} over an empty employee set")]
    EmptyEmployeeSet {
        /// The aggregate that was requested.
        operation: String,
    },

    /// Closing a shift would push an accumulator past the representable range.
    #[error("Accrual overflow for employee {id}: {message}")]
    AccrualOverflow {
        /// The employee whose shift could not be accrued.
        id: EmployeeId,
        /// The accumulator that overflowed.
        message: String,
    },

    /// An employee record failed validation.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or held invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return TrackerError.
pub type TrackerResult<T> = Result<T, TrackerError>;
