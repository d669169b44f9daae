//! Shift tracking and live earnings for a small department.
//!
//! This crate keeps the authoritative shift state of a team of employees,
//! accrues hours and earnings as shifts close, and derives live per-employee
//! values and department aggregates from a snapshot and a single instant.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
