//! Configuration loading and management for the shift tracker.
//!
//! This module provides functionality to load department configurations from
//! YAML files: department metadata, display clock cadence, transition policy,
//! server settings and the seed roster.
//!
//! # Example
//!
//! ```no_run
//! use shift_tracker::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded department: {}", config.department().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ClockConfig, DEFAULT_BIND_ADDRESS, DEFAULT_TICK_INTERVAL_MS, DepartmentConfig, EmployeeSeed,
    RosterConfig, ServerConfig, ShiftPolicyConfig, TrackerConfig,
};
