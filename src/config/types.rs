//! Configuration types for the shift tracker.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::NewEmployee;
use crate::store::TransitionPolicy;

/// Default display clock cadence.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Default HTTP bind address.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";

/// Department settings from `department.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartmentConfig {
    /// The department's display name.
    pub name: String,
    /// Currency code the hourly rates are expressed in (e.g., "RUB").
    pub currency: String,
    /// Display clock settings.
    #[serde(default)]
    pub clock: ClockConfig,
    /// Shift transition settings.
    #[serde(default)]
    pub shifts: ShiftPolicyConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

/// Display clock settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    /// Milliseconds between clock samples.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl ClockConfig {
    /// The sampling period as a `Duration`.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

/// Shift transition settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShiftPolicyConfig {
    /// How repeated start and end requests are treated.
    #[serde(default)]
    pub transition_policy: TransitionPolicy,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

/// Roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Employees to seed the store with, in display order.
    #[serde(default)]
    pub employees: Vec<EmployeeSeed>,
}

/// One employee in `roster.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeSeed {
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
    /// If set, the employee starts with a shift opened this many minutes
    /// before the store is built.
    #[serde(default)]
    pub on_shift_for_minutes: Option<u32>,
}

impl EmployeeSeed {
    /// The provisioning input for this seed.
    pub fn to_new_employee(&self) -> NewEmployee {
        NewEmployee {
            name: self.name.clone(),
            position: self.position.clone(),
            hourly_rate: self.hourly_rate,
            total_hours_today: self.total_hours_today,
            total_earnings_today: self.total_earnings_today,
        }
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Department settings.
    department: DepartmentConfig,
    /// Seed roster.
    roster: RosterConfig,
}

impl TrackerConfig {
    /// Creates a new TrackerConfig from its component parts.
    pub fn new(department: DepartmentConfig, roster: RosterConfig) -> Self {
        Self { department, roster }
    }

    /// Returns the department settings.
    pub fn department(&self) -> &DepartmentConfig {
        &self.department
    }

    /// Returns the seed employees.
    pub fn employees(&self) -> &[EmployeeSeed] {
        &self.roster.employees
    }
}
