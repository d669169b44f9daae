//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading department
//! configurations from YAML files and building a seeded store from them.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use chrono::TimeDelta;
use tracing::info;

use crate::clock::TimeSource;
use crate::error::{TrackerError, TrackerResult};
use crate::store::ShiftStore;

use super::types::{DepartmentConfig, RosterConfig, TrackerConfig};

/// Loads and provides access to department configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── department.yaml  # Name, currency, clock, policy, server
/// └── roster.yaml      # Seed employees
/// ```
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use shift_tracker::clock::SystemTimeSource;
/// use shift_tracker::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let store = loader.build_store(Arc::new(SystemTimeSource))?;
/// println!("{}: {} employees", loader.department().name, store.len());
/// # Ok::<(), shift_tracker::error::TrackerError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TrackerConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A value is out of range, such as a zero tick interval or a negative
    ///   rate (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> TrackerResult<Self> {
        let path = path.as_ref();

        let department_path = path.join("department.yaml");
        let department = Self::load_yaml::<DepartmentConfig>(&department_path)?;

        let roster_path = path.join("roster.yaml");
        let roster = Self::load_yaml::<RosterConfig>(&roster_path)?;

        let config = TrackerConfig::new(department, roster);
        Self::validate(&config, path)?;

        info!(
            path = %path.display(),
            department = %config.department().name,
            employees = config.employees().len(),
            "Configuration loaded"
        );
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> TrackerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| TrackerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| TrackerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate(config: &TrackerConfig, dir: &Path) -> TrackerResult<()> {
        if config.department().clock.tick_interval_ms == 0 {
            return Err(TrackerError::ConfigParseError {
                path: dir.join("department.yaml").display().to_string(),
                message: "clock.tick_interval_ms must be greater than zero".to_string(),
            });
        }

        for (index, seed) in config.employees().iter().enumerate() {
            if let Err(err) = seed.to_new_employee().validate() {
                return Err(TrackerError::ConfigParseError {
                    path: dir.join("roster.yaml").display().to_string(),
                    message: format!("employees[{}]: {}", index, err),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns the department settings.
    pub fn department(&self) -> &DepartmentConfig {
        self.config.department()
    }

    /// Builds a store seeded with the roster.
    ///
    /// Employees are added in file order, so ids follow the roster. Seeds with
    /// `on_shift_for_minutes` get a shift opened that many minutes before the
    /// source's current instant.
    pub fn build_store(&self, source: Arc<dyn TimeSource>) -> TrackerResult<ShiftStore> {
        let now = source.now();
        let mut store =
            ShiftStore::new(source).with_policy(self.department().shifts.transition_policy);

        for seed in self.config.employees() {
            let id = store.add_employee(seed.to_new_employee())?;
            if let Some(minutes) = seed.on_shift_for_minutes {
                store.start_shift_at(id, now - TimeDelta::minutes(i64::from(minutes)))?;
            }
        }
        Ok(store)
    }
}
