//! Application state for the shift tracker API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::clock::TimeClock;
use crate::config::DepartmentConfig;
use crate::store::ShiftStore;

/// Shared application state.
///
/// The store sits behind a read-write lock: handlers take snapshots under
/// the read lock and apply transitions under the write lock, and never hold
/// either across an await point.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<ShiftStore>>,
    clock: Arc<TimeClock>,
    department: Arc<DepartmentConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: ShiftStore, clock: Arc<TimeClock>, department: DepartmentConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            clock,
            department: Arc::new(department),
        }
    }

    /// Returns the shared store.
    pub fn store(&self) -> &RwLock<ShiftStore> {
        &self.store
    }

    /// Returns the display clock.
    pub fn clock(&self) -> &TimeClock {
        &self.clock
    }

    /// Returns the department settings.
    pub fn department(&self) -> &DepartmentConfig {
        &self.department
    }
}
