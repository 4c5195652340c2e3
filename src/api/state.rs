//! Application state for the Child Support Assessment Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::ConfigLoader;
use crate::models::{CalculationHistory, WageHistory};

/// Shared application state.
///
/// The rate configuration is read-only. The two history logs are the only
/// mutable state and sit behind their own locks.
#[derive(Clone)]
pub struct AppState {
    /// The loaded rate configuration.
    config: Arc<ConfigLoader>,
    /// Saved calculations.
    history: Arc<Mutex<CalculationHistory>>,
    /// Recorded wages.
    wages: Arc<Mutex<WageHistory>>,
}

/// Locks a mutex, recovering the data if another handler panicked while
/// holding it. Both logs stay structurally valid after any partial update.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
            history: Arc::new(Mutex::new(CalculationHistory::new())),
            wages: Arc::new(Mutex::new(WageHistory::new())),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Locks and returns the calculation history.
    pub fn history(&self) -> MutexGuard<'_, CalculationHistory> {
        lock(&self.history)
    }

    /// Locks and returns the wage history.
    pub fn wages(&self) -> MutexGuard<'_, WageHistory> {
        lock(&self.wages)
    }
}
