//! Core data models for the Child Support Assessment Engine.
//!
//! This module contains the inputs, results and history records used
//! throughout the engine.

mod calculation_result;
mod history;
mod inputs;
mod wage;

pub use calculation_result::{CalculationStep, ChildSupportResult};
pub use history::{
    CALCULATION_HISTORY_LIMIT, CalculationHistory, CalculationRecord, WAGE_HISTORY_LIMIT,
    WageHistory, WageRecord,
};
pub use inputs::{ChildSupportInputs, Party};
pub use wage::WageCheckResult;
