//! Request types for the Child Support Assessment Engine API.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ChildSupportInputs;

/// Request body for `POST /calculate`.
///
/// The assessment inputs, plus an optional financial year selecting the rate
/// table. Without a year the most recent table is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Rate year to use (e.g., "2024-2025").
    #[serde(default)]
    pub financial_year: Option<String>,
    /// The assessment inputs.
    #[serde(flatten)]
    pub inputs: ChildSupportInputs,
}

/// Request body for `POST /wage-check`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageCheckRequest {
    /// The new annual wage.
    pub new_wage: Decimal,
    /// The previously recorded annual wage.
    pub previous_wage: Decimal,
    /// Rate year to use (e.g., "2024-2025").
    #[serde(default)]
    pub financial_year: Option<String>,
}

/// Request body for `POST /wages`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageRecordRequest {
    /// The annual wage to record.
    pub wage: Decimal,
}
