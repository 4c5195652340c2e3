//! Capped history logs for saved calculations and recorded wages.
//!
//! These are plain in-memory, append-only logs. Where they are stored is up
//! to the caller; the record shapes serialize to the JSON layout used by the
//! calculator's saved history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use super::{ChildSupportInputs, ChildSupportResult};

/// Number of saved calculations retained.
pub const CALCULATION_HISTORY_LIMIT: usize = 50;

/// Number of recorded wages retained.
pub const WAGE_HISTORY_LIMIT: usize = 20;

/// A saved calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Identifier derived from the save time in epoch milliseconds.
    pub id: i64,
    /// When the calculation was saved.
    pub timestamp: DateTime<Utc>,
    /// The inputs the result was computed from.
    pub inputs: ChildSupportInputs,
    /// The computed result.
    pub result: ChildSupportResult,
}

/// A recorded wage observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageRecord {
    /// The annual wage.
    pub wage: Decimal,
    /// When the wage was recorded.
    pub timestamp: DateTime<Utc>,
}

/// Append-only log of saved calculations, newest last.
///
/// Holds at most [`CALCULATION_HISTORY_LIMIT`] records; the oldest is
/// evicted first.
///
/// # Example
///
/// ```
/// use child_support_engine::calculation::calculate;
/// use child_support_engine::config::RateTable;
/// use child_support_engine::models::{CalculationHistory, ChildSupportInputs};
/// use chrono::Utc;
/// use rust_decimal::Decimal;
///
/// let inputs = ChildSupportInputs {
///     party_a_income: Decimal::from(50_000),
///     party_b_income: Decimal::from(60_000),
///     number_of_children: 1,
///     child_ages: vec![4],
///     party_a_care_nights: 365,
///     party_b_care_nights: 0,
///     reference_wage: Decimal::ZERO,
/// };
/// let result = calculate(&inputs, &RateTable::fy_2024_25());
///
/// let mut history = CalculationHistory::new();
/// let record = history.save(inputs, result, Utc::now());
/// assert_eq!(history.len(), 1);
/// assert_eq!(history.records().next().unwrap().id, record.id);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalculationHistory {
    records: VecDeque<CalculationRecord>,
}

impl CalculationHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a calculation and returns the stored record.
    ///
    /// The id is the timestamp in epoch milliseconds, bumped past the
    /// newest existing id so ids stay strictly increasing.
    pub fn save(
        &mut self,
        inputs: ChildSupportInputs,
        result: ChildSupportResult,
        timestamp: DateTime<Utc>,
    ) -> CalculationRecord {
        let mut id = timestamp.timestamp_millis();
        if let Some(last) = self.records.back() {
            id = id.max(last.id + 1);
        }

        let record = CalculationRecord {
            id,
            timestamp,
            inputs,
            result,
        };
        self.records.push_back(record.clone());

        while self.records.len() > CALCULATION_HISTORY_LIMIT {
            self.records.pop_front();
        }

        record
    }

    /// Iterates records oldest first.
    pub fn records(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    /// Returns the most recently saved record.
    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.back()
    }

    /// Finds a record by id.
    pub fn get(&self, id: i64) -> Option<&CalculationRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when nothing has been saved.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Append-only log of recorded wages, newest last.
///
/// Holds at most [`WAGE_HISTORY_LIMIT`] records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WageHistory {
    records: VecDeque<WageRecord>,
}

impl WageHistory {
    /// Creates an empty wage history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a wage observation and returns it.
    pub fn record(&mut self, wage: Decimal, timestamp: DateTime<Utc>) -> WageRecord {
        let record = WageRecord { wage, timestamp };
        self.records.push_back(record.clone());

        while self.records.len() > WAGE_HISTORY_LIMIT {
            self.records.pop_front();
        }

        record
    }

    /// The most recently recorded wage.
    pub fn latest(&self) -> Option<&WageRecord> {
        self.records.back()
    }

    /// Iterates records oldest first.
    pub fn records(&self) -> impl Iterator<Item = &WageRecord> {
        self.records.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no wage has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
