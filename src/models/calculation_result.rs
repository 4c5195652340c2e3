//! Calculation result models for the Child Support Assessment Engine.
//!
//! This module contains [`ChildSupportResult`] and the [`CalculationStep`]
//! records that explain how it was reached.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Party;

/// A single step of the 8-step formula, ready for display.
///
/// `details` holds the named intermediate values for the step. It is an
/// ordered map so serialized output is stable between runs.
///
/// # Example
///
/// ```
/// use child_support_engine::models::CalculationStep;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let step = CalculationStep {
///     step_number: 2,
///     title: "Combined Child Support Income".to_string(),
///     description: "Add both parties' child support incomes".to_string(),
///     formula_text: "$20,159 + $30,159 = $50,318".to_string(),
///     value: Decimal::from(50_318),
///     details: BTreeMap::new(),
/// };
/// assert_eq!(step.step_number, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationStep {
    /// Position of the step in the formula (1-8).
    pub step_number: u32,
    /// Short title of the step.
    pub title: String,
    /// One-line explanation of what the step does.
    pub description: String,
    /// The formula with this assessment's figures substituted in.
    pub formula_text: String,
    /// The headline value of the step.
    pub value: Decimal,
    /// Named intermediate values.
    pub details: BTreeMap<String, Decimal>,
}

/// The complete result of a child support assessment.
///
/// Only one party can end up paying. A net-recipient party's per-child
/// amount is always zero, and `final_amount` is not in general equal to
/// `(party_a_per_child + party_b_per_child) * number_of_children` once the
/// offset rule has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSupportResult {
    /// The eight formula steps, in order.
    pub steps: Vec<CalculationStep>,
    /// Annual amount transferred between the parties.
    pub final_amount: Decimal,
    /// Party A's raw amount per child, floored at zero.
    pub party_a_per_child: Decimal,
    /// Party B's raw amount per child, floored at zero.
    pub party_b_per_child: Decimal,
    /// Whether both parties owed and only the difference is transferred.
    pub offset_applied: bool,
    /// The party who pays `final_amount`, if anything is payable.
    pub paying_party: Option<Party>,
}

impl ChildSupportResult {
    /// Returns the step with the given number, if present.
    pub fn step(&self, step_number: u32) -> Option<&CalculationStep> {
        self.steps.iter().find(|s| s.step_number == step_number)
    }

    /// Returns the amount payable per month (annual amount / 12).
    pub fn monthly_amount(&self) -> Decimal {
        self.final_amount / Decimal::from(12)
    }
}
