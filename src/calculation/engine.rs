//! The 8-step child support assessment.
//!
//! [`assess`] runs the numbers: income split, care, cost, support
//! percentage, costs of the children and the final amount. [`calculate`]
//! wraps that with the step records shown to users.
//!
//! Both are pure functions of their inputs and the rate table. They never
//! fail: negative incomes clamp to zero CSI, zero combined income gives zero
//! income percentages, zero children give a zero per-child cost, and amounts
//! beyond the `Decimal` range saturate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::RateTable;
use crate::error::EngineResult;
use crate::models::{ChildSupportInputs, ChildSupportResult};

use super::care_percentage::care_percentage;
use super::cost_percentage::cost_percentage;
use super::costs_of_children::{CostsOfChildren, calculate_costs_of_children};
use super::income_split::{IncomeSplit, split_income};
use super::offset::{FinalAmount, resolve_final_amount};
use super::steps::record_steps;
use super::support_percentage::support_percentage;
use super::validation::validate_inputs;

/// Every intermediate figure of one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentBreakdown {
    /// Steps 1-3.
    pub income: IncomeSplit,
    /// Party A's care percentage (0-100).
    pub party_a_care_percent: Decimal,
    /// Party B's care percentage (0-100).
    pub party_b_care_percent: Decimal,
    /// Party A's cost share (0-1).
    pub party_a_cost_percent: Decimal,
    /// Party B's cost share (0-1).
    pub party_b_cost_percent: Decimal,
    /// Party A's signed child support fraction.
    pub party_a_support_percent: Decimal,
    /// Party B's signed child support fraction.
    pub party_b_support_percent: Decimal,
    /// Step 7.
    pub costs: CostsOfChildren,
    /// Step 8.
    pub outcome: FinalAmount,
}

/// Runs the numeric part of the assessment.
pub fn assess(inputs: &ChildSupportInputs, rates: &RateTable) -> AssessmentBreakdown {
    let income = split_income(
        inputs.party_a_income,
        inputs.party_b_income,
        rates.self_support_amount,
    );

    let party_a_care_percent = care_percentage(inputs.party_a_care_nights);
    let party_b_care_percent = care_percentage(inputs.party_b_care_nights);

    let party_a_cost_percent = cost_percentage(party_a_care_percent, &rates.care_cost_bands);
    let party_b_cost_percent = cost_percentage(party_b_care_percent, &rates.care_cost_bands);

    let party_a_support_percent =
        support_percentage(income.party_a_income_percent, party_a_cost_percent);
    let party_b_support_percent =
        support_percentage(income.party_b_income_percent, party_b_cost_percent);

    let costs = calculate_costs_of_children(
        income.combined_csi,
        inputs.number_of_children,
        &rates.costs_of_children,
    );

    let outcome = resolve_final_amount(
        party_a_support_percent,
        party_b_support_percent,
        costs.per_child,
        inputs.number_of_children,
    );

    AssessmentBreakdown {
        income,
        party_a_care_percent,
        party_b_care_percent,
        party_a_cost_percent,
        party_b_cost_percent,
        party_a_support_percent,
        party_b_support_percent,
        costs,
        outcome,
    }
}

/// Calculates a child support assessment with its eight step records.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::calculate;
/// use child_support_engine::config::RateTable;
/// use child_support_engine::models::{ChildSupportInputs, Party};
/// use rust_decimal::Decimal;
///
/// let inputs = ChildSupportInputs {
///     party_a_income: Decimal::from(50_000),
///     party_b_income: Decimal::from(60_000),
///     number_of_children: 3,
///     child_ages: vec![9, 7, 5],
///     party_a_care_nights: 290,
///     party_b_care_nights: 75,
///     reference_wage: Decimal::from(97_000),
/// };
///
/// let result = calculate(&inputs, &RateTable::fy_2024_25());
/// assert_eq!(result.steps.len(), 8);
/// assert!(!result.offset_applied);
/// assert_eq!(result.paying_party, Some(Party::PartyB));
/// assert_eq!(result.final_amount.round_dp(2), Decimal::new(486_245, 2));
/// ```
pub fn calculate(inputs: &ChildSupportInputs, rates: &RateTable) -> ChildSupportResult {
    let breakdown = assess(inputs, rates);
    let steps = record_steps(inputs, rates, &breakdown);
    let outcome = breakdown.outcome;

    debug!(
        financial_year = %rates.financial_year,
        combined_csi = %breakdown.income.combined_csi,
        total_cotc = %breakdown.costs.total,
        final_amount = %outcome.final_amount,
        offset_applied = outcome.offset_applied,
        "Child support assessment calculated"
    );

    ChildSupportResult {
        steps,
        final_amount: outcome.final_amount,
        party_a_per_child: outcome.party_a_per_child,
        party_b_per_child: outcome.party_b_per_child,
        offset_applied: outcome.offset_applied,
        paying_party: outcome.paying_party,
    }
}

/// Validates the inputs, then calculates.
pub fn calculate_validated(
    inputs: &ChildSupportInputs,
    rates: &RateTable,
) -> EngineResult<ChildSupportResult> {
    validate_inputs(inputs)?;
    Ok(calculate(inputs, rates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::Party;
    use proptest::prelude::{any, prop_assert, prop_assert_eq, prop_assume, proptest};

    fn rates() -> RateTable {
        RateTable::fy_2024_25()
    }

    fn tolerance() -> Decimal {
        Decimal::new(1, 18)
    }

    fn worked_example() -> ChildSupportInputs {
        ChildSupportInputs {
            party_a_income: Decimal::from(50_000),
            party_b_income: Decimal::from(60_000),
            number_of_children: 3,
            child_ages: vec![9, 7, 5],
            party_a_care_nights: 290,
            party_b_care_nights: 75,
            reference_wage: Decimal::from(97_000),
        }
    }

    fn inputs(a_income: u32, b_income: u32, children: u32, a_nights: u32) -> ChildSupportInputs {
        ChildSupportInputs {
            party_a_income: Decimal::from(a_income),
            party_b_income: Decimal::from(b_income),
            number_of_children: children,
            child_ages: vec![5; children as usize],
            party_a_care_nights: a_nights,
            party_b_care_nights: 365 - a_nights,
            reference_wage: Decimal::ZERO,
        }
    }

    #[test]
    fn test_worked_example_breakdown() {
        let b = assess(&worked_example(), &rates());

        assert_eq!(b.income.combined_csi, Decimal::from(50_318));
        assert_eq!(b.party_a_cost_percent, Decimal::new(76, 2));
        assert_eq!(b.party_b_cost_percent, Decimal::new(24, 2));
        assert_eq!(
            (b.party_a_support_percent * Decimal::ONE_HUNDRED).round_dp(2),
            Decimal::new(-3594, 2)
        );
        assert_eq!(b.costs.total, Decimal::new(1_353_056, 2));
        assert!(b.outcome.party_a_amount < Decimal::ZERO);
        assert!(b.outcome.party_b_amount > Decimal::ZERO);
    }

    #[test]
    fn test_worked_example_result() {
        let result = calculate(&worked_example(), &rates());

        assert!(!result.offset_applied);
        assert_eq!(result.paying_party, Some(Party::PartyB));
        assert_eq!(result.final_amount.round_dp(2), Decimal::new(486_245, 2));
        assert_eq!(result.party_a_per_child, Decimal::ZERO);
        assert_eq!(
            result.party_b_per_child.round_dp(2),
            Decimal::new(162_082, 2)
        );
        assert_eq!(result.step(8).unwrap().value, result.final_amount);
    }

    #[test]
    fn test_offset_applies_when_both_owe() {
        // Little care on either side: both cost shares are zero.
        let mut i = inputs(90_000, 70_000, 2, 40);
        i.party_b_care_nights = 40;
        let result = calculate(&i, &rates());
        let b = assess(&i, &rates());

        assert!(result.offset_applied);
        assert_eq!(result.paying_party, Some(Party::PartyA));
        assert_eq!(
            result.final_amount,
            (b.outcome.party_a_amount - b.outcome.party_b_amount).abs()
        );
        assert!(result.party_a_per_child > Decimal::ZERO);
        assert!(result.party_b_per_child > Decimal::ZERO);
    }

    #[test]
    fn test_both_below_self_support_pays_nothing() {
        let result = calculate(&inputs(20_000, 25_000, 2, 200), &rates());

        assert_eq!(result.final_amount, Decimal::ZERO);
        assert_eq!(result.paying_party, None);
        assert_eq!(result.step(3).unwrap().value, Decimal::ZERO);
        assert_eq!(
            result.step(3).unwrap().details["party_b_percent"],
            Decimal::ZERO
        );
    }

    #[test]
    fn test_zero_children_is_total() {
        let mut i = inputs(80_000, 60_000, 0, 200);
        i.child_ages.clear();
        let result = calculate(&i, &rates());

        assert_eq!(result.final_amount, Decimal::ZERO);
        assert_eq!(result.step(7).unwrap().details["per_child_cotc"], Decimal::ZERO);
    }

    #[test]
    fn test_shared_care_equal_income_pays_nothing() {
        // 182/183 nights: both in the 47-65% band, equal incomes.
        let result = calculate(&inputs(80_000, 80_000, 2, 182), &rates());
        assert_eq!(result.final_amount, Decimal::ZERO);
        assert!(!result.offset_applied);
    }

    #[test]
    fn test_extreme_incomes_do_not_overflow() {
        let mut i = worked_example();
        i.party_a_income = Decimal::MAX;
        i.party_b_income = Decimal::MAX;
        let result = calculate(&i, &rates());

        assert_eq!(result.steps.len(), 8);
        assert_eq!(result.step(2).unwrap().value, Decimal::MAX);
        assert!(result.final_amount > Decimal::ZERO);
    }

    #[test]
    fn test_most_negative_incomes_pay_nothing() {
        let mut i = worked_example();
        i.party_a_income = Decimal::MIN;
        i.party_b_income = Decimal::MIN;
        let result = calculate(&i, &rates());

        assert_eq!(result.final_amount, Decimal::ZERO);
        assert_eq!(result.paying_party, None);
    }

    #[test]
    fn test_calculate_validated_rejects_extreme_income() {
        let mut i = worked_example();
        i.party_b_income = Decimal::MAX;

        match calculate_validated(&i, &rates()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "party_b_income"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_validated_rejects_bad_nights() {
        let mut i = worked_example();
        i.party_b_care_nights = 10;

        match calculate_validated(&i, &rates()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "care_nights"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_calculate_validated_matches_calculate() {
        let i = worked_example();
        assert_eq!(calculate_validated(&i, &rates()).unwrap(), calculate(&i, &rates()));
    }

    proptest! {
        #[test]
        fn prop_csi_is_additive(a in 0u32..500_000, b in 0u32..500_000) {
            let split = assess(&inputs(a, b, 1, 100), &rates()).income;
            prop_assert_eq!(split.party_a_csi + split.party_b_csi, split.combined_csi);
        }

        #[test]
        fn prop_income_percentages_sum_to_one_hundred(a in 0u32..500_000, b in 0u32..500_000) {
            let split = assess(&inputs(a, b, 1, 100), &rates()).income;
            let total = split.party_a_income_percent + split.party_b_income_percent;
            if split.combined_csi > Decimal::ZERO {
                prop_assert!((total - Decimal::ONE_HUNDRED).abs() < tolerance());
            } else {
                prop_assert_eq!(split.party_a_income_percent, Decimal::ZERO);
                prop_assert_eq!(split.party_b_income_percent, Decimal::ZERO);
            }
        }

        #[test]
        fn prop_amounts_are_non_negative(
            a in 0u32..500_000,
            b in 0u32..500_000,
            children in 0u32..8,
            a_nights in 0u32..=365,
        ) {
            let result = calculate(&inputs(a, b, children, a_nights), &rates());
            prop_assert!(result.final_amount >= Decimal::ZERO);
            prop_assert!(result.party_a_per_child >= Decimal::ZERO);
            prop_assert!(result.party_b_per_child >= Decimal::ZERO);
        }

        #[test]
        fn prop_offset_rule_holds(
            a in 0u32..500_000,
            b in 0u32..500_000,
            children in 1u32..8,
            a_nights in 0u32..=365,
        ) {
            let i = inputs(a, b, children, a_nights);
            let outcome = assess(&i, &rates()).outcome;
            let a_amount = outcome.party_a_amount;
            let b_amount = outcome.party_b_amount;

            if a_amount > Decimal::ZERO && b_amount > Decimal::ZERO {
                prop_assert!(outcome.offset_applied);
                prop_assert_eq!(outcome.final_amount, (a_amount - b_amount).abs());
            } else {
                prop_assert!(!outcome.offset_applied);
                prop_assert_eq!(
                    outcome.final_amount,
                    Decimal::ZERO.max(a_amount).max(b_amount)
                );
            }
        }

        #[test]
        fn prop_more_care_never_lowers_cost_share(low in 0u32..365, extra in 1u32..=365) {
            let high = (low + extra).min(365);
            prop_assume!(high > low);
            let bands = &rates().care_cost_bands;
            prop_assert!(
                cost_percentage(care_percentage(high), bands)
                    >= cost_percentage(care_percentage(low), bands)
            );
        }

        #[test]
        fn prop_calculate_is_total_for_any_decimal(
            a_parts in any::<(u32, u32, u32, bool)>(),
            b_parts in any::<(u32, u32, u32, bool)>(),
            a_scale in 0u32..=28,
            b_scale in 0u32..=28,
            children in 0u32..8,
            a_nights in 0u32..=365,
        ) {
            let mut i = inputs(0, 0, children, a_nights);
            i.party_a_income = Decimal::from_parts(a_parts.0, a_parts.1, a_parts.2, a_parts.3, a_scale);
            i.party_b_income = Decimal::from_parts(b_parts.0, b_parts.1, b_parts.2, b_parts.3, b_scale);

            let result = calculate(&i, &rates());
            prop_assert_eq!(result.steps.len(), 8);
            prop_assert!(result.final_amount >= Decimal::ZERO);
        }

        #[test]
        fn prop_calculation_is_idempotent(
            a in 0u32..500_000,
            b in 0u32..500_000,
            children in 0u32..8,
            a_nights in 0u32..=365,
        ) {
            let i = inputs(a, b, children, a_nights);
            prop_assert_eq!(calculate(&i, &rates()), calculate(&i, &rates()));
        }
    }
}
