//! Boundary validation for calculation inputs.
//!
//! [`calculate`](super::calculate) accepts anything and clamps. Callers that
//! receive inputs from outside the program should run [`validate_inputs`]
//! first so that inconsistent inputs are rejected instead of producing a
//! well-formed but meaningless assessment.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::ChildSupportInputs;

use super::care_percentage::NIGHTS_PER_YEAR;

/// Largest accepted income or wage.
pub const MAX_MONETARY_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0); // 1_000_000_000_000

/// Checks that a single income or wage lies within `[0, MAX_MONETARY_AMOUNT]`.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::{MAX_MONETARY_AMOUNT, validate_amount};
/// use rust_decimal::Decimal;
///
/// assert!(validate_amount("wage", Decimal::from(97_000)).is_ok());
/// assert!(validate_amount("wage", Decimal::from(-1)).is_err());
/// assert!(validate_amount("wage", MAX_MONETARY_AMOUNT + Decimal::ONE).is_err());
/// ```
pub fn validate_amount(field: &str, amount: Decimal) -> EngineResult<()> {
    if amount < Decimal::ZERO {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative (got {})", amount),
        ));
    }
    if amount > MAX_MONETARY_AMOUNT {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {}", MAX_MONETARY_AMOUNT),
        ));
    }
    Ok(())
}

/// Validates inputs before they reach the engine.
///
/// Checks, in order: incomes and reference wage are within
/// `[0, MAX_MONETARY_AMOUNT]`, there is at least one child, one age per
/// child, neither party has more than 365 nights, and the nights add up to
/// exactly 365. The first failure is returned.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::validate_inputs;
/// use child_support_engine::error::EngineError;
/// use child_support_engine::models::ChildSupportInputs;
/// use rust_decimal::Decimal;
///
/// let mut inputs = ChildSupportInputs {
///     party_a_income: Decimal::from(50_000),
///     party_b_income: Decimal::from(60_000),
///     number_of_children: 2,
///     child_ages: vec![9, 7],
///     party_a_care_nights: 290,
///     party_b_care_nights: 75,
///     reference_wage: Decimal::ZERO,
/// };
/// assert!(validate_inputs(&inputs).is_ok());
///
/// inputs.party_b_care_nights = 80;
/// assert!(matches!(
///     validate_inputs(&inputs),
///     Err(EngineError::InvalidInput { .. })
/// ));
/// ```
pub fn validate_inputs(inputs: &ChildSupportInputs) -> EngineResult<()> {
    validate_amount("party_a_income", inputs.party_a_income)?;
    validate_amount("party_b_income", inputs.party_b_income)?;
    validate_amount("reference_wage", inputs.reference_wage)?;

    if inputs.number_of_children == 0 {
        return Err(EngineError::invalid_input(
            "number_of_children",
            "at least one child is required",
        ));
    }

    if inputs.child_ages.len() != inputs.number_of_children as usize {
        return Err(EngineError::invalid_input(
            "child_ages",
            format!(
                "expected {} ages, got {}",
                inputs.number_of_children,
                inputs.child_ages.len()
            ),
        ));
    }

    for (field, nights) in [
        ("party_a_care_nights", inputs.party_a_care_nights),
        ("party_b_care_nights", inputs.party_b_care_nights),
    ] {
        if nights > NIGHTS_PER_YEAR {
            return Err(EngineError::invalid_input(
                field,
                format!("must be between 0 and {} (got {})", NIGHTS_PER_YEAR, nights),
            ));
        }
    }

    let total_nights = inputs.party_a_care_nights + inputs.party_b_care_nights;
    if total_nights != NIGHTS_PER_YEAR {
        return Err(EngineError::invalid_input(
            "care_nights",
            format!(
                "party nights must add up to {} (got {})",
                NIGHTS_PER_YEAR, total_nights
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_inputs() -> ChildSupportInputs {
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

    fn failing_field(inputs: &ChildSupportInputs) -> String {
        match validate_inputs(inputs) {
            Err(EngineError::InvalidInput { field, .. }) => field,
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_inputs_pass() {
        assert!(validate_inputs(&valid_inputs()).is_ok());
    }

    #[test]
    fn test_max_amount_is_one_trillion() {
        assert_eq!(MAX_MONETARY_AMOUNT, Decimal::from(1_000_000_000_000i64));
    }

    #[test]
    fn test_amount_bounds_are_inclusive() {
        assert!(validate_amount("wage", Decimal::ZERO).is_ok());
        assert!(validate_amount("wage", MAX_MONETARY_AMOUNT).is_ok());
    }

    #[test]
    fn test_extreme_amount_rejected_with_field() {
        match validate_amount("new_wage", Decimal::MAX) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "new_wage");
                assert!(message.contains("must not exceed"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_incomes_are_valid() {
        let mut inputs = valid_inputs();
        inputs.party_a_income = Decimal::ZERO;
        inputs.party_b_income = Decimal::ZERO;
        assert!(validate_inputs(&inputs).is_ok());
    }

    #[test]
    fn test_negative_income_rejected() {
        let mut inputs = valid_inputs();
        inputs.party_b_income = Decimal::from(-1);
        assert_eq!(failing_field(&inputs), "party_b_income");
    }

    #[test]
    fn test_oversized_income_rejected() {
        let mut inputs = valid_inputs();
        inputs.party_a_income = MAX_MONETARY_AMOUNT + Decimal::ONE;
        assert_eq!(failing_field(&inputs), "party_a_income");
    }

    #[test]
    fn test_negative_reference_wage_rejected() {
        let mut inputs = valid_inputs();
        inputs.reference_wage = Decimal::from(-100);
        assert_eq!(failing_field(&inputs), "reference_wage");
    }

    #[test]
    fn test_zero_children_rejected() {
        let mut inputs = valid_inputs();
        inputs.number_of_children = 0;
        inputs.child_ages.clear();
        assert_eq!(failing_field(&inputs), "number_of_children");
    }

    #[test]
    fn test_age_count_mismatch_rejected() {
        let mut inputs = valid_inputs();
        inputs.child_ages.pop();

        match validate_inputs(&inputs) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "child_ages");
                assert_eq!(message, "expected 3 ages, got 2");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_nights_above_year_rejected() {
        let mut inputs = valid_inputs();
        inputs.party_a_care_nights = 366;
        inputs.party_b_care_nights = 0;
        assert_eq!(failing_field(&inputs), "party_a_care_nights");
    }

    #[test]
    fn test_nights_not_summing_to_year_rejected() {
        let mut inputs = valid_inputs();
        inputs.party_a_care_nights = 100;
        inputs.party_b_care_nights = 100;

        match validate_inputs(&inputs) {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "care_nights");
                assert!(message.contains("got 200"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_sole_care_is_valid() {
        let mut inputs = valid_inputs();
        inputs.party_a_care_nights = 365;
        inputs.party_b_care_nights = 0;
        assert!(validate_inputs(&inputs).is_ok());
    }
}
