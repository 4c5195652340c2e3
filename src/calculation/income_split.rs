//! Child support income and income percentage calculation.
//!
//! Each party's child support income (CSI) is their adjusted taxable income
//! less the self-support amount, floored at zero. Their income percentage is
//! their share of the combined CSI.
//!
//! Arithmetic saturates at the `Decimal` range so that any input produces a
//! result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The income side of an assessment (steps 1-3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeSplit {
    /// Party A's child support income.
    pub party_a_csi: Decimal,
    /// Party B's child support income.
    pub party_b_csi: Decimal,
    /// Sum of both parties' child support incomes.
    pub combined_csi: Decimal,
    /// Party A's share of the combined CSI, in percent.
    pub party_a_income_percent: Decimal,
    /// Party B's share of the combined CSI, in percent.
    pub party_b_income_percent: Decimal,
}

/// Computes a party's child support income.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::child_support_income;
/// use rust_decimal::Decimal;
///
/// let self_support = Decimal::from(29_841);
/// assert_eq!(child_support_income(Decimal::from(50_000), self_support), Decimal::from(20_159));
/// assert_eq!(child_support_income(Decimal::from(20_000), self_support), Decimal::ZERO);
/// ```
pub fn child_support_income(income: Decimal, self_support_amount: Decimal) -> Decimal {
    income
        .saturating_sub(self_support_amount)
        .max(Decimal::ZERO)
}

/// Splits both parties' incomes into CSI and income percentages.
///
/// When neither party has any CSI both percentages are zero.
pub fn split_income(
    party_a_income: Decimal,
    party_b_income: Decimal,
    self_support_amount: Decimal,
) -> IncomeSplit {
    let party_a_csi = child_support_income(party_a_income, self_support_amount);
    let party_b_csi = child_support_income(party_b_income, self_support_amount);
    let combined_csi = party_a_csi.saturating_add(party_b_csi);

    let share = |csi: Decimal| {
        if combined_csi > Decimal::ZERO {
            csi.checked_div(combined_csi)
                .map_or(Decimal::ZERO, |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
        } else {
            Decimal::ZERO
        }
    };

    IncomeSplit {
        party_a_csi,
        party_b_csi,
        combined_csi,
        party_a_income_percent: share(party_a_csi),
        party_b_income_percent: share(party_b_csi),
    }
}
