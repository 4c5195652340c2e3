//! 15% wage reduction check.
//!
//! A party whose wage has fallen by at least the wage reduction percentage
//! relative to a previously recorded wage may ask for a new estimate. The
//! check is independent of the 8-step formula and keeps no state.
//!
//! Both functions are total: arithmetic saturates at the `Decimal` range.

use rust_decimal::Decimal;

use crate::config::RateTable;
use crate::models::WageCheckResult;

/// Returns the wage at or below which the reduction rule is met.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::wage_threshold;
/// use child_support_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let threshold = wage_threshold(Decimal::from(97_000), &RateTable::fy_2024_25());
/// assert_eq!(threshold, Decimal::from(82_450));
/// ```
pub fn wage_threshold(previous_wage: Decimal, rates: &RateTable) -> Decimal {
    previous_wage.saturating_mul(Decimal::ONE.saturating_sub(rates.wage_reduction_percentage))
}

/// Compares a new wage against a previous one.
///
/// A previous wage of zero (or less) yields a zero drop, which never
/// qualifies unless the rate table's reduction percentage is zero.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::check_wage_reduction;
/// use child_support_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let check = check_wage_reduction(
///     Decimal::from(82_000),
///     Decimal::from(97_000),
///     &RateTable::fy_2024_25(),
/// );
/// assert!(check.qualifies);
/// assert_eq!(check.percentage_drop.round_dp(2), Decimal::new(1546, 2));
/// ```
pub fn check_wage_reduction(
    new_wage: Decimal,
    previous_wage: Decimal,
    rates: &RateTable,
) -> WageCheckResult {
    let threshold_amount = wage_threshold(previous_wage, rates);

    let percentage_drop = if previous_wage > Decimal::ZERO {
        previous_wage
            .saturating_sub(new_wage)
            .checked_div(previous_wage)
            .map_or(Decimal::ZERO, |ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
    } else {
        Decimal::ZERO
    };

    let qualifies = percentage_drop
        >= rates
            .wage_reduction_percentage
            .saturating_mul(Decimal::ONE_HUNDRED);

    WageCheckResult {
        percentage_drop,
        qualifies,
        threshold_amount,
    }
}
