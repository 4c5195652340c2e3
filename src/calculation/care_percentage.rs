//! Care percentage calculation.

use rust_decimal::Decimal;

/// Nights in an assessment year.
pub const NIGHTS_PER_YEAR: u32 = 365;

/// Converts annual nights of care into a percentage of the year.
///
/// No range check is applied: more than 365 nights yields more than 100%.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::care_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(care_percentage(365), Decimal::ONE_HUNDRED);
/// assert_eq!(care_percentage(0), Decimal::ZERO);
/// assert_eq!(care_percentage(290).round_dp(2), Decimal::new(7945, 2));
/// ```
pub fn care_percentage(nights: u32) -> Decimal {
    Decimal::from(nights) / Decimal::from(NIGHTS_PER_YEAR) * Decimal::ONE_HUNDRED
}
