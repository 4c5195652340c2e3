//! Child support percentage.

use rust_decimal::Decimal;

/// Combines an income percentage (0-100) and a cost share (0-1) into a
/// signed child support fraction.
///
/// A positive result marks a net payer, a negative one a net recipient.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::support_percentage;
/// use rust_decimal::Decimal;
///
/// let csp = support_percentage(Decimal::from(40), Decimal::new(76, 2));
/// assert_eq!(csp, Decimal::new(-36, 2));
/// ```
pub fn support_percentage(income_percent: Decimal, cost_percent: Decimal) -> Decimal {
    (income_percent / Decimal::ONE_HUNDRED).saturating_sub(cost_percent)
}
