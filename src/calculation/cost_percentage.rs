//! Cost percentage lookup.
//!
//! Maps a care percentage to the share of the children's costs a party is
//! taken to meet through that care. The table is a step function: values are
//! never interpolated between bands.

use rust_decimal::Decimal;

use crate::config::CareCostBand;

/// Looks up the cost share (0-1) for a care percentage.
///
/// Returns the `cost_percent` of the first band whose `max_care_percent` is at
/// least `care_percent`. Care above the last band takes the last band's
/// value; an empty table yields zero.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::cost_percentage;
/// use child_support_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::fy_2024_25();
/// let share = cost_percentage(Decimal::new(7945, 2), &rates.care_cost_bands);
/// assert_eq!(share, Decimal::new(76, 2));
/// ```
pub fn cost_percentage(care_percent: Decimal, bands: &[CareCostBand]) -> Decimal {
    bands
        .iter()
        .find(|band| care_percent <= band.max_care_percent)
        .or_else(|| bands.last())
        .map(|band| band.cost_percent)
        .unwrap_or(Decimal::ZERO)
}
