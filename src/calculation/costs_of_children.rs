//! Costs of the Children (COTC) calculation.
//!
//! The total cost is a base amount plus a fixed rate on combined CSI above a
//! threshold. Children's ages do not currently change the result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::CostsOfChildrenRates;

/// The COTC breakdown (step 7).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostsOfChildren {
    /// Combined CSI above the COTC threshold, floored at zero.
    pub income_above_threshold: Decimal,
    /// The additional cost from income above the threshold.
    pub additional_amount: Decimal,
    /// Total annual cost of the children.
    pub total: Decimal,
    /// Total divided evenly between the children (zero with no children).
    pub per_child: Decimal,
}

/// Computes the costs of the children from combined CSI.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::calculate_costs_of_children;
/// use child_support_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::fy_2024_25();
/// let cotc = calculate_costs_of_children(Decimal::from(50_318), 3, &rates.costs_of_children);
/// assert_eq!(cotc.income_above_threshold, Decimal::from(5_556));
/// assert_eq!(cotc.total, Decimal::new(1_353_056, 2));
/// ```
pub fn calculate_costs_of_children(
    combined_csi: Decimal,
    number_of_children: u32,
    rates: &CostsOfChildrenRates,
) -> CostsOfChildren {
    let income_above_threshold = combined_csi
        .saturating_sub(rates.threshold)
        .max(Decimal::ZERO);
    let additional_amount = income_above_threshold.saturating_mul(rates.additional_rate);
    let total = rates.base_cost.saturating_add(additional_amount);

    // Zero children: checked_div yields None.
    let per_child = total
        .checked_div(Decimal::from(number_of_children))
        .unwrap_or(Decimal::ZERO);

    CostsOfChildren {
        income_above_threshold,
        additional_amount,
        total,
        per_child,
    }
}
