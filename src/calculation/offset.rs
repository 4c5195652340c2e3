//! Final amount and offset rule (step 8).
//!
//! Each party's raw amount is their child support percentage applied to the
//! costs of the children. When both raw amounts are positive only the
//! difference is transferred.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Party;

/// The resolved transfer between the parties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalAmount {
    /// Party A's raw (signed) annual amount.
    pub party_a_amount: Decimal,
    /// Party B's raw (signed) annual amount.
    pub party_b_amount: Decimal,
    /// Annual amount actually transferred, never negative.
    pub final_amount: Decimal,
    /// True when both raw amounts were positive and were offset.
    pub offset_applied: bool,
    /// Who pays `final_amount`. `None` when nothing is payable.
    pub paying_party: Option<Party>,
    /// Party A's raw amount per child, floored at zero.
    pub party_a_per_child: Decimal,
    /// Party B's raw amount per child, floored at zero.
    pub party_b_per_child: Decimal,
}

/// Resolves both parties' support percentages into a single transfer.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::resolve_final_amount;
/// use child_support_engine::models::Party;
/// use rust_decimal::Decimal;
///
/// // Both parties owe: 30% and 10% of $10,000 offset to $2,000.
/// let result = resolve_final_amount(
///     Decimal::new(30, 2),
///     Decimal::new(10, 2),
///     Decimal::from(5_000),
///     2,
/// );
/// assert!(result.offset_applied);
/// assert_eq!(result.final_amount, Decimal::from(2_000));
/// assert_eq!(result.paying_party, Some(Party::PartyA));
/// ```
pub fn resolve_final_amount(
    party_a_support_percent: Decimal,
    party_b_support_percent: Decimal,
    per_child_cotc: Decimal,
    number_of_children: u32,
) -> FinalAmount {
    let children = Decimal::from(number_of_children);
    let party_a_amount = party_a_support_percent
        .saturating_mul(per_child_cotc)
        .saturating_mul(children);
    let party_b_amount = party_b_support_percent
        .saturating_mul(per_child_cotc)
        .saturating_mul(children);

    let offset_applied = party_a_amount > Decimal::ZERO && party_b_amount > Decimal::ZERO;
    let final_amount = if offset_applied {
        party_a_amount.saturating_sub(party_b_amount).abs()
    } else {
        Decimal::ZERO.max(party_a_amount).max(party_b_amount)
    };

    let paying_party = if final_amount <= Decimal::ZERO {
        None
    } else if party_a_amount >= party_b_amount {
        Some(Party::PartyA)
    } else {
        Some(Party::PartyB)
    };

    let per_child = |amount: Decimal| {
        amount
            .max(Decimal::ZERO)
            .checked_div(children)
            .unwrap_or(Decimal::ZERO)
    };

    FinalAmount {
        party_a_amount,
        party_b_amount,
        final_amount,
        offset_applied,
        paying_party,
        party_a_per_child: per_child(party_a_amount),
        party_b_per_child: per_child(party_b_amount),
    }
}
