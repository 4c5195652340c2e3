//! Wage check result model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of comparing a new wage against a previously recorded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageCheckResult {
    /// Drop from the previous wage, in percent. Negative when the wage rose.
    pub percentage_drop: Decimal,
    /// True when the drop meets the wage reduction threshold.
    pub qualifies: bool,
    /// The wage at or below which a new estimate can be requested.
    pub threshold_amount: Decimal,
}
