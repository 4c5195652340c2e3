//! Calculation inputs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two parties to an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Party {
    /// The first party (parent A).
    PartyA,
    /// The second party (parent B).
    PartyB,
}

impl Party {
    /// Returns the display label used in step formulas.
    pub fn label(&self) -> &'static str {
        match self {
            Party::PartyA => "Party A",
            Party::PartyB => "Party B",
        }
    }
}

/// Everything the engine needs for one assessment.
///
/// The engine trusts these values. Run
/// [`validate_inputs`](crate::calculation::validate_inputs) first when they
/// come from outside the program.
///
/// # Example
///
/// ```
/// use child_support_engine::models::ChildSupportInputs;
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
/// assert_eq!(inputs.party_a_care_nights + inputs.party_b_care_nights, 365);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildSupportInputs {
    /// Party A's adjusted taxable income for the year.
    pub party_a_income: Decimal,
    /// Party B's adjusted taxable income for the year.
    pub party_b_income: Decimal,
    /// Number of children covered by the assessment.
    pub number_of_children: u32,
    /// Ages of the children, one entry per child.
    #[serde(default)]
    pub child_ages: Vec<u32>,
    /// Nights per year the children spend in party A's care.
    pub party_a_care_nights: u32,
    /// Nights per year the children spend in party B's care.
    pub party_b_care_nights: u32,
    /// The paying party's current wage, used only by the 15% wage check.
    ///
    /// Until a wage is recorded, the latest saved calculation's reference
    /// wage is the baseline for `POST /wages`. Zero means none was given.
    #[serde(default)]
    pub reference_wage: Decimal,
}

impl ChildSupportInputs {
    /// Returns the income for one party.
    pub fn income(&self, party: Party) -> Decimal {
        match party {
            Party::PartyA => self.party_a_income,
            Party::PartyB => self.party_b_income,
        }
    }

    /// Returns the nights of care for one party.
    pub fn care_nights(&self, party: Party) -> u32 {
        match party {
            Party::PartyA => self.party_a_care_nights,
            Party::PartyB => self.party_b_care_nights,
        }
    }
}
