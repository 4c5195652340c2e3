//! Configuration types for child support assessment.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML files in a scheme configuration directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata about the assessment scheme.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemeMetadata {
    /// Short identifier for the legislation (e.g., "CSA-1989").
    pub code: String,
    /// The human-readable name of the legislation.
    pub name: String,
    /// The rate year this configuration set was last reviewed against.
    pub version: String,
    /// URL to the official guide.
    pub source_url: String,
}

/// One band of the care percentage to cost percentage table.
///
/// A care percentage falls into the first band whose `max_care_percent`
/// is greater than or equal to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareCostBand {
    /// Upper bound (inclusive) of this band, as a percentage (0-100).
    pub max_care_percent: Decimal,
    /// The cost share for this band, as a fraction (0-1).
    pub cost_percent: Decimal,
}

impl CareCostBand {
    /// Creates a band from its upper bound and cost share.
    pub fn new(max_care_percent: Decimal, cost_percent: Decimal) -> Self {
        Self {
            max_care_percent,
            cost_percent,
        }
    }
}

/// Constants for the Costs of the Children formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostsOfChildrenRates {
    /// Cost attributed to the children at or below the threshold.
    pub base_cost: Decimal,
    /// Combined CSI above which the additional rate applies.
    pub threshold: Decimal,
    /// Fraction of combined CSI above the threshold added to the base cost.
    pub additional_rate: Decimal,
}

/// A complete, immutable rate table for one financial year.
///
/// A `RateTable` is read-only once loaded. Moving to a new rate year means
/// loading a new table and replacing the old one as a unit.
///
/// # Example
///
/// ```
/// use child_support_engine::config::RateTable;
/// use rust_decimal::Decimal;
///
/// let rates = RateTable::fy_2024_25();
/// assert_eq!(rates.financial_year, "2024-2025");
/// assert_eq!(rates.self_support_amount, Decimal::from(29841));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// The financial year label (e.g., "2024-2025").
    pub financial_year: String,
    /// First day on which this table applies.
    pub effective_date: NaiveDate,
    /// Amount subtracted from each party's ATI to obtain their CSI.
    pub self_support_amount: Decimal,
    /// Costs of the Children constants.
    pub costs_of_children: CostsOfChildrenRates,
    /// Care to cost bands, ordered by strictly increasing upper bound.
    pub care_cost_bands: Vec<CareCostBand>,
    /// Minimum fractional wage drop that qualifies for a new estimate.
    pub wage_reduction_percentage: Decimal,
}

impl RateTable {
    /// Returns the built-in 2024-2025 rate table.
    ///
    /// The same values ship in `config/child_support/rates/2024-2025.yaml`.
    pub fn fy_2024_25() -> Self {
        let band = |max: i64, cost: i64| CareCostBand::new(Decimal::from(max), Decimal::new(cost, 2));

        Self {
            financial_year: "2024-2025".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap_or_default(),
            self_support_amount: Decimal::from(29_841),
            costs_of_children: CostsOfChildrenRates {
                base_cost: Decimal::from(12_086),
                threshold: Decimal::from(44_762),
                additional_rate: Decimal::new(26, 2),
            },
            care_cost_bands: vec![
                band(14, 0),
                band(34, 24),
                band(47, 50),
                band(65, 65),
                band(85, 76),
                band(100, 82),
            ],
            wage_reduction_percentage: Decimal::new(15, 2),
        }
    }

    /// Checks that the table is usable by the engine.
    ///
    /// Bands must be non-empty, strictly increasing in `max_care_percent`,
    /// and carry cost shares in [0, 1]. Monetary constants and rates must be
    /// non-negative, and the wage reduction percentage must lie in [0, 1].
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |message: String| EngineError::InvalidRateTable {
            financial_year: self.financial_year.clone(),
            message,
        };

        if self.care_cost_bands.is_empty() {
            return Err(invalid("care cost bands are empty".to_string()));
        }

        for pair in self.care_cost_bands.windows(2) {
            if pair[1].max_care_percent <= pair[0].max_care_percent {
                return Err(invalid(format!(
                    "care cost bands must increase: {} follows {}",
                    pair[1].max_care_percent, pair[0].max_care_percent
                )));
            }
        }

        if let Some(band) = self
            .care_cost_bands
            .iter()
            .find(|b| b.cost_percent < Decimal::ZERO || b.cost_percent > Decimal::ONE)
        {
            return Err(invalid(format!(
                "cost percent {} is outside [0, 1]",
                band.cost_percent
            )));
        }

        let cotc = &self.costs_of_children;
        if self.self_support_amount < Decimal::ZERO
            || cotc.base_cost < Decimal::ZERO
            || cotc.threshold < Decimal::ZERO
            || cotc.additional_rate < Decimal::ZERO
        {
            return Err(invalid("monetary constants must be non-negative".to_string()));
        }

        if self.wage_reduction_percentage < Decimal::ZERO
            || self.wage_reduction_percentage > Decimal::ONE
        {
            return Err(invalid(format!(
                "wage reduction percentage {} is outside [0, 1]",
                self.wage_reduction_percentage
            )));
        }

        Ok(())
    }
}

/// The complete scheme configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct SchemeConfig {
    metadata: SchemeMetadata,
    /// Rate tables sorted oldest effective date first.
    rates: Vec<RateTable>,
}

impl SchemeConfig {
    /// Creates a new SchemeConfig, sorting rate tables by effective date.
    pub fn new(metadata: SchemeMetadata, rates: Vec<RateTable>) -> Self {
        let mut sorted_rates = rates;
        sorted_rates.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Self {
            metadata,
            rates: sorted_rates,
        }
    }

    /// Returns the scheme metadata.
    pub fn scheme(&self) -> &SchemeMetadata {
        &self.metadata
    }

    /// Returns all rate tables, oldest first.
    pub fn rates(&self) -> &[RateTable] {
        &self.rates
    }
}
