//! Calculation logic for the Child Support Assessment Engine.
//!
//! This module contains the 8-step assessment formula (income split, care
//! percentage, cost percentage lookup, child support percentage, costs of
//! the children and the offset rule), the step records that explain it, the
//! 15% wage reduction check, and boundary validation of inputs.

mod care_percentage;
mod cost_percentage;
mod costs_of_children;
mod engine;
mod income_split;
mod offset;
mod steps;
mod support_percentage;
mod validation;
mod wage_threshold;

pub use care_percentage::{NIGHTS_PER_YEAR, care_percentage};
pub use cost_percentage::cost_percentage;
pub use costs_of_children::{CostsOfChildren, calculate_costs_of_children};
pub use engine::{AssessmentBreakdown, assess, calculate, calculate_validated};
pub use income_split::{IncomeSplit, child_support_income, split_income};
pub use offset::{FinalAmount, resolve_final_amount};
pub use steps::{format_currency, format_percentage, record_steps};
pub use support_percentage::support_percentage;
pub use validation::{MAX_MONETARY_AMOUNT, validate_amount, validate_inputs};
pub use wage_threshold::{check_wage_reduction, wage_threshold};
