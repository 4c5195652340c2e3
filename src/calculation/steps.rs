//! Human-readable step records.
//!
//! Turns an [`AssessmentBreakdown`] into the eight [`CalculationStep`]s shown
//! to users. Nothing here feeds back into the numbers.

use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::BTreeMap;

use crate::config::RateTable;
use crate::models::{CalculationStep, ChildSupportInputs, Party};

use super::care_percentage::NIGHTS_PER_YEAR;
use super::engine::AssessmentBreakdown;

/// Formats an amount as whole dollars with thousands separators.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1_353_056, 2)), "$13,531");
/// assert_eq!(format_currency(Decimal::from(-4_862)), "-$4,862");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if rounded < Decimal::ZERO {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Formats a percentage (0-100 scale) with a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use child_support_engine::calculation::format_percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_percentage(Decimal::new(400_632, 4), 2), "40.06%");
/// assert_eq!(format_percentage(Decimal::from(15), 1), "15.0%");
/// ```
pub fn format_percentage(percentage: Decimal, decimals: u32) -> String {
    let rounded =
        percentage.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}%", decimals as usize, rounded)
}

/// Scales a 0-1 fraction to the 0-100 scale used in step records.
fn as_percent(fraction: Decimal) -> Decimal {
    fraction.saturating_mul(Decimal::ONE_HUNDRED)
}

fn pct(value: Decimal) -> String {
    format_percentage(value, 2)
}

fn details<const N: usize>(entries: [(&str, Decimal); N]) -> BTreeMap<String, Decimal> {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn step(
    step_number: u32,
    title: &str,
    description: &str,
    formula_text: String,
    value: Decimal,
    details: BTreeMap<String, Decimal>,
) -> CalculationStep {
    CalculationStep {
        step_number,
        title: title.to_string(),
        description: description.to_string(),
        formula_text,
        value,
        details,
    }
}

/// Builds the eight step records for an assessment, in order.
pub fn record_steps(
    inputs: &ChildSupportInputs,
    rates: &RateTable,
    breakdown: &AssessmentBreakdown,
) -> Vec<CalculationStep> {
    let income = &breakdown.income;
    let costs = &breakdown.costs;
    let outcome = &breakdown.outcome;
    let self_support = rates.self_support_amount;

    let csi_formula = |party: Party, csi: Decimal| {
        format!(
            "{}: {} - {} = {}",
            party.label(),
            format_currency(inputs.income(party)),
            format_currency(self_support),
            format_currency(csi)
        )
    };

    let income_percent_formula = if income.combined_csi > Decimal::ZERO {
        format!(
            "Party A: {} / {} × 100 = {}; Party B: {} / {} × 100 = {}",
            format_currency(income.party_a_csi),
            format_currency(income.combined_csi),
            pct(income.party_a_income_percent),
            format_currency(income.party_b_csi),
            format_currency(income.combined_csi),
            pct(income.party_b_income_percent)
        )
    } else {
        "Combined child support income is $0, so both income percentages are 0%".to_string()
    };

    let children = inputs.number_of_children;
    let final_formula = if outcome.offset_applied {
        format!(
            "|{} - {}| = {} (offset applied)",
            format_currency(outcome.party_a_amount),
            format_currency(outcome.party_b_amount),
            format_currency(outcome.final_amount)
        )
    } else {
        match outcome.paying_party {
            Some(party) => {
                let support = match party {
                    Party::PartyA => breakdown.party_a_support_percent,
                    Party::PartyB => breakdown.party_b_support_percent,
                };
                format!(
                    "{}: {} × {} × {} {} = {}",
                    party.label(),
                    pct(as_percent(support)),
                    format_currency(costs.per_child),
                    children,
                    if children == 1 { "child" } else { "children" },
                    format_currency(outcome.final_amount)
                )
            }
            None => "No party has a positive child support amount; nothing is payable".to_string(),
        }
    };

    vec![
        step(
            1,
            "Child Support Income",
            "Each party's adjusted taxable income less the self-support amount",
            format!(
                "{}; {}",
                csi_formula(Party::PartyA, income.party_a_csi),
                csi_formula(Party::PartyB, income.party_b_csi)
            ),
            income.party_a_csi.saturating_add(income.party_b_csi),
            details([
                ("party_a_income", inputs.party_a_income),
                ("party_b_income", inputs.party_b_income),
                ("party_a_csi", income.party_a_csi),
                ("party_b_csi", income.party_b_csi),
                ("self_support_amount", self_support),
            ]),
        ),
        step(
            2,
            "Combined Child Support Income",
            "Add both parties' child support incomes",
            format!(
                "{} + {} = {}",
                format_currency(income.party_a_csi),
                format_currency(income.party_b_csi),
                format_currency(income.combined_csi)
            ),
            income.combined_csi,
            details([
                ("party_a_csi", income.party_a_csi),
                ("party_b_csi", income.party_b_csi),
                ("combined_csi", income.combined_csi),
            ]),
        ),
        step(
            3,
            "Income Percentage",
            "Each party's share of the combined child support income",
            income_percent_formula,
            income.party_a_income_percent,
            details([
                ("party_a_percent", income.party_a_income_percent),
                ("party_b_percent", income.party_b_income_percent),
            ]),
        ),
        step(
            4,
            "Care Percentage",
            "Share of the year's nights each party has the children in their care",
            format!(
                "Party A: {} / {} × 100 = {}; Party B: {} / {} × 100 = {}",
                inputs.party_a_care_nights,
                NIGHTS_PER_YEAR,
                pct(breakdown.party_a_care_percent),
                inputs.party_b_care_nights,
                NIGHTS_PER_YEAR,
                pct(breakdown.party_b_care_percent)
            ),
            breakdown.party_a_care_percent,
            details([
                ("party_a_nights", Decimal::from(inputs.party_a_care_nights)),
                ("party_b_nights", Decimal::from(inputs.party_b_care_nights)),
                ("party_a_percent", breakdown.party_a_care_percent),
                ("party_b_percent", breakdown.party_b_care_percent),
            ]),
        ),
        step(
            5,
            "Cost Percentage",
            "Share of the children's costs met through care, from the cost table",
            format!(
                "Party A: {} care → {} of costs; Party B: {} care → {} of costs",
                pct(breakdown.party_a_care_percent),
                pct(as_percent(breakdown.party_a_cost_percent)),
                pct(breakdown.party_b_care_percent),
                pct(as_percent(breakdown.party_b_cost_percent))
            ),
            as_percent(breakdown.party_a_cost_percent),
            details([
                (
                    "party_a_percent",
                    as_percent(breakdown.party_a_cost_percent),
                ),
                (
                    "party_b_percent",
                    as_percent(breakdown.party_b_cost_percent),
                ),
            ]),
        ),
        step(
            6,
            "Child Support Percentage",
            "Income percentage minus cost percentage; positive means the party pays",
            format!(
                "Party A: {} - {} = {}; Party B: {} - {} = {}",
                pct(income.party_a_income_percent),
                pct(as_percent(breakdown.party_a_cost_percent)),
                pct(as_percent(breakdown.party_a_support_percent)),
                pct(income.party_b_income_percent),
                pct(as_percent(breakdown.party_b_cost_percent)),
                pct(as_percent(breakdown.party_b_support_percent))
            ),
            as_percent(breakdown.party_a_support_percent),
            details([
                (
                    "party_a_percent",
                    as_percent(breakdown.party_a_support_percent),
                ),
                (
                    "party_b_percent",
                    as_percent(breakdown.party_b_support_percent),
                ),
            ]),
        ),
        step(
            7,
            "Costs of the Children (COTC)",
            "Base cost plus a fixed rate on combined income above the threshold",
            format!(
                "{} + {} × {} = {}",
                format_currency(rates.costs_of_children.base_cost),
                pct(as_percent(rates.costs_of_children.additional_rate)),
                format_currency(costs.income_above_threshold),
                format_currency(costs.total)
            ),
            costs.total,
            details([
                ("base_cost", rates.costs_of_children.base_cost),
                ("threshold", rates.costs_of_children.threshold),
                ("additional_rate", rates.costs_of_children.additional_rate),
                ("income_above_threshold", costs.income_above_threshold),
                ("additional_amount", costs.additional_amount),
                ("per_child_cotc", costs.per_child),
            ]),
        ),
        step(
            8,
            "Final Annual Amount",
            "Child support percentage applied to the costs of the children, offset if both parties owe",
            final_formula,
            outcome.final_amount,
            details([
                ("party_a_amount", outcome.party_a_amount),
                ("party_b_amount", outcome.party_b_amount),
                ("final_amount", outcome.final_amount),
            ]),
        ),
    ]
}
