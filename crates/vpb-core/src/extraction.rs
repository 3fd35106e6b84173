use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{Money, PeriodFigures, Quarter, QuarterlyFigures, TaxAdjustments};

/// The structured figures delivered by the AI extraction provider, after
/// tolerant coercion. Every field has a usable zero/empty default; parsing
/// this shape never fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionData {
    pub company_name: String,
    pub country: String,
    pub accounting_period_year: String,
    pub currency: String,
    pub quarters: QuarterlyFigures,
    pub available_loss_carryforward: Money,
}

/// Coerce a JSON value into a monetary amount, defaulting to zero.
///
/// This is the single coercion point for the "missing or malformed numeric
/// fields are 0.0" contract: JSON numbers (integer or float) and numeric
/// strings convert; null, missing keys, and anything else become zero.
pub fn coerce_amount(value: Option<&Value>) -> Money {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from(u)
            } else {
                n.as_f64()
                    .and_then(Decimal::from_f64)
                    .unwrap_or(Decimal::ZERO)
            }
        }
        Some(Value::String(s)) => s.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}

/// Coerce a JSON value into a text field. Years in particular arrive as
/// either a string ("2024") or a bare number.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Parse the raw AI-extraction payload into typed figures.
///
/// Total function: missing keys, wrong types, and extra keys are all
/// tolerated. Only the `Q1`..`Q4` slots of `quarters` are read; a quarter
/// whose entry is not an object is treated as absent.
pub fn parse_extraction(raw: &Value) -> ExtractionData {
    let mut quarters = QuarterlyFigures::default();
    if let Some(Value::Object(map)) = raw.get("quarters") {
        for quarter in Quarter::ALL {
            if let Some(entry @ Value::Object(_)) = map.get(quarter.label()) {
                quarters.set(quarter, parse_period_figures(entry));
            }
        }
    }

    let available_loss_carryforward = coerce_amount(
        raw.get("overall_figures_if_available")
            .and_then(|overall| overall.get("available_loss_carryforward_at_start_of_year")),
    )
    .max(Decimal::ZERO);

    ExtractionData {
        company_name: coerce_text(raw.get("company_name")),
        country: coerce_text(raw.get("country")),
        accounting_period_year: coerce_text(raw.get("accounting_period_year")),
        currency: coerce_text(raw.get("currency")),
        quarters,
        available_loss_carryforward,
    }
}

fn parse_period_figures(value: &Value) -> PeriodFigures {
    let adjustments = value.get("tax_adjustments");
    PeriodFigures {
        total_revenue: coerce_amount(value.get("total_revenue")),
        total_operating_expenses: coerce_amount(value.get("total_operating_expenses")),
        book_depreciation: coerce_amount(value.get("book_depreciation")),
        tax_adjustments: TaxAdjustments {
            non_deductible_expenses: coerce_amount(
                adjustments.and_then(|a| a.get("non_deductible_expenses")),
            ),
            tax_exempt_income: coerce_amount(
                adjustments.and_then(|a| a.get("tax_exempt_income")),
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn coerce_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_amount(Some(&json!(125_000))), dec!(125_000));
        assert_eq!(coerce_amount(Some(&json!(99.95))), dec!(99.95));
        assert_eq!(coerce_amount(Some(&json!(-4_000))), dec!(-4_000));
        assert_eq!(coerce_amount(Some(&json!("125000.50"))), dec!(125_000.50));
        assert_eq!(coerce_amount(Some(&json!("  42 "))), dec!(42));
    }

    #[test]
    fn coerce_defaults_everything_else_to_zero() {
        assert_eq!(coerce_amount(None), dec!(0));
        assert_eq!(coerce_amount(Some(&Value::Null)), dec!(0));
        assert_eq!(coerce_amount(Some(&json!(true))), dec!(0));
        assert_eq!(coerce_amount(Some(&json!("n/a"))), dec!(0));
        assert_eq!(coerce_amount(Some(&json!({ "amount": 5 }))), dec!(0));
        assert_eq!(coerce_amount(Some(&json!([1, 2]))), dec!(0));
    }

    #[test]
    fn parse_full_provider_payload() {
        let raw = json!({
            "company_name": "Voorbeeld BV",
            "country": "Netherlands",
            "accounting_period_year": "2024",
            "currency": "EUR",
            "quarters": {
                "Q1": {
                    "total_revenue": 100_000,
                    "total_operating_expenses": "40000",
                    "book_depreciation": 5_000.5,
                    "tax_adjustments": {
                        "non_deductible_expenses": 1_000,
                        "tax_exempt_income": 2_000
                    }
                },
                "Q2": { "total_revenue": 0 }
            },
            "overall_figures_if_available": {
                "available_loss_carryforward_at_start_of_year": 30_000
            }
        });

        let data = parse_extraction(&raw);
        assert_eq!(data.company_name, "Voorbeeld BV");
        assert_eq!(data.accounting_period_year, "2024");
        assert_eq!(data.available_loss_carryforward, dec!(30_000));

        let q1 = data.quarters.get(Quarter::Q1).unwrap();
        assert_eq!(q1.total_revenue, dec!(100_000));
        assert_eq!(q1.total_operating_expenses, dec!(40_000));
        assert_eq!(q1.book_depreciation, dec!(5_000.5));
        assert_eq!(q1.tax_adjustments.non_deductible_expenses, dec!(1_000));
        assert_eq!(q1.tax_adjustments.tax_exempt_income, dec!(2_000));

        // Present but zero-revenue quarter still parses; exclusion happens
        // at aggregation time
        let q2 = data.quarters.get(Quarter::Q2).unwrap();
        assert_eq!(q2.total_revenue, dec!(0));
        assert!(data.quarters.get(Quarter::Q3).is_none());
    }

    #[test]
    fn parse_tolerates_missing_and_malformed_keys() {
        let data = parse_extraction(&json!({}));
        assert_eq!(data.company_name, "");
        assert_eq!(data.available_loss_carryforward, dec!(0));
        assert!(data.quarters.get(Quarter::Q1).is_none());

        let data = parse_extraction(&json!({
            "quarters": "not an object",
            "accounting_period_year": 2024,
            "overall_figures_if_available": null
        }));
        assert_eq!(data.accounting_period_year, "2024");
        assert!(data.quarters.get(Quarter::Q4).is_none());
    }

    #[test]
    fn negative_loss_balance_is_clamped_at_the_boundary() {
        let data = parse_extraction(&json!({
            "overall_figures_if_available": {
                "available_loss_carryforward_at_start_of_year": -10_000
            }
        }));
        assert_eq!(data.available_loss_carryforward, dec!(0));
    }

    #[test]
    fn quarter_entry_missing_adjustments_defaults_to_zero() {
        let raw = json!({
            "quarters": { "Q3": { "total_revenue": 12_000 } }
        });
        let data = parse_extraction(&raw);
        let q3 = data.quarters.get(Quarter::Q3).unwrap();
        assert_eq!(q3.tax_adjustments.non_deductible_expenses, dec!(0));
        assert_eq!(q3.tax_adjustments.tax_exempt_income, dec!(0));
    }
}
