use rust_decimal::Decimal;

use crate::types::AnnualSummary;

/// Run the advisory audit-risk checks on the annual figures.
///
/// Pure and total. The rules are evaluated independently and the list order
/// is part of the user-visible contract: new rules are appended at the end,
/// existing ones are never reordered.
pub fn derive_audit_flags(overall: &AnnualSummary) -> Vec<String> {
    let mut flags = Vec::new();

    if overall.accounting_profit_before_tax < Decimal::ZERO {
        flags.push("Company reported an accounting loss for the year.".to_string());
    }

    // The revenue guard avoids a false positive when no revenue was extracted
    if overall.total_expenses > overall.total_revenue && overall.total_revenue > Decimal::ZERO {
        flags.push("Total annual expenses exceed total annual revenue.".to_string());
    }

    flags
}
