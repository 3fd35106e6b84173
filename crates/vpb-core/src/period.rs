use rust_decimal::Decimal;

use crate::schedule::apply_rate_schedule;
use crate::types::{PeriodComputation, PeriodFigures};

/// Run the step-by-step VPB computation for a single reporting period.
///
/// Pure and infallible: missing figures arrive as zero, and a period that
/// made a loss reports a negative taxable profit with zero tax owed. The
/// aggregation layer decides which periods participate in the annual totals;
/// this function computes correctly for any input, including zero revenue.
pub fn compute_period(figures: &PeriodFigures) -> PeriodComputation {
    let revenue = figures.total_revenue;
    let expenses = figures.total_operating_expenses;
    let depreciation = figures.book_depreciation;

    let accounting_profit_before_tax = revenue - expenses - depreciation;

    let non_deductible = figures.tax_adjustments.non_deductible_expenses;
    let tax_exempt = figures.tax_adjustments.tax_exempt_income;

    let taxable_profit = accounting_profit_before_tax + non_deductible - tax_exempt;

    // A loss period never yields negative tax
    let tax_owed = apply_rate_schedule(taxable_profit).max(Decimal::ZERO);

    PeriodComputation {
        total_revenue: revenue,
        total_expenses: expenses + depreciation,
        accounting_profit_before_tax,
        non_deductible_expenses: non_deductible,
        tax_exempt_income: tax_exempt,
        taxable_profit,
        tax_owed,
    }
}
