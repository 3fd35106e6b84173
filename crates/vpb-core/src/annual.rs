use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::audit::derive_audit_flags;
use crate::error::VpbError;
use crate::period::compute_period;
use crate::schedule::apply_rate_schedule;
use crate::types::{
    AnnualSummary, CompanyContext, Money, Quarter, QuarterBreakdown, QuarterlyFigures, Rate,
};
use crate::VpbResult;

/// Annual profit up to which carried-forward losses may offset 100%.
pub const FULL_OFFSET_CEILING: Money = dec!(1_000_000);

/// Fraction of the profit above the ceiling that remaining losses may offset.
pub const REMAINDER_OFFSET_FRACTION: Rate = dec!(0.5);

/// The aggregated year-level result: retained quarter breakdowns in label
/// order, the annual summary, and the derived audit flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualReport {
    pub quarters: Vec<QuarterBreakdown>,
    pub overall: AnnualSummary,
    pub audit_flags: Vec<String>,
}

/// Aggregate the per-quarter figures into the annual VPB assessment.
///
/// Only quarters with positive revenue participate; a quarter with zero or
/// missing revenue contributes nothing to any annual sum. Loss carryforward
/// is an annual-only adjustment: it never touches the per-quarter breakdowns.
///
/// Fails with [`VpbError::NoValidPeriods`] when no quarter qualifies, and
/// with [`VpbError::Computation`] if the summation overflows.
pub fn aggregate(
    quarters: &QuarterlyFigures,
    context: &CompanyContext,
) -> VpbResult<AnnualReport> {
    let mut breakdowns: Vec<QuarterBreakdown> = Vec::new();
    for quarter in Quarter::ALL {
        let Some(figures) = quarters.get(quarter) else {
            continue;
        };
        if figures.total_revenue <= Decimal::ZERO {
            continue;
        }
        breakdowns.push(QuarterBreakdown {
            quarter,
            computation: compute_period(figures),
        });
    }

    if breakdowns.is_empty() {
        return Err(VpbError::NoValidPeriods);
    }

    let mut overall = AnnualSummary::default();
    for breakdown in &breakdowns {
        let c = &breakdown.computation;
        add(&mut overall.total_revenue, c.total_revenue, "total_revenue")?;
        add(&mut overall.total_expenses, c.total_expenses, "total_expenses")?;
        add(
            &mut overall.accounting_profit_before_tax,
            c.accounting_profit_before_tax,
            "accounting_profit_before_tax",
        )?;
        add(
            &mut overall.non_deductible_expenses,
            c.non_deductible_expenses,
            "non_deductible_expenses",
        )?;
        add(
            &mut overall.tax_exempt_income,
            c.tax_exempt_income,
            "tax_exempt_income",
        )?;
        add(&mut overall.quarterly_tax_owed, c.tax_owed, "tax_owed")?;
        add(
            &mut overall.profit_before_loss_compensation,
            c.taxable_profit,
            "taxable_profit",
        )?;
    }

    let available_losses = context.available_loss_carryforward.max(Decimal::ZERO);
    overall.losses_utilized =
        losses_to_utilize(overall.profit_before_loss_compensation, available_losses);
    overall.final_taxable_profit =
        overall.profit_before_loss_compensation - overall.losses_utilized;
    overall.final_tax_owed = apply_rate_schedule(overall.final_taxable_profit).max(Decimal::ZERO);

    let audit_flags = derive_audit_flags(&overall);

    Ok(AnnualReport {
        quarters: breakdowns,
        overall,
        audit_flags,
    })
}

/// Statutory loss-carryforward offset for one year.
///
/// The first EUR 1,000,000 of annual profit may be offset in full; profit
/// above that may be offset up to 50% by whatever loss balance remains.
/// Returns zero unless both profit and available losses are positive. The
/// result never exceeds the available losses nor the positive profit.
pub fn losses_to_utilize(profit_before_losses: Money, available_losses: Money) -> Money {
    if profit_before_losses <= Decimal::ZERO || available_losses <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if profit_before_losses <= FULL_OFFSET_CEILING {
        return profit_before_losses.min(available_losses);
    }

    let offset_first_million = FULL_OFFSET_CEILING.min(available_losses);
    let remaining_profit = profit_before_losses - FULL_OFFSET_CEILING;
    let remaining_losses = available_losses - offset_first_million;
    let offset_remainder = (remaining_profit * REMAINDER_OFFSET_FRACTION).min(remaining_losses);

    offset_first_million + offset_remainder
}

fn add(total: &mut Money, amount: Money, field: &'static str) -> VpbResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| VpbError::Computation {
            reason: format!("overflow while summing {}", field),
        })?;
    Ok(())
}
