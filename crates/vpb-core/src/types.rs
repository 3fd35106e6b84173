use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.19 = 19%). Never as percentages.
pub type Rate = Decimal;

/// Fiscal quarter label. The declaration order is the presentation order
/// everywhere a report is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn label(&self) -> &'static str {
        match self {
            Quarter::Q1 => "Q1",
            Quarter::Q2 => "Q2",
            Quarter::Q3 => "Q3",
            Quarter::Q4 => "Q4",
        }
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tax-specific adjustments reported for a single period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxAdjustments {
    #[serde(default)]
    pub non_deductible_expenses: Money,
    #[serde(default)]
    pub tax_exempt_income: Money,
}

/// Raw extracted figures for a single reporting period. Every field defaults
/// to zero when absent from the source document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodFigures {
    #[serde(default)]
    pub total_revenue: Money,
    #[serde(default)]
    pub total_operating_expenses: Money,
    #[serde(default)]
    pub book_depreciation: Money,
    #[serde(default)]
    pub tax_adjustments: TaxAdjustments,
}

/// The fixed Q1..Q4 mapping of extracted figures. A missing slot means the
/// document carried no data for that quarter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuarterlyFigures {
    #[serde(rename = "Q1", default, skip_serializing_if = "Option::is_none")]
    pub q1: Option<PeriodFigures>,
    #[serde(rename = "Q2", default, skip_serializing_if = "Option::is_none")]
    pub q2: Option<PeriodFigures>,
    #[serde(rename = "Q3", default, skip_serializing_if = "Option::is_none")]
    pub q3: Option<PeriodFigures>,
    #[serde(rename = "Q4", default, skip_serializing_if = "Option::is_none")]
    pub q4: Option<PeriodFigures>,
}

impl QuarterlyFigures {
    pub fn get(&self, quarter: Quarter) -> Option<&PeriodFigures> {
        match quarter {
            Quarter::Q1 => self.q1.as_ref(),
            Quarter::Q2 => self.q2.as_ref(),
            Quarter::Q3 => self.q3.as_ref(),
            Quarter::Q4 => self.q4.as_ref(),
        }
    }

    pub fn set(&mut self, quarter: Quarter, figures: PeriodFigures) {
        match quarter {
            Quarter::Q1 => self.q1 = Some(figures),
            Quarter::Q2 => self.q2 = Some(figures),
            Quarter::Q3 => self.q3 = Some(figures),
            Quarter::Q4 => self.q4 = Some(figures),
        }
    }
}

/// Company-level context consumed by the annual aggregation. The loss
/// balance is the prior-year carryforward available at the start of the year
/// and is clamped to zero at the input boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyContext {
    pub company_name: String,
    pub accounting_year: String,
    #[serde(default)]
    pub available_loss_carryforward: Money,
}

/// Full tax breakdown for one reporting period. `taxable_profit` may be
/// negative (a loss); `tax_owed` is always >= 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeriodComputation {
    pub total_revenue: Money,
    /// Operating expenses plus book depreciation.
    pub total_expenses: Money,
    pub accounting_profit_before_tax: Money,
    pub non_deductible_expenses: Money,
    pub tax_exempt_income: Money,
    pub taxable_profit: Money,
    pub tax_owed: Money,
}

/// A quarter label paired with its computed breakdown. The report carries an
/// explicit ordered sequence of these rather than a generic mapping, so the
/// output order is deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterBreakdown {
    pub quarter: Quarter,
    pub computation: PeriodComputation,
}

/// Annual totals and the year-level assessment. Field order is the ordered
/// annual breakdown of the report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnualSummary {
    pub total_revenue: Money,
    pub total_expenses: Money,
    pub accounting_profit_before_tax: Money,
    pub non_deductible_expenses: Money,
    pub tax_exempt_income: Money,
    /// Sum of per-quarter tax owed, before annual-level adjustments.
    pub quarterly_tax_owed: Money,
    pub profit_before_loss_compensation: Money,
    /// Carried-forward losses actually offset this year, as a non-negative
    /// magnitude.
    pub losses_utilized: Money,
    pub final_taxable_profit: Money,
    pub final_tax_owed: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub year: String,
}

/// The complete response payload returned to the calling layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxReport {
    pub company_info: CompanyInfo,
    pub quarters: Vec<QuarterBreakdown>,
    pub overall: AnnualSummary,
    pub audit_flags: Vec<String>,
    /// The structured-extraction input echoed back verbatim.
    #[serde(rename = "raw_ai_extraction")]
    pub raw_extraction: serde_json::Value,
}
