use serde_json::Value;

use crate::annual::aggregate;
use crate::extraction::parse_extraction;
use crate::types::{CompanyContext, CompanyInfo, TaxReport};
use crate::VpbResult;

/// Run the full pipeline on a raw AI-extraction payload.
///
/// Parses the payload with tolerant coercion, computes the per-quarter
/// breakdowns and the annual assessment, and assembles the response shape
/// with the original payload echoed back. Stateless: every call starts from
/// scratch and identical input yields identical output.
pub fn process_extraction(raw: Value) -> VpbResult<TaxReport> {
    let data = parse_extraction(&raw);

    let context = CompanyContext {
        company_name: data.company_name,
        accounting_year: data.accounting_period_year,
        available_loss_carryforward: data.available_loss_carryforward,
    };

    let annual = aggregate(&data.quarters, &context)?;

    Ok(TaxReport {
        company_info: CompanyInfo {
            name: context.company_name,
            year: context.accounting_year,
        },
        quarters: annual.quarters,
        overall: annual.overall,
        audit_flags: annual.audit_flags,
        raw_extraction: raw,
    })
}
