use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use vpb_core::schedule::apply_rate_schedule;

/// Arguments for a one-off rate schedule lookup
#[derive(Args)]
pub struct ScheduleArgs {
    /// Taxable profit to apply the VPB rate schedule to
    #[arg(long)]
    pub taxable_profit: Decimal,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let tax_owed = apply_rate_schedule(args.taxable_profit).max(Decimal::ZERO);
    Ok(json!({
        "taxable_profit": args.taxable_profit.to_string(),
        "tax_owed": tax_owed.to_string(),
    }))
}
