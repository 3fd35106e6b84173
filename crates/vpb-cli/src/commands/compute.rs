use clap::Args;
use serde_json::Value;

use vpb_core::report::process_extraction;

use crate::input;

/// Arguments for the full quarterly + annual computation
#[derive(Args)]
pub struct ComputeArgs {
    /// Path to the AI-extraction JSON payload
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_compute(args: ComputeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let raw: Value = if let Some(ref path) = args.input {
        input::file::read_json_value(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        data
    } else {
        return Err("--input <file.json> or stdin required for compute".into());
    };

    let report = process_extraction(raw)?;
    Ok(serde_json::to_value(report)?)
}
