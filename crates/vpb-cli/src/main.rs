mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compute::ComputeArgs;
use commands::schedule::ScheduleArgs;

/// Dutch corporate income tax (VPB) computation
#[derive(Parser)]
#[command(
    name = "vpb",
    version,
    about = "Dutch corporate income tax (VPB) computation",
    long_about = "Computes quarterly and annual Dutch corporate income tax (VPB) from \
                  extracted financial figures with decimal precision. Applies the \
                  two-bracket rate schedule, the annual loss-carryforward offset, and \
                  derives advisory audit-risk flags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the quarterly and annual VPB report from an extraction payload
    Compute(ComputeArgs),
    /// Apply the two-bracket rate schedule to a single taxable profit
    Schedule(ScheduleArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compute(args) => commands::compute::run_compute(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::Version => {
            println!("vpb {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
