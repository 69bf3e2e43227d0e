use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use std::{path::PathBuf, process::ExitCode};

/// Generates reports from employee data in CSV files.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// CSV files with employee data
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Type of report to generate (for example, `payout`)
    #[arg(long)]
    report: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    payout::check_inputs(&args.files)?;
    let generate = payout::select_report(&args.report)?;
    debug!(report = %args.report, files = args.files.len(), "generating report");
    let records = payout::load_records(&args.files)?;
    println!("{}", generate(&records));
    Ok(())
}
