//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnssec_survey` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dnssec_survey::initialization::init_logger_with;
use dnssec_survey::{run_survey, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_survey(config).await {
        Ok(report) => {
            println!(
                "Total: {}, supported: {} ({}%) in {:.1}s",
                report.total, report.supported, report.support_rate_percent, report.elapsed_seconds
            );
            println!("Results saved in {}", report.output_path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("dnssec_survey error: {:#}", e);
            process::exit(1);
        }
    }
}
