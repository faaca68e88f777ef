//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_list_filter` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Printing the rendered comparison to stdout
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::process;

use domain_list_filter::initialization::{init_logger_with, load_dotenv};
use domain_list_filter::{render, run_comparison, summary_line, Config};

fn main() -> Result<()> {
    load_dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_comparison(&config) {
        Ok(report) => {
            let output = render(&report, config.output_format, config.section)
                .context("Failed to render comparison")?;
            print!("{output}");
            info!("{}", summary_line(&report.counts));
            Ok(())
        }
        Err(e) => {
            eprintln!("domain_list_filter error: {:#}", e);
            process::exit(1);
        }
    }
}
