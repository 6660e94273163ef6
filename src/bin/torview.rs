//! Torview CLI Binary
//!
//! Command-line viewer for decoded torrent metadata.

use anyhow::Context;
use clap::Parser;
use std::process;
use torview::logging::init_logging;
use torview::tooling::cli::{Cli, CliContext};

fn run(cli: &Cli) -> anyhow::Result<String> {
    let context = CliContext::new(cli.config.clone()).context("Error loading configuration")?;

    let logging = cli.logging_overrides(&context.config().logging);
    init_logging(Some(&logging), cli.log_file.clone()).context("Error initializing logging")?;

    let output = context.execute(&cli.command)?;
    Ok(output)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    }
}
