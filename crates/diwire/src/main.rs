//! diwire - Entry Point
//!
//! Binary entry point for the `diwire` command line. Generated source goes
//! to stdout (or `--output`); logs and errors go to stderr.

use std::process::ExitCode;

use clap::Parser;
use diwire::Cli;
use diwire::infrastructure::logging::{init_logging, log_config_loaded};

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let loader = cli.config_loader();
    let config = loader.load()?;
    init_logging(config.logging.clone())?;
    if let Some(path) = loader.source_path() {
        log_config_loaded(&path, true);
    }
    cli.run(&config)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("diwire: {err}");
            ExitCode::FAILURE
        }
    }
}
