//! Command line interface

mod wire;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use diwire_domain::error::Result;
use diwire_infrastructure::{AppConfig, ConfigLoader};

pub use wire::{WireArgs, WireOutcome};

/// Command line interface for diwire
#[derive(Parser, Debug)]
#[command(name = "diwire")]
#[command(about = "Compile-time dependency injection code generator")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a provider function from a source index
    Wire(WireArgs),
}

impl Cli {
    /// Configuration loader honoring `--config`
    pub fn config_loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }

    /// Execute the selected command
    pub fn run(&self, config: &AppConfig) -> Result<()> {
        match &self.command {
            Commands::Wire(args) => args.run(&config.wire),
        }
    }
}
