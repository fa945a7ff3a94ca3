//! Command-line interface for rawkeeper
//!
//! This module provides the main CLI structure and command dispatch. It uses
//! clap for argument parsing; path arguments are validated before any command runs.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;
mod output;

pub use output::Output;

/// rawkeeper - tidy up a photo library
#[derive(Parser)]
#[command(
    name = "rawkeeper",
    version,
    about = "Remove raw files that already have a converted image, and print folder trees",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Remove raw files if the corresponding jpg file exists
    RmRaw(commands::rm_raw::RmRawArgs),
    /// Prints the directory tree for the specified folder
    Tree(commands::tree::TreeArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);
        let output = Output::new(self.quiet);

        match self.command {
            Commands::RmRaw(args) => commands::rm_raw::execute(args, &output),
            Commands::Tree(args) => commands::tree::execute(args, &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,globset=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,globset=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"),
    });

    // Logs share stderr with errors; stdout carries the report
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
