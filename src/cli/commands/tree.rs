//! Print the directory tree of a folder

use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::Output;
use crate::cli::args::existing_directory;
use crate::tree::TreePrinter;

#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Folder to print
    #[arg(value_name = "PATH", value_parser = existing_directory)]
    pub path: PathBuf,
}

pub fn execute(args: TreeArgs, output: &Output) -> Result<()> {
    // The listing is the report, so --quiet drops it along with its inline errors
    let out: Box<dyn Write> = if output.is_quiet() {
        Box::new(io::sink())
    } else {
        Box::new(io::stdout().lock())
    };

    TreePrinter::new(out)
        .print(&args.path)
        .context("Failed to write directory tree")
}
