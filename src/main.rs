use anyhow::Result;
use clap::Parser;

use rawkeeper::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
