//! Remove raw files that already have a converted image

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tracing::{Level, info};

use crate::cli::Output;
use crate::cli::args::existing_directory;
use crate::config::{CleanupConfig, CleanupOverrides};
use crate::raw::{CleanupOptions, MatchMode, RawScanner, cleanup};

#[derive(Args, Debug)]
pub struct RmRawArgs {
    /// Folder to search recursively
    #[arg(value_name = "PATH", value_parser = existing_directory)]
    pub path: PathBuf,

    /// Specify the source format to look for [default: ".raw, .dng, .raf, .cr2, .nef, .arw"]
    #[arg(short, long, value_name = "FORMATS")]
    pub source_format: Option<String>,

    /// Specify the image format to look for [default: ".jpg, .jpeg"]
    #[arg(short, long, value_name = "FORMATS")]
    pub image_format: Option<String>,

    /// Print the files to be deleted
    #[arg(short, long)]
    pub print: bool,

    /// Delete the found files
    #[arg(short, long)]
    pub confirm: bool,

    /// Only pair a raw file with an image other than itself
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: RmRawArgs, output: &Output) -> Result<()> {
    let overrides = CleanupOverrides {
        source_formats: args.source_format.clone(),
        image_formats: args.image_format.clone(),
        match_mode: args.strict.then_some(MatchMode::Strict),
    };
    let config = CleanupConfig::load_with_overrides(&overrides)?;

    if tracing::enabled!(Level::INFO) {
        info!("resolved configuration:\n{}", config.to_toml()?);
    }

    let raw_extensions = config.source_extensions();
    if raw_extensions.is_empty() {
        output.error("No source formats given; nothing to look for");
    }

    info!(
        path = %args.path.display(),
        source_formats = %raw_extensions,
        image_formats = %config.image_extensions(),
        "scanning for raw files"
    );

    let scanner = RawScanner::new(raw_extensions, config.image_extensions(), config.match_mode);
    let result = scanner.scan(&args.path);

    for warning in &result.warnings {
        output.error(&warning.to_string());
    }

    cleanup::run(
        &result,
        CleanupOptions {
            confirm: args.confirm,
            print: args.print,
        },
        output,
    );

    Ok(())
}
