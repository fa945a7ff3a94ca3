//! # rawkeeper - small tools for a photography workflow
//!
//! - **`rm-raw`**: walk a folder, find camera raw files that already have a
//!   converted image with the same base name next to them, and delete them.
//!   Without `--confirm` the run only reports.
//! - **`tree`**: print the folder structure (directories and symbolic links
//!   only) as an indented tree.
//!
//! ## Quick Start
//!
//! ```bash
//! # See what could go
//! rawkeeper rm-raw ~/Pictures/2024 --print
//!
//! # Delete it
//! rawkeeper rm-raw ~/Pictures/2024 --confirm
//!
//! # Show the folder layout
//! rawkeeper tree ~/Pictures
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use rawkeeper::raw::{MatchMode, RawScanner};
//! use rawkeeper::shared::ExtensionSet;
//! use std::path::Path;
//!
//! let scanner = RawScanner::new(
//!     ExtensionSet::parse(".cr2, .nef"),
//!     ExtensionSet::parse(".jpg"),
//!     MatchMode::Compat,
//! );
//! let result = scanner.scan(Path::new("photos"));
//! println!("{} raw files, {} removable", result.raw_count, result.candidates.len());
//! ```

pub mod cli;
pub mod config;
pub mod raw;
pub mod shared;
pub mod tree;

pub use cli::{Cli, Output};
pub use config::CleanupConfig;

/// Result type alias for rawkeeper operations
pub type Result<T> = anyhow::Result<T>;
