//! Deletion and reporting for scanned raw files

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::ScanResult;
use crate::cli::Output;

/// What to do with the candidates of a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupOptions {
    /// Delete candidates; without it the run only reports
    pub confirm: bool,
    /// Print one line per candidate
    pub print: bool,
}

/// Per-file outcome of a confirmed cleanup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Delete a file or symlink, or an empty directory
fn remove(path: &Path) -> io::Result<()> {
    if fs::symlink_metadata(path)?.is_dir() {
        fs::remove_dir(path)
    } else {
        fs::remove_file(path)
    }
}

/// Report the scan and, when confirmed, delete every candidate.
///
/// A failed deletion is reported and the remaining candidates are still
/// processed. The summary counts candidates, not successful deletions.
pub fn run(scan: &ScanResult, options: CleanupOptions, output: &Output) -> CleanupReport {
    let mut report = CleanupReport::default();
    let candidates = &scan.candidates;

    output.line(&format!("Found {} raw files.", scan.raw_count));

    for candidate in candidates {
        if options.confirm {
            match remove(candidate) {
                Ok(()) => {
                    debug!(path = %candidate.display(), "removed");
                    if options.print {
                        output.line(&format!("{} removed", candidate.display()));
                    }
                    report.removed.push(candidate.clone());
                }
                Err(err) => {
                    output.error(&format!("error removing {}: {}", candidate.display(), err));
                    report.failed.push((candidate.clone(), err.to_string()));
                }
            }
        } else if options.print {
            output.line(&format!("{} can be removed", candidate.display()));
        }
    }

    if scan.raw_count > 0 && (candidates.is_empty() || !options.confirm) {
        output.line(&format!("{} files can be removed.", candidates.len()));
    } else if !candidates.is_empty() && options.confirm {
        output.line(&format!("{} files removed.", candidates.len()));
    }

    if !candidates.is_empty() && !options.confirm {
        output.blank_line();
        output.hint("Use --confirm to delete the files");
    }

    info!(
        raw_files = scan.raw_count,
        candidates = candidates.len(),
        removed = report.removed.len(),
        failed = report.failed.len(),
        "raw cleanup finished"
    );

    report
}
