use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::shared::ExtensionSet;
use crate::shared::glob::expand_siblings;

/// How a raw file is paired with a converted image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// More than one file shares the base name and one of them has an image extension.
    /// The raw file itself takes part in the extension check.
    #[default]
    Compat,
    /// Some file other than the raw file shares the base name and has an image extension
    Strict,
}

/// A recoverable problem met while walking or matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub path: PathBuf,
    pub message: String,
}

impl fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error reading {}: {}", self.path.display(), self.message)
    }
}

/// Outcome of a raw file scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Every raw file met during the walk, matched or not
    pub raw_count: usize,
    /// Raw files with a converted sibling, in walk order
    pub candidates: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

/// Walks a directory tree looking for raw files with a converted image sibling
#[derive(Debug, Clone)]
pub struct RawScanner {
    raw_extensions: ExtensionSet,
    image_extensions: ExtensionSet,
    mode: MatchMode,
}

impl RawScanner {
    pub fn new(raw_extensions: ExtensionSet, image_extensions: ExtensionSet, mode: MatchMode) -> Self {
        Self {
            raw_extensions,
            image_extensions,
            mode,
        }
    }

    /// Walk `root` depth-first in file name order.
    ///
    /// Symlinks are not followed. Every entry whose extension is a raw
    /// extension is counted and matched, directories included; the root
    /// itself takes part too. Entries that cannot be read end up in
    /// [`ScanResult::warnings`].
    pub fn scan(&self, root: &Path) -> ScanResult {
        self.scan_entries(root, WalkDir::new(root).sort_by_file_name())
    }

    /// Same as [`RawScanner::scan`] over an already built walk
    pub fn scan_entries<I>(&self, root: &Path, entries: I) -> ScanResult
    where
        I: IntoIterator<Item = walkdir::Result<DirEntry>>,
    {
        let mut result = ScanResult::default();

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().unwrap_or(root).to_path_buf();
                    let message = match err.io_error() {
                        Some(io_err) => io_err.to_string(),
                        None => err.to_string(),
                    };
                    debug!(path = %path.display(), %message, "skipping unreadable entry");
                    result.warnings.push(ScanWarning { path, message });
                    continue;
                }
            };

            if !self.raw_extensions.matches_path(entry.path()) {
                continue;
            }

            result.raw_count += 1;
            match self.find_image(entry.path()) {
                Ok(Some(image)) => {
                    debug!(raw = %entry.path().display(), image = %image.display(), "converted image found");
                    result.candidates.push(entry.into_path());
                }
                Ok(None) => {
                    debug!(raw = %entry.path().display(), "no converted image");
                }
                Err(err) => {
                    debug!(raw = %entry.path().display(), error = %err, "sibling lookup failed");
                    result.warnings.push(ScanWarning {
                        path: entry.into_path(),
                        message: format!("{err:#}"),
                    });
                }
            }
        }

        result
    }

    /// First sibling of `raw` (matching `base.*`) whose extension is an image extension
    pub fn find_image(&self, raw: &Path) -> Result<Option<PathBuf>> {
        let siblings = expand_siblings(raw)?;

        let image = match self.mode {
            MatchMode::Compat if siblings.len() > 1 => siblings
                .into_iter()
                .find(|path| self.image_extensions.matches_path(path)),
            MatchMode::Compat => None,
            MatchMode::Strict => siblings
                .into_iter()
                .filter(|path| path != raw)
                .find(|path| self.image_extensions.matches_path(path)),
        };

        Ok(image)
    }
}
