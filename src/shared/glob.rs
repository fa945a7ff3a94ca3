//! Glob pattern utilities
//!
//! Sibling lookup for raw files: everything next to `dir/base.ext` that
//! matches `base.*`, in the order a shell glob would list it.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::fs;
use std::path::{Path, PathBuf};

use super::extensions::split_extension;

/// Build the `base.*` matcher for a file name, escaping glob metacharacters in the base.
pub fn sibling_matcher(file_name: &str) -> Result<GlobMatcher> {
    let (base, _) = split_extension(file_name);
    let pattern = format!("{}.*", globset::escape(base));
    let glob = Glob::new(&pattern).with_context(|| format!("Invalid sibling pattern '{pattern}'"))?;
    Ok(glob.compile_matcher())
}

/// List every entry in the directory of `path` whose name matches `base.*`.
///
/// The result includes `path` itself when it exists and is sorted by file name.
pub fn expand_siblings(path: &Path) -> Result<Vec<PathBuf>> {
    let file_name = path
        .file_name()
        .with_context(|| format!("No file name in {}", path.display()))?
        .to_string_lossy();
    let matcher = sibling_matcher(&file_name)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(parent).with_context(|| format!("Failed to read {}", parent.display()))? {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", parent.display()))?;
        let name = entry.file_name();
        if matcher.is_match(Path::new(&name)) {
            names.push(name);
        }
    }
    names.sort();

    Ok(names.into_iter().map(|name| path.with_file_name(name)).collect())
}
