//! File extension helpers
//!
//! Extensions are always handled in their normalized form: lower-cased and
//! including the leading dot (`".jpg"`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Linear containment check over an ordered sequence.
///
/// No normalization happens here; callers compare values of a consistent case.
pub fn contains<T: PartialEq>(set: &[T], needle: &T) -> bool {
    set.iter().any(|item| item == needle)
}

/// Split a file name into `(base, extension)`.
///
/// The extension starts at the last `.` of the name and keeps the dot. A name
/// without a dot has an empty extension and is its own base, so `.raw` splits
/// into `("", ".raw")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Lower-cased extension of the final component of `path`, or an empty string.
pub fn normalized_extension(path: &Path) -> String {
    path.file_name()
        .map(|name| split_extension(&name.to_string_lossy()).1.to_lowercase())
        .unwrap_or_default()
}

/// A normalized list of extensions parsed from a comma-separated flag value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    /// Parse `".raw, .DNG ,.cr2"` into `[".raw", ".dng", ".cr2"]`.
    pub fn parse(csv: &str) -> Self {
        Self(
            csv.split(',')
                .map(|item| item.trim().to_lowercase())
                .filter(|item| !item.is_empty())
                .collect(),
        )
    }

    pub fn matches(&self, extension: &str) -> bool {
        contains(&self.0, &extension.to_string())
    }

    /// Whether the extension of `path` belongs to this set.
    pub fn matches_path(&self, path: &Path) -> bool {
        self.matches(&normalized_extension(path))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}
