//! Shared argument parsers

use std::path::PathBuf;

/// Accept only a path that exists and is a directory.
///
/// Used as a clap `value_parser`, so a bad path fails before any command runs.
pub fn existing_directory(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    match std::fs::metadata(&path) {
        Err(_) => Err(format!("unexisting or invalid path specified: {value}")),
        Ok(metadata) if !metadata.is_dir() => Err(format!("a directory is expected: {value}")),
        Ok(_) => Ok(path),
    }
}
