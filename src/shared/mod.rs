//! Helpers shared by the `rm-raw` and `tree` commands

pub mod extensions;
pub mod glob;

pub use extensions::{ExtensionSet, contains};
