//! Command implementations for the rawkeeper CLI
//!
//! Each command is organized into its own module.

pub mod rm_raw;
pub mod tree;
