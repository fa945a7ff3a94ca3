//! Raw file cleanup
//!
//! Finds camera raw files that already have a converted image next to them
//! and optionally deletes them.

pub mod cleanup;
pub mod scanner;


pub use cleanup::{CleanupOptions, CleanupReport};
pub use scanner::{MatchMode, RawScanner, ScanResult, ScanWarning};
