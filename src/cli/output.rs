//! Output handling for rawkeeper
//!
//! Report lines are written verbatim so they stay stable when piped. Errors
//! and hints get `console` styling, which switches itself off without a TTY.
//! Diagnostics belong to `tracing`, which writes to stderr.

use console::style;

/// Output handler for consistent CLI formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Get quiet mode status
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Print a plain report line
    pub fn line(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print a hint about how to continue
    pub fn hint(&self, message: &str) {
        if !self.quiet {
            println!("{}", style(message).yellow());
        }
    }

    /// Print blank line
    pub fn blank_line(&self) {
        if !self.quiet {
            println!();
        }
    }
}
