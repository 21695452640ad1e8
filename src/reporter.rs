//! Console output helpers.
//!
//! Separate from the core logic so the library stays free of printing
//! side effects.

use colored::Colorize;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a warning line to stderr.
pub fn warn(message: &str) {
    eprintln!("{} {}", "warning:".bold().yellow(), message);
}

/// Print the manual-verification caveat that accompanies every result set.
///
/// The scan cannot see dynamically assembled keys, so the unused list
/// always needs a human pass before anything is purged.
pub fn print_false_positive_caveat() {
    println!(
        "{}",
        "Note: tokens assembled dynamically by the code (string concatenation,\n\
         computed keys) are always reported as unused. Verify the results\n\
         manually before running `i18n-janitor purge`."
            .dimmed()
    );
}
