//! Error and warning messages.
//!
//! These go to stderr so stdout carries only the diagnostic lines.

use super::colors::*;

/// Format an error message.
pub fn format_error(msg: &str) -> String {
    format!("{RED}{BOLD}Error:{RESET} {}", msg)
}

/// Format a warning message.
pub fn format_warning(msg: &str) -> String {
    format!("{YELLOW}Warning:{RESET} {}", msg)
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{}", format_error(msg));
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{}", format_warning(msg));
}
