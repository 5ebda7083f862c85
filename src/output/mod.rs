//! Terminal output for resolve-ref.
//!
//! - [`diagnostics`] - Tagged lines echoing the resolution on stdout
//! - [`messages`] - Error and warning messages

pub mod diagnostics;
pub mod messages;

/// ANSI color codes for terminal output.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

pub use diagnostics::{diagnostic_lines, print_diagnostics};
pub use messages::{format_error, format_warning, print_error, print_warning};
