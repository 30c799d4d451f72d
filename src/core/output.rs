//! Diagnostics for the command line.
//!
//! Everything here goes to stderr: stdout carries only the rendered path, so
//! shell prompts embedding rainbowpath never pick up an error message.

use colored::*;

/// Builds the styled diagnostic line
///
/// # Format
/// ```text
/// rainbowpath: error: <message>
/// ```
pub fn format_error(message: &str) -> String {
    format!("{} {} {}", "rainbowpath:".bold(), "error:".red().bold(), message)
}

/// Formats and prints an error message with consistent styling
pub fn print_error(message: &str) {
    eprintln!("{}", format_error(message));
}
