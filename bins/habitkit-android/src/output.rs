//! Terminal output helpers for the CLI

use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print an indented name/value line
    pub fn field(name: &str, value: &str) {
        println!("  {} {}", format!("{name}:").dimmed(), value);
    }
}

/// Mask a secret for human-readable output
pub fn mask(value: &str) -> &'static str {
    if value.is_empty() { "(unset)" } else { "********" }
}
