use colored::*;
use std::env;

// Simple logging helpers for user-facing diagnostics.
// Structured logging goes through the `log` crate.

pub fn log_info(message: &str) {
    if env::var("ASTROMAESTRO_DEBUG").is_ok() {
        eprintln!("{} {}", "[INFO]".cyan(), message);
    }
}

pub fn log_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
