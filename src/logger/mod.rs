//! Logger module
//!
//! Provides logging utilities for the file server:
//! - Startup announcement (the only line written to stdout)
//! - Access logging with multiple formats
//! - Error and warning logging
//!
//! Everything except the startup announcement goes to stderr. A failed
//! write to stderr panics rather than being dropped.

mod format;

pub use format::{version_label, AccessLogEntry};

use std::net::SocketAddr;
use std::path::Path;

fn error_line(message: &str) -> String {
    format!("[ERROR] {message}")
}

fn warning_line(message: &str) -> String {
    format!("[WARN] {message}")
}

/// Startup announcement, the only line written to stdout
pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("Serving {} at http://{addr}", root.display());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("{}", error_line(&format!("Failed to serve connection: {err:?}")));
}

pub fn log_error(message: &str) {
    eprintln!("{}", error_line(message));
}

pub fn log_warning(message: &str) {
    eprintln!("{}", warning_line(message));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    eprintln!("{}", entry.format(format));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_prefixes() {
        assert_eq!(error_line("disk gone"), "[ERROR] disk gone");
        assert_eq!(warning_line("slow client"), "[WARN] slow client");
    }
}
