//! Utility functions used throughout the application

use std::path::PathBuf;

/// Directory for the log file (temp dir keeps it out of the way of the TUI)
pub fn get_log_dir() -> PathBuf {
    std::env::temp_dir()
}

/// File name of the log inside [`get_log_dir`]
pub const LOG_FILE_NAME: &str = "resadmin.log";

/// Where a downloaded preview copy of `name` is kept
pub fn get_preview_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("resadmin-preview");
    path.push(sanitize_file_name(name));
    path
}

/// Replace path separators and control characters so a remote name is a safe file name
pub fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed = cleaned.trim_matches(|c| c == '.' || c == ' ');
    if trimmed.is_empty() {
        "document.pdf".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Format bytes into human-readable string (e.g., "1.2 KB", "5.3 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
