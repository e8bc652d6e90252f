//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Display an optional value, falling back when absent or blank
pub fn display_or<T: ToString>(value: Option<&T>, fallback: &str) -> String {
    match value.map(|v| v.to_string()) {
        Some(text) if !text.is_empty() => text,
        _ => fallback.to_string(),
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Percent-encode a single URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("Hello", 10), "Hello");
        assert_eq!(truncate_text("Hello, World!", 10), "Hello, ...");
        assert_eq!(truncate_text("Hi", 2), "Hi");
    }

    #[test]
    fn test_truncate_text_multibyte() {
        assert_eq!(truncate_text("ÄÖÜäöüß-Straße", 8), "ÄÖÜäö...");
    }

    #[test]
    fn test_display_or() {
        let branch = "CSE".to_string();
        let empty = String::new();
        assert_eq!(display_or(Some(&branch), "N/A"), "CSE");
        assert_eq!(display_or(Some(&empty), "N/A"), "N/A");
        assert_eq!(display_or::<String>(None, "N/A"), "N/A");
        assert_eq!(display_or(Some(&3), ""), "3");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Sports \n day  "), "Sports day");
    }

    #[test]
    fn test_encode_path_segment() {
        assert_eq!(encode_path_segment("21CS45"), "21CS45");
        assert_eq!(encode_path_segment("21/CS 45"), "21%2FCS%2045");
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(ts), "2024-03-01 09:30:00 UTC");
    }
}
