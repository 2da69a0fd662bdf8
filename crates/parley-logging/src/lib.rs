// Logging module - verbose HTTP request/response dumps
pub mod request_logger;

pub use request_logger::{format_body, log_request, log_response};

/// Bodies longer than this are truncated in console dumps
pub const MAX_LOGGED_BODY_CHARS: usize = 5000;

/// Safely truncate a string to a maximum number of characters
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        // Reserve space for "..." suffix
        let trunc_chars = max_chars.saturating_sub(3);
        format!("{}...", s.chars().take(trunc_chars).collect::<String>())
    }
}
