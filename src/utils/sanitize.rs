//! Utilities for sanitizing failure messages.
//!
//! Transport and parser errors can carry control characters (from a hostile or
//! broken response body) and can be arbitrarily long. Messages are cleaned
//! before they are placed in the JSON output.

use crate::config::MAX_ERROR_MESSAGE_LENGTH;

/// Sanitizes a failure message by removing control characters.
///
/// Line breaks and tabs are folded into single spaces so the message reads as
/// one line in logs; other control characters (0x00-0x1F, 0x7F) are dropped.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter_map(|c| match c {
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Sanitizes and truncates a failure message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncation counts characters, not bytes, so multi-byte text is never split.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let char_count = sanitized.chars().count();

    if char_count > MAX_ERROR_MESSAGE_LENGTH {
        // Leave room for the truncation note
        let keep = MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        let truncated: String = sanitized.chars().take(keep).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        sanitized
    }
}
