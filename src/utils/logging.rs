//! Logging utilities
//!
//! Shared helpers for keeping upstream payloads readable in logs

/// Upstream bodies longer than this are cut in debug logs
pub const BODY_PREVIEW_LIMIT: usize = 200;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        let mut end = max_len;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... ({} chars truncated)", &s[..end], s.len() - end)
    } else {
        s.to_string()
    }
}

/// Render raw upstream bytes for a log line
pub fn preview_body(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    truncate_content(&text, BODY_PREVIEW_LIMIT)
}
