//! Log sanitization utilities
//!
//! Record values (DKIM keys, SPF strings, verification tokens) can be long and
//! sensitive. Debug logs only ever get a bounded preview of them.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary `<= index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) plus the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        s.to_string()
    } else {
        format!(
            "{}... [truncated, total {} bytes]",
            &s[..floor_char_boundary(s, TRUNCATE_LIMIT)],
            s.len()
        )
    }
}

/// One-line preview of a record set's values, e.g. `[1.2.3.4, 5.6.7.8]`.
pub fn preview_values(values: &[String]) -> String {
    truncate_for_log(&format!("[{}]", values.join(", ")))
}
