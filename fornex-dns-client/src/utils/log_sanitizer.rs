//! Log sanitization utilities
//!
//! Keeps large TXT/DKIM payloads from flooding debug logs and keeps the
//! API key out of `Debug` output.

/// Maximum number of bytes to include in truncated log output.
const TRUNCATE_LIMIT: usize = 256;

/// Placeholder printed instead of a secret.
pub const REDACTED: &str = "<REDACTED>";

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        s.len()
    } else {
        let mut i = index;
        while i > 0 && !s.is_char_boundary(i) {
            i -= 1;
        }
        i
    }
}

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the first
/// `TRUNCATE_LIMIT` bytes (on a char boundary) with a suffix giving the total length.
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

/// Same as [`truncate_for_log`] for a raw response body.
pub fn truncate_bytes_for_log(bytes: &[u8]) -> String {
    truncate_for_log(&String::from_utf8_lossy(bytes))
}

/// Render a secret for `Debug` output: empty stays visibly empty, anything else is hidden.
pub fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { REDACTED }
}
