//! Origin normalizer.
//!
//! Raw configuration and environment values often carry accidental quoting
//! or trailing slashes (typically from `.env` files). The same
//! normalization is applied to configured entries and to incoming request
//! origins so exact comparison is meaningful.

/// Canonicalize a raw origin value into a comparable form.
///
/// - absent input returns an empty string
/// - leading/trailing whitespace is trimmed
/// - one layer of wrapping quotes (`"` or `'`) is stripped when a quote
///   character is present at both ends
/// - any number of trailing `/` characters is stripped
///
/// Scheme, host, and port are left untouched: no case folding, no percent
/// decoding. Total function, never fails.
pub fn normalize_origin(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };
    let trimmed = raw.trim();
    strip_wrapping_quotes(trimmed).trim_end_matches('/').to_string()
}

fn strip_wrapping_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        let is_quote = |b: u8| b == b'"' || b == b'\'';
        if is_quote(first) && is_quote(last) {
            return &s[1..s.len() - 1];
        }
    }
    s
}
