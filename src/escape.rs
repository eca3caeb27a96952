//! Byte classes and URL query percent-escaping.
//!
//! The escaping follows the `application/x-www-form-urlencoded` rules used for
//! URL query components: ASCII alphanumerics and `-_.~` are kept, a space
//! becomes `+`, and every other byte is written as `%XX` with upper-case hex
//! digits. Unescaping accepts both `+` and `%20` for a space.

use crate::error::{Error, Result};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Returns whether `c` is an unreserved URL character (kept verbatim when escaping).
///
/// ```rust
/// use minify_common::escape::is_unreserved;
///
/// assert!(is_unreserved(b'a'));
/// assert!(is_unreserved(b'~'));
/// assert!(!is_unreserved(b' '));
/// assert!(!is_unreserved(b'/'));
/// ```
#[must_use]
pub const fn is_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'_' | b'.' | b'~')
}

/// Whitespace as understood by markup and stylesheet lexers.
#[must_use]
pub const fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | b'\x0c')
}

/// Strips leading and trailing [whitespace](is_whitespace).
pub(crate) fn trim_whitespace(mut b: &[u8]) -> &[u8] {
    while let Some((&c, rest)) = b.split_first() {
        if !is_whitespace(c) {
            break;
        }
        b = rest;
    }
    while let Some((&c, rest)) = b.split_last() {
        if !is_whitespace(c) {
            break;
        }
        b = rest;
    }
    b
}

/// Percent-escapes `data` for use in a URL query component.
///
/// ```rust
/// use minify_common::escape::query_escape;
///
/// assert_eq!(query_escape(b"a b/c"), b"a+b%2Fc");
/// ```
#[must_use]
pub fn query_escape(data: &[u8]) -> Vec<u8> {
    let mut escaped = Vec::with_capacity(data.len());
    for &c in data {
        if is_unreserved(c) {
            escaped.push(c);
        } else if c == b' ' {
            escaped.push(b'+');
        } else {
            escaped.extend_from_slice(&[
                b'%',
                HEX[usize::from(c >> 4)],
                HEX[usize::from(c & 0x0f)],
            ]);
        }
    }
    escaped
}

/// Decodes a percent-escaped URL query component.
///
/// # Errors
///
/// Returns [`Error::InvalidEscape`] when a `%` is not followed by two hex digits.
///
/// ```rust
/// use minify_common::escape::query_unescape;
///
/// assert_eq!(query_unescape(b"a+b%2fc").unwrap(), b"a b/c");
/// assert!(query_unescape(b"100%").is_err());
/// ```
pub fn query_unescape(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoded = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        match data[i] {
            b'%' => {
                let hi = data.get(i + 1).copied().and_then(hex_value);
                let lo = data.get(i + 2).copied().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => decoded.push((hi << 4) | lo),
                    _ => return Err(Error::invalid_escape(i)),
                }
                i += 3;
            }
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            c => {
                decoded.push(c);
                i += 1;
            }
        }
    }
    Ok(decoded)
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}
