//! Compaction of MIME content-type strings.
//!
//! Whitespace outside double quotes is insignificant in a content type, and
//! type, subtype and parameter names are case-insensitive. [`content_type`]
//! drops the former and lowercases the latter in a single in-place pass, while
//! quoted parameter values are kept byte-for-byte.
//!
//! ```rust
//! use minify_common::content_type;
//!
//! let mut buf = b" Text/HTML ; Charset=\"UTF 8\" ".to_vec();
//! assert_eq!(content_type(&mut buf), b"text/html;charset=\"UTF 8\"");
//! ```

use crate::escape::is_whitespace;

/// Removes unquoted whitespace and lowercases unquoted bytes in place.
///
/// Quote state toggles on every `"` byte; there is no escape handling. The
/// returned slice is a prefix of `b`.
pub fn content_type(b: &mut [u8]) -> &[u8] {
    let len = compact(b);
    &b[..len]
}

/// Same as [`content_type`] for an owned buffer, truncating it to the result.
///
/// ```rust
/// use minify_common::content_type::content_type_owned;
///
/// assert_eq!(content_type_owned(b"Image/SVG+XML".to_vec()), b"image/svg+xml");
/// ```
pub fn content_type_owned(mut b: Vec<u8>) -> Vec<u8> {
    let len = compact(&mut b);
    b.truncate(len);
    b
}

fn compact(b: &mut [u8]) -> usize {
    let mut j = 0;
    let mut in_string = false;
    for i in 0..b.len() {
        let c = b[i];
        if !in_string && is_whitespace(c) {
            continue;
        }
        if c == b'"' {
            in_string = !in_string;
            b[j] = c;
        } else if in_string {
            b[j] = c;
        } else {
            b[j] = c.to_ascii_lowercase();
        }
        j += 1;
    }
    j
}
