//! Parsing and shortest re-encoding of `data:` URIs (RFC 2397).
//!
//! [`data_uri`] decodes a data URI, hands the payload to a [`Minifier`] chosen
//! by the caller, and re-encodes the result with whichever of base64 and
//! percent-encoding is estimated to be shorter. The implicit `text/plain`
//! mediatype is dropped from the output.
//!
//! ```rust
//! use minify_common::{data_uri, Passthrough};
//!
//! let out = data_uri(&Passthrough, b"data:text/plain;base64,SGVsbG8=");
//! assert_eq!(&*out, b"data:,Hello");
//!
//! // not a data URI: returned as is
//! let out = data_uri(&Passthrough, b"data:text/plain");
//! assert_eq!(&*out, b"data:text/plain");
//! ```

use crate::error::{Error, Result};
use crate::escape::{is_unreserved, query_escape, query_unescape, trim_whitespace};
use crate::minifier::Minifier;
use crate::options::{DataUriOptions, EncodingPreference};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::borrow::Cow;
use tracing::{debug, trace};

const SCHEME: &[u8] = b"data:";
const BASE64_MARKER: &[u8] = b";base64";
const DEFAULT_MEDIATYPE: &[u8] = b"text/plain";

/// A decoded data URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataUri {
    /// Mediatype including parameters, without the `;base64` marker
    pub mediatype: Vec<u8>,
    /// Decoded payload bytes
    pub data: Vec<u8>,
}

/// Payload encoding of a data URI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// Standard base64 with padding, marked by `;base64`
    Base64,
    /// URL query percent-escaping
    Percent,
}

/// Decodes a `data:` URI into its mediatype and payload.
///
/// Header pieces are separated by `;` or `=` and trimmed of whitespace; a
/// `base64` piece selects base64 decoding and is not part of the mediatype. An
/// empty mediatype, or one that starts with a parameter, gets `text/plain`. A
/// percent-encoded payload with an invalid escape is returned undecoded.
///
/// # Errors
///
/// Returns [`Error::BadDataUri`] when the scheme or the `,` separator is
/// missing, and [`Error::Base64`] when a base64 payload does not decode.
///
/// # Examples
///
/// ```rust
/// use minify_common::parse_data_uri;
///
/// let uri = parse_data_uri(b"data:;charset=utf-8,a%20b").unwrap();
/// assert_eq!(uri.mediatype, b"text/plain;charset=utf-8");
/// assert_eq!(uri.data, b"a b");
/// ```
pub fn parse_data_uri(uri: &[u8]) -> Result<DataUri> {
    let header = uri
        .strip_prefix(SCHEME)
        .ok_or_else(|| Error::bad_data_uri("missing data: scheme"))?;

    let mut mediatype = Vec::new();
    let mut base64 = false;
    let mut i = 0;
    for (j, &c) in header.iter().enumerate() {
        if c != b'=' && c != b';' && c != b',' {
            continue;
        }
        let piece = trim_whitespace(&header[i..j]);
        if c != b'=' && piece == b"base64" {
            if mediatype.last() == Some(&b';') {
                mediatype.pop();
            }
            base64 = true;
        } else {
            mediatype.extend_from_slice(piece);
            if c != b',' {
                mediatype.push(c);
            }
        }
        i = j + 1;

        if c == b',' {
            if mediatype.first().map_or(true, |&c| c == b';') {
                mediatype = [DEFAULT_MEDIATYPE, &mediatype[..]].concat();
            }
            let payload = &header[j + 1..];
            let data = if base64 {
                STANDARD.decode(payload)?
            } else {
                query_unescape(payload).unwrap_or_else(|err| {
                    trace!(error = %err, "keeping undecodable payload verbatim");
                    payload.to_vec()
                })
            };
            return Ok(DataUri { mediatype, data });
        }
    }
    Err(Error::bad_data_uri("missing ',' separator"))
}

/// Estimates which encoding of `data` is shorter.
///
/// Base64 costs its encoded length plus the `;base64` marker. Percent-encoding
/// is estimated at one byte per unreserved byte or space and two bytes for any
/// other byte; the scan stops as soon as that estimate exceeds the base64
/// cost. Base64 is chosen only when it is strictly shorter.
///
/// # Examples
///
/// ```rust
/// use minify_common::{choose_encoding, Encoding};
///
/// assert_eq!(choose_encoding(b"hello world"), Encoding::Percent);
/// assert_eq!(choose_encoding(&[0xff; 64]), Encoding::Base64);
/// ```
#[must_use]
pub fn choose_encoding(data: &[u8]) -> Encoding {
    let base64_len =
        base64::encoded_len(data.len(), true).map_or(usize::MAX, |len| len + BASE64_MARKER.len());
    let mut percent_len = 0usize;
    for &c in data {
        percent_len += if is_unreserved(c) || c == b' ' { 1 } else { 2 };
        if percent_len > base64_len {
            return Encoding::Base64;
        }
    }
    Encoding::Percent
}

/// Minifies a data URI with the default [`DataUriOptions`].
///
/// Returns the input unchanged, borrowed, when it cannot be decoded.
///
/// # Examples
///
/// ```rust
/// use minify_common::data_uri;
///
/// let strip_spaces = |_: &[u8], data: &[u8]| {
///     data.iter().copied().filter(|&c| c != b' ').collect::<Vec<u8>>()
/// };
/// let out = data_uri(&strip_spaces, b"data:text/css,%20a%7Bb:c%7D%20");
/// assert_eq!(&*out, b"data:text/css,a%7Bb%3Ac%7D");
/// ```
pub fn data_uri<'a, M>(minifier: &M, uri: &'a [u8]) -> Cow<'a, [u8]>
where
    M: Minifier + ?Sized,
{
    data_uri_with_options(minifier, uri, &DataUriOptions::default())
}

/// Minifies a data URI with custom options.
///
/// The payload is decoded, passed to `minifier` together with its mediatype,
/// and re-encoded as `data:` + mediatype + `,` + payload. A minifier error
/// keeps the decoded payload. Malformed input is returned unchanged.
pub fn data_uri_with_options<'a, M>(
    minifier: &M,
    uri: &'a [u8],
    options: &DataUriOptions,
) -> Cow<'a, [u8]>
where
    M: Minifier + ?Sized,
{
    let DataUri {
        mut mediatype,
        data,
    } = match parse_data_uri(uri) {
        Ok(parsed) => parsed,
        Err(err) => {
            debug!(error = %err, "leaving malformed data URI untouched");
            return Cow::Borrowed(uri);
        }
    };

    let data = match minifier.minify(&mediatype, &data) {
        Ok(minified) => minified,
        Err(err) => {
            debug!(
                mediatype = %String::from_utf8_lossy(&mediatype),
                error = %err,
                "payload minification failed, keeping decoded payload"
            );
            data
        }
    };

    let encoding = match options.encoding {
        EncodingPreference::Auto => choose_encoding(&data),
        EncodingPreference::Base64 => Encoding::Base64,
        EncodingPreference::Percent => Encoding::Percent,
    };
    trace!(?encoding, len = data.len(), "re-encoding data URI payload");

    let payload = match encoding {
        Encoding::Base64 => {
            mediatype.extend_from_slice(BASE64_MARKER);
            STANDARD.encode(&data).into_bytes()
        }
        Encoding::Percent => escape_quotes(query_escape(&data)),
    };

    let mediatype = match mediatype.strip_prefix(DEFAULT_MEDIATYPE) {
        Some(rest) if options.strip_default_mediatype => rest,
        _ => &mediatype[..],
    };

    let mut out = Vec::with_capacity(SCHEME.len() + mediatype.len() + 1 + payload.len());
    out.extend_from_slice(SCHEME);
    out.extend_from_slice(mediatype);
    out.push(b',');
    out.extend_from_slice(&payload);
    Cow::Owned(out)
}

/// Replaces every `"` with `\"`.
///
/// Query escaping already writes `"` as `%22`, so after [`query_escape`] this
/// finds nothing to replace.
fn escape_quotes(data: Vec<u8>) -> Vec<u8> {
    if !data.contains(&b'"') {
        return data;
    }
    let mut escaped = Vec::with_capacity(data.len() + 2);
    for c in data {
        if c == b'"' {
            escaped.push(b'\\');
        }
        escaped.push(c);
    }
    escaped
}
