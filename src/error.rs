//! Error types for data URI parsing, percent-unescaping and mediatype dispatch.
//!
//! The canonicalizers exported from the crate root never fail: they fall back
//! to returning their input unchanged. Errors only surface from the lower-level
//! building blocks ([`parse_data_uri`](crate::parse_data_uri),
//! [`query_unescape`](crate::escape::query_unescape) and
//! [`Minifier`](crate::Minifier) implementations), so callers that need to know
//! *why* a rewrite was skipped can call those directly.
//!
//! ## Examples
//!
//! ```rust
//! use minify_common::{parse_data_uri, Error};
//!
//! let result = parse_data_uri(b"data:text/plain;hello");
//! assert!(matches!(result, Err(Error::BadDataUri(_))));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised by the building blocks of this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The input is not a `data:` URI (missing scheme or payload separator)
    #[error("Malformed data URI: {0}")]
    BadDataUri(String),

    /// The payload of a `;base64` data URI is not valid base64
    #[error("Invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// A `%` escape is truncated or not followed by two hex digits
    #[error("Invalid percent escape at offset {offset}")]
    InvalidEscape { offset: usize },

    /// A mediatype minifier rejected its input
    #[error("Minifier for {mediatype} failed: {msg}")]
    Minifier { mediatype: String, msg: String },
}

impl Error {
    /// Creates a malformed data URI error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minify_common::Error;
    ///
    /// let err = Error::bad_data_uri("missing comma");
    /// assert!(err.to_string().contains("missing comma"));
    /// ```
    pub fn bad_data_uri(msg: &str) -> Self {
        Error::BadDataUri(msg.to_string())
    }

    /// Creates an invalid percent escape error at the given byte offset.
    pub fn invalid_escape(offset: usize) -> Self {
        Error::InvalidEscape { offset }
    }

    /// Creates a minifier failure for the given mediatype.
    ///
    /// The mediatype is converted lossily so that non-UTF-8 header bytes still
    /// produce a readable message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minify_common::Error;
    ///
    /// let err = Error::minifier(b"text/css", "unexpected token");
    /// assert_eq!(err.to_string(), "Minifier for text/css failed: unexpected token");
    /// ```
    pub fn minifier<T: fmt::Display>(mediatype: &[u8], msg: T) -> Self {
        Error::Minifier {
            mediatype: String::from_utf8_lossy(mediatype).into_owned(),
            msg: msg.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
