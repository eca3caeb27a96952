//! # minify_common
//!
//! Shortest-form rewriting shared by content minifiers: numeric literals, MIME
//! content types and `data:` URIs.
//!
//! Each routine shrinks its input without changing what it means. A number
//! keeps its exact value, a content type keeps its parameters and quoted
//! values, and a data URI decodes to the same payload (after the payload has
//! been minified by a caller-supplied [`Minifier`]).
//!
//! ## Key Features
//!
//! - **In place**: [`number`] and [`content_type`] compact the caller's buffer
//!   and return a sub-slice of it; the output is never longer than the input
//! - **Total**: malformed input is returned unchanged instead of raising errors
//! - **Injected dispatch**: data URI payloads are minified by a [`Minifier`] you
//!   pass in, for example a [`Registry`] keyed by mimetype
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use minify_common::{content_type, data_uri, number, Passthrough};
//!
//! let mut num = b"+0.50".to_vec();
//! assert_eq!(number(&mut num), b".5");
//!
//! let mut num = b"12000".to_vec();
//! assert_eq!(number(&mut num), b"12e3");
//!
//! let mut mime = b"Text/HTML; Charset=\"UTF-8\"".to_vec();
//! assert_eq!(content_type(&mut mime), b"text/html;charset=\"UTF-8\"");
//!
//! let uri = data_uri(&Passthrough, b"data:text/plain;base64,aGk=");
//! assert_eq!(&*uri, b"data:,hi");
//! ```
//!
//! ## Number Forms
//!
//! A literal is reduced to its significant digits `d` and exponent `e`, then:
//!
//! - `e == 0`: the digits alone (`1.0` → `1`)
//! - `e > 2`, or `e + len(d) < -2`: scientific (`1000` → `1e3`,
//!   `0.0001` → `1e-4`)
//! - `e < 0` otherwise: a decimal point is reinserted (`0.0123` → `.0123`)
//! - `0 < e <= 2`: trailing zeros (`1e2` → `100`)
//!
//! Zero of any sign and padding becomes `0`.
//!
//! ## Logging
//!
//! Fallback paths (malformed data URIs, failing payload minifiers, exponents
//! that do not fit 64 bits) emit `tracing` events at `debug` and `trace` level.
//! The crate never installs a subscriber.

pub mod content_type;
pub mod data_uri;
pub mod error;
pub mod escape;
pub mod macros;
pub mod minifier;
pub mod number;
pub mod options;

pub use content_type::content_type;
pub use data_uri::{
    choose_encoding, data_uri, data_uri_with_options, parse_data_uri, DataUri, Encoding,
};
pub use error::{Error, Result};
pub use minifier::{Minifier, Passthrough, Registry};
pub use number::number;
pub use options::{DataUriOptions, EncodingPreference};
