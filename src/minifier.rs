//! Mediatype dispatch for data URI payloads.
//!
//! A data URI payload is minified according to its mediatype before it is
//! re-encoded. The lookup is an injected capability, the [`Minifier`] trait,
//! rather than process-wide registration, so callers decide which minifiers are
//! available and tests can stub them.
//!
//! - Any `Fn(&[u8], &[u8]) -> Vec<u8>` closure or function is a [`Minifier`].
//! - [`Passthrough`] returns the payload unchanged.
//! - [`Registry`] maps mimetypes to minifiers, in registration order.
//!
//! ## Examples
//!
//! ```rust
//! use minify_common::{data_uri, Registry};
//!
//! fn shout(_mediatype: &[u8], data: &[u8]) -> Vec<u8> {
//!     data.to_ascii_uppercase()
//! }
//!
//! let mut registry = Registry::new();
//! registry.add("text/plain", shout);
//!
//! assert_eq!(&*data_uri(&registry, b"data:,hi"), b"data:,HI");
//! ```

use crate::error::Result;
use crate::escape::trim_whitespace;
use indexmap::IndexMap;
use std::fmt;

/// Minifies a payload according to its mediatype.
///
/// `mediatype` is the full mediatype of the data URI, parameters included
/// (`text/plain;charset=utf-8`). Implementations that do not handle a
/// mediatype should return the payload unchanged.
pub trait Minifier {
    /// Returns the minified payload.
    ///
    /// # Errors
    ///
    /// Implementations return an error when the payload cannot be minified;
    /// the data URI rewriter then keeps the decoded payload as is.
    fn minify(&self, mediatype: &[u8], data: &[u8]) -> Result<Vec<u8>>;
}

impl<F> Minifier for F
where
    F: Fn(&[u8], &[u8]) -> Vec<u8>,
{
    fn minify(&self, mediatype: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Ok(self(mediatype, data))
    }
}

/// A minifier that returns every payload unchanged.
///
/// ```rust
/// use minify_common::{Minifier, Passthrough};
///
/// assert_eq!(Passthrough.minify(b"image/png", b"\x89PNG").unwrap(), b"\x89PNG");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Minifier for Passthrough {
    fn minify(&self, _mediatype: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        Ok(data.to_vec())
    }
}

type BoxedMinifier = Box<dyn Minifier + Send + Sync>;

/// Minifiers keyed by mimetype.
///
/// Keys are matched without parameters, ignoring surrounding whitespace and
/// ASCII case, so `Text/CSS ; charset=utf-8` dispatches to the `text/css`
/// minifier. Payloads of unregistered mimetypes pass through unchanged.
#[derive(Default)]
pub struct Registry {
    minifiers: IndexMap<String, BoxedMinifier>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `minifier` for `mimetype`, replacing any previous entry.
    ///
    /// ```rust
    /// use minify_common::{Passthrough, Registry};
    ///
    /// let mut registry = Registry::new();
    /// registry.add("image/svg+xml", Passthrough).add("text/css", Passthrough);
    /// assert_eq!(registry.len(), 2);
    /// ```
    pub fn add<M>(&mut self, mimetype: &str, minifier: M) -> &mut Self
    where
        M: Minifier + Send + Sync + 'static,
    {
        self.minifiers
            .insert(mimetype_key(mimetype.as_bytes()), Box::new(minifier));
        self
    }

    /// Removes the minifier registered for `mimetype`, returning whether one existed.
    pub fn remove(&mut self, mimetype: &str) -> bool {
        self.minifiers
            .shift_remove(&mimetype_key(mimetype.as_bytes()))
            .is_some()
    }

    /// Returns whether a minifier is registered for the mediatype.
    #[must_use]
    pub fn contains(&self, mediatype: &[u8]) -> bool {
        self.minifiers.contains_key(&mimetype_key(mediatype))
    }

    /// Looks up the minifier for a mediatype, parameters allowed.
    #[must_use]
    pub fn get(&self, mediatype: &[u8]) -> Option<&(dyn Minifier + Send + Sync)> {
        self.minifiers
            .get(&mimetype_key(mediatype))
            .map(|minifier| minifier.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.minifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.minifiers.is_empty()
    }

    /// Registered mimetypes in registration order.
    pub fn mimetypes(&self) -> impl Iterator<Item = &str> {
        self.minifiers.keys().map(String::as_str)
    }
}

impl Minifier for Registry {
    fn minify(&self, mediatype: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        match self.get(mediatype) {
            Some(minifier) => minifier.minify(mediatype, data),
            None => Ok(data.to_vec()),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.mimetypes()).finish()
    }
}

/// `type/subtype` of a mediatype, lowercased and trimmed.
fn mimetype_key(mediatype: &[u8]) -> String {
    let end = mediatype
        .iter()
        .position(|&c| c == b';')
        .unwrap_or(mediatype.len());
    String::from_utf8_lossy(trim_whitespace(&mediatype[..end])).to_ascii_lowercase()
}
