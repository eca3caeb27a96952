//! Configuration options for data URI rewriting.
//!
//! The defaults reproduce the shortest-output behaviour; the options exist for
//! callers whose downstream consumers are stricter than RFC 2397.
//!
//! - [`DataUriOptions`]: Main configuration struct
//! - [`EncodingPreference`]: Automatic or forced payload encoding
//!
//! ## Examples
//!
//! ```rust
//! use minify_common::{data_uri_with_options, DataUriOptions, EncodingPreference, Passthrough};
//!
//! // Keep the explicit text/plain mediatype
//! let options = DataUriOptions::new().with_strip_default_mediatype(false);
//! let out = data_uri_with_options(&Passthrough, b"data:text/plain,hi", &options);
//! assert_eq!(&*out, b"data:text/plain,hi");
//!
//! // Always use base64
//! let options = DataUriOptions::new().with_encoding(EncodingPreference::Base64);
//! let out = data_uri_with_options(&Passthrough, b"data:,hi", &options);
//! assert_eq!(&*out, b"data:;base64,aGk=");
//! ```

use serde::{Deserialize, Serialize};

/// Which payload encoding the data URI rewriter emits.
///
/// # Examples
///
/// ```rust
/// use minify_common::EncodingPreference;
///
/// assert_eq!(EncodingPreference::default(), EncodingPreference::Auto);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingPreference {
    /// Pick the shorter of base64 and percent-encoding
    #[default]
    Auto,
    /// Always base64-encode the payload
    Base64,
    /// Always percent-encode the payload
    Percent,
}

/// Configuration options for [`data_uri_with_options`](crate::data_uri_with_options).
///
/// Options deserialize with every field optional, so a configuration file only
/// needs to list what it changes.
///
/// # Examples
///
/// ```rust
/// use minify_common::{DataUriOptions, EncodingPreference};
///
/// let options: DataUriOptions = serde_json::from_str(r#"{"encoding": "percent"}"#).unwrap();
/// assert_eq!(options.encoding, EncodingPreference::Percent);
/// assert!(options.strip_default_mediatype);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataUriOptions {
    /// Payload encoding to emit
    pub encoding: EncodingPreference,
    /// Drop a leading `text/plain`, the implicit mediatype of a data URI
    pub strip_default_mediatype: bool,
}

impl Default for DataUriOptions {
    fn default() -> Self {
        DataUriOptions {
            encoding: EncodingPreference::default(),
            strip_default_mediatype: true,
        }
    }
}

impl DataUriOptions {
    /// Creates default options (shortest encoding, strip `text/plain`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use minify_common::{DataUriOptions, EncodingPreference};
    ///
    /// let options = DataUriOptions::new();
    /// assert_eq!(options.encoding, EncodingPreference::Auto);
    /// assert!(options.strip_default_mediatype);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the payload encoding preference.
    #[must_use]
    pub fn with_encoding(mut self, encoding: EncodingPreference) -> Self {
        self.encoding = encoding;
        self
    }

    /// Sets whether a leading `text/plain` mediatype is dropped.
    #[must_use]
    pub fn with_strip_default_mediatype(mut self, strip: bool) -> Self {
        self.strip_default_mediatype = strip;
        self
    }
}
