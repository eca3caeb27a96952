/// Builds a [`Registry`](crate::Registry) from `mimetype => minifier` pairs.
///
/// ```rust
/// use minify_common::{minifiers, Minifier, Passthrough};
///
/// fn lowercase(_mediatype: &[u8], data: &[u8]) -> Vec<u8> {
///     data.to_ascii_lowercase()
/// }
///
/// let registry = minifiers! {
///     "text/css" => lowercase,
///     "image/svg+xml" => Passthrough,
/// };
/// assert_eq!(registry.len(), 2);
/// assert_eq!(registry.minify(b"text/css", b"A{}").unwrap(), b"a{}");
/// ```
#[macro_export]
macro_rules! minifiers {
    // Handle empty registry
    () => {
        $crate::Registry::new()
    };

    ($($mimetype:expr => $minifier:expr),+ $(,)?) => {{
        let mut registry = $crate::Registry::new();
        $(
            registry.add($mimetype, $minifier);
        )+
        registry
    }};
}
