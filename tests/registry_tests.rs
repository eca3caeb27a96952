use minify_common::{data_uri, minifiers, Minifier, Passthrough, Registry};

fn collapse_spaces(_mediatype: &[u8], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    for &c in data {
        if c == b' ' && out.last() == Some(&b' ') {
            continue;
        }
        out.push(c);
    }
    out
}

#[test]
fn test_minifiers_macro_builds_registry() {
    let registry = minifiers! {
        "text/css" => collapse_spaces,
        "image/svg+xml" => collapse_spaces,
        "image/png" => Passthrough,
    };
    assert_eq!(registry.len(), 3);
    assert!(registry.contains(b"image/svg+xml"));
    assert!(!registry.contains(b"text/html"));
}

#[test]
fn test_registry_matches_mimetype_without_params() {
    let registry = minifiers! { "text/css" => collapse_spaces };
    assert_eq!(
        registry.minify(b" TEXT/CSS ;charset=utf-8", b"a    b").unwrap(),
        b"a b"
    );
}

#[test]
fn test_unregistered_mimetype_passes_through() {
    let registry = Registry::new();
    assert_eq!(registry.minify(b"text/css", b"a    b").unwrap(), b"a    b");
}

#[test]
fn test_registry_drives_data_uri() {
    let registry = minifiers! { "image/svg+xml" => collapse_spaces };
    let out = data_uri(&registry, b"data:image/svg+xml,%3Csvg%20%20%20%20%2F%3E");
    assert_eq!(&*out, b"data:image/svg+xml,%3Csvg+%2F%3E");
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(minifiers! { "text/css" => collapse_spaces });
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || data_uri(&*registry, b"data:text/css,a%20%20b").into_owned())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), b"data:text/css,a+b");
    }
}
