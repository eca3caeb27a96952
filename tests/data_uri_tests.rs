use minify_common::{
    data_uri, data_uri_with_options, parse_data_uri, DataUriOptions, EncodingPreference, Error,
    Minifier, Passthrough, Registry, Result,
};
use std::borrow::Cow;

fn rewrite(uri: &[u8]) -> Vec<u8> {
    data_uri(&Passthrough, uri).into_owned()
}

fn decode(uri: &[u8]) -> Vec<u8> {
    parse_data_uri(uri).unwrap().data
}

#[test]
fn test_roundtrip_identity_dispatch() {
    let uris: [&[u8]; 5] = [
        b"data:,Hello%2C%20World!",
        b"data:text/plain;base64,SGVsbG8sIFdvcmxkIQ==",
        b"data:text/html,%3Ch1%3EHello%3C%2Fh1%3E",
        b"data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7",
        b"data:;charset=utf-8,caf%C3%A9",
    ];
    for uri in uris {
        let out = rewrite(uri);
        assert_eq!(decode(&out), decode(uri), "uri: {}", String::from_utf8_lossy(uri));
        assert!(out.starts_with(b"data:"));
    }
}

#[test]
fn test_text_plain_prefix_is_stripped() {
    assert_eq!(rewrite(b"data:text/plain,abc"), b"data:,abc");
    assert_eq!(rewrite(b"data:text/plain;charset=US-ASCII,abc"), b"data:;charset=US-ASCII,abc");
    assert_eq!(rewrite(b"data:,abc"), b"data:,abc");
}

#[test]
fn test_printable_text_prefers_percent() {
    let out = rewrite(b"data:text/plain;base64,SGVsbG8sIFdvcmxkIQ==");
    assert_eq!(out, b"data:,Hello%2C+World%21");
}

#[test]
fn test_binary_prefers_base64() {
    let out =
        rewrite(b"data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7");
    assert_eq!(
        out,
        b"data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7".to_vec()
    );
}

#[test]
fn test_malformed_input_is_returned_verbatim() {
    let inputs: [&[u8]; 4] = [
        b"data:text/plain;hello",
        b"data:",
        b"image.png",
        b"data:;base64,not base64!",
    ];
    for input in inputs {
        match data_uri(&Passthrough, input) {
            Cow::Borrowed(out) => assert_eq!(out, input),
            Cow::Owned(out) => panic!("rewrote malformed input to {:?}", out),
        }
    }
}

#[test]
fn test_dispatch_receives_mediatype_and_payload() {
    let mut registry = Registry::new();
    registry.add("text/css", |mediatype: &[u8], data: &[u8]| {
        assert_eq!(mediatype, b"text/css;charset=utf-8");
        data.iter().copied().filter(|c| !c.is_ascii_whitespace()).collect::<Vec<u8>>()
    });

    let out = data_uri(&registry, b"data:text/css;charset=utf-8,a%20%7B%20color%3A%20red%20%7D");
    assert_eq!(&*out, b"data:text/css;charset=utf-8,a%7Bcolor%3Ared%7D");
}

struct Broken;

impl Minifier for Broken {
    fn minify(&self, mediatype: &[u8], _data: &[u8]) -> Result<Vec<u8>> {
        Err(Error::minifier(mediatype, "parse error"))
    }
}

#[test]
fn test_failing_minifier_keeps_decoded_payload() {
    let out = data_uri(&Broken, b"data:image/svg+xml;base64,PHN2Zy8+");
    assert_eq!(&*out, b"data:image/svg+xml,%3Csvg%2F%3E");
}

#[test]
fn test_forced_encodings() {
    let base64 = DataUriOptions::new().with_encoding(EncodingPreference::Base64);
    let out = data_uri_with_options(&Passthrough, b"data:text/css,a", &base64);
    assert_eq!(&*out, b"data:text/css;base64,YQ==");

    let percent = DataUriOptions::new().with_encoding(EncodingPreference::Percent);
    let out = data_uri_with_options(&Passthrough, b"data:text/css;base64,//8=", &percent);
    assert_eq!(&*out, b"data:text/css,%FF%FF");
}

#[test]
fn test_quotes_never_appear_unescaped() {
    let quote = |_: &[u8], _: &[u8]| b"say \"hi\"".to_vec();
    let out = data_uri(&quote, b"data:,x");
    assert_eq!(&*out, b"data:,say+%22hi%22");
    assert!(!out.contains(&b'"'));
}
