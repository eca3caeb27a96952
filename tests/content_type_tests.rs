use minify_common::content_type;
use minify_common::content_type::content_type_owned;

fn minify(s: &str) -> String {
    let mut buf = s.as_bytes().to_vec();
    String::from_utf8(content_type(&mut buf).to_vec()).unwrap()
}

#[test]
fn test_whitespace_and_case_outside_quotes() {
    let out = minify(" Text/HTML ; Charset=\"UTF 8\" ");
    assert_eq!(out, "text/html;charset=\"UTF 8\"");
    assert!(out.contains("\"UTF 8\""));
    assert!(!out.contains(" ;"));
}

#[test]
fn test_all_whitespace_kinds_removed() {
    assert_eq!(minify("text/plain;\tcharset=utf-8\r\n"), "text/plain;charset=utf-8");
    assert_eq!(minify("\x0cimage/png"), "image/png");
}

#[test]
fn test_multiple_quoted_parameters() {
    assert_eq!(
        minify("Multipart/Mixed; Boundary=\"A B\"; Name=\"X Y\""),
        "multipart/mixed;boundary=\"A B\";name=\"X Y\""
    );
}

#[test]
fn test_already_minimal_is_untouched() {
    assert_eq!(minify("application/json"), "application/json");
    assert_eq!(minify(""), "");
}

#[test]
fn test_idempotent() {
    let once = minify(" Text/HTML ; Charset=\"UTF 8\" ");
    assert_eq!(minify(&once), once);
}

#[test]
fn test_owned_buffer() {
    assert_eq!(content_type_owned(b"TEXT/CSS ; media=\"A\"".to_vec()), b"text/css;media=\"A\"");
}
