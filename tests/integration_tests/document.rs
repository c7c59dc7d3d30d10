use iconstrip::{strip_str, StripConfig, SvgDocument};

use assertables::{assert_contains, assert_not_contains};

use super::utils::CIRCLE_ICON;

#[test]
fn test_document_preserved() {
    let output = strip_str(CIRCLE_ICON, &StripConfig::radial()).unwrap();

    assert!(output.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert_contains!(
        output,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 48 48">"#
    );
    assert_contains!(output, "<title>badge</title>");
    // attribute order is kept, only `d` changes
    assert_contains!(output, r##"<path fill="#1a1a1a" d="M "##);
    assert_not_contains!(output, "A20 20");
    assert!(output.ends_with("</svg>\n"));
}

#[test]
fn test_only_path_changes() {
    let output = strip_str(CIRCLE_ICON, &StripConfig::radial()).unwrap();
    let doc: SvgDocument = output.parse().unwrap();
    let d = doc.path_data().unwrap();

    let orig: SvgDocument = CIRCLE_ICON.parse().unwrap();
    let mut restored = Vec::new();
    doc.with_path_data(&orig.path_data().unwrap())
        .unwrap()
        .write_to(&mut restored)
        .unwrap();
    assert_eq!(String::from_utf8(restored).unwrap(), CIRCLE_ICON);
    assert_ne!(d, orig.path_data().unwrap());
}

#[test]
fn test_entities_in_path_data() {
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 h48 v48 h-48 z&#10;M20 20 h8 v8 h-8 z"/></svg>"#;
    let output = strip_str(input, &StripConfig::radial()).unwrap();
    assert_contains!(output, r#"<path d="M 120,120 L 168,120 L 168,168 L 120,168 Z"/>"#);
}
