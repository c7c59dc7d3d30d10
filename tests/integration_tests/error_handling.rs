// Error handling tests.

use iconstrip::{strip_str, Error, ScoreKind, StripConfig};

use super::utils::output_path;

fn area() -> StripConfig {
    StripConfig {
        score: ScoreKind::Area,
        ..StripConfig::radial()
    }
}

#[test]
fn test_error_multiple_paths() {
    let input = r#"<svg viewBox="0 0 48 48">
  <path d="M0 0 h48 v48 h-48 z"/>
  <path d="M20 20 h8 v8 h-8 z"/>
</svg>"#;
    assert!(matches!(
        strip_str(input, &StripConfig::radial()),
        Err(Error::UnsupportedInput(_))
    ));
}

#[test]
fn test_error_no_view_box() {
    let input = r#"<svg><path d="M0 0 h48 v48 h-48 z M20 20 h8 v8 h-8 z"/></svg>"#;
    assert!(matches!(
        strip_str(input, &StripConfig::radial()),
        Err(Error::MalformedInput(_))
    ));

    let input = r#"<svg viewBox="0 0 48"><path d="M0 0 h48 v48 h-48 z M20 20 h8 v8 h-8 z"/></svg>"#;
    assert!(matches!(
        strip_str(input, &StripConfig::radial()),
        Err(Error::MalformedInput(_))
    ));
}

#[test]
fn test_error_no_path() {
    for input in [
        r#"<svg viewBox="0 0 48 48"><rect width="48" height="48"/></svg>"#,
        r#"<svg viewBox="0 0 48 48"><g><path d="M0 0 h1 v1 z"/></g></svg>"#,
        r#"<svg viewBox="0 0 48 48"><path fill="red"/></svg>"#,
    ] {
        assert!(matches!(
            strip_str(input, &area()),
            Err(Error::MalformedInput(_))
        ));
    }
}

#[test]
fn test_error_bad_path_data() {
    for d in ["M0 0 L 10", "M0 0 X 1 1", "L 0 0 10 10 z", "M0 0 A 1 1 0 2 0 5 5 z"] {
        let input = format!(r#"<svg viewBox="0 0 48 48"><path d="{d}"/></svg>"#);
        assert!(
            matches!(strip_str(input, &area()), Err(Error::MalformedInput(_))),
            "{d} should be rejected"
        );
    }
}

#[test]
fn test_error_no_closed_shapes() {
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 L 48 48"/></svg>"#;
    assert!(matches!(
        strip_str(input, &area()),
        Err(Error::MalformedInput(_))
    ));
}

#[test]
fn test_error_bad_xml() {
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 z"></svg>"#;
    assert!(matches!(
        strip_str(input, &area()),
        Err(Error::Document(_))
    ));
}

#[test]
fn test_single_shape() {
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 h48 v48 h-48 z"/></svg>"#;
    assert!(matches!(
        strip_str(input, &StripConfig::radial()),
        Err(Error::EmptyResult)
    ));

    let config = StripConfig {
        allow_empty: true,
        ..StripConfig::radial()
    };
    let output = strip_str(input, &config).unwrap();
    assert_eq!(output, r#"<svg viewBox="0 0 48 48"><path d=""/></svg>"#);
    assert!(output_path(&output).is_empty());
}

#[test]
fn test_trailing_open_segments_dropped() {
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 h48 v48 h-48 z M20 20 h8 v8 h-8 z M1 1 l 5 5"/></svg>"#;
    let path = output_path(&strip_str(input, &area()).unwrap());
    assert_eq!(path.close_count(), 1);
    assert!(path.segments().last().unwrap().is_close());
}
