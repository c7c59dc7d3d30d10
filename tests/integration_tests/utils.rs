use iconstrip::{strip_str, CompoundPath, StripConfig, SvgDocument};

/// Outer circle of radius 20 around (24, 24) holding a small square glyph.
pub const CIRCLE_ICON: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 48 48">
  <title>badge</title>
  <path fill="#1a1a1a" d="M4 24 A20 20 0 0 1 44 24 A20 20 0 0 1 4 24 Z M20 20 h8 v8 h-8 z"/>
</svg>
"##;

/// Square background followed by two glyph shapes.
pub const SQUARE_ICON: &str = r#"<svg viewBox="0 0 48 48"><path d="M0 0 H48 V48 H0 Z M12 20 h8 v8 h-8 z M28 20 h8 v8 h-8 z"/></svg>"#;

/// Parse the single path of an output document.
pub fn output_path(output: &str) -> CompoundPath {
    let doc: SvgDocument = output.parse().expect("output should be a valid document");
    CompoundPath::parse(&doc.path_data().expect("output should have a path"))
        .expect("output path data should parse")
}

pub fn strip(input: &str, config: &StripConfig) -> CompoundPath {
    output_path(&strip_str(input, config).expect("strip failure"))
}
