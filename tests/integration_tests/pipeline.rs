use iconstrip::geometry::BoundingBox;
use iconstrip::path::{split_contours, Segment};
use iconstrip::strip::QuadraticControl;
use iconstrip::{strip_str, ScaleAnchor, ScoreKind, StripConfig};

use assertables::assert_contains;

use super::utils::{strip, CIRCLE_ICON, SQUARE_ICON};

const CENTER: ScaleAnchor = ScaleAnchor::Center {
    quadratic_control: QuadraticControl::Translate,
};

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-2
}

#[test]
fn test_radial_removes_circle() {
    let path = strip(CIRCLE_ICON, &StripConfig::radial());
    assert_eq!(path.close_count(), 1);
    assert!(!path
        .segments()
        .iter()
        .any(|s| matches!(s, Segment::Arc { .. })));
    // 8x8 glyph scaled by 6 from the origin
    assert_eq!(path.bbox(), Some(BoundingBox::new(120., 168., 120., 168.)));
}

#[test]
fn test_radial_center_anchor_fills_canvas() {
    let config = StripConfig {
        anchor: CENTER,
        ..StripConfig::radial()
    };
    let bbox = strip(CIRCLE_ICON, &config).bbox().unwrap();
    assert!(approx_eq(bbox.min_x, 0.) && approx_eq(bbox.max_x, 48.));
    assert!(approx_eq(bbox.min_y, 0.) && approx_eq(bbox.max_y, 48.));
}

#[test]
fn test_area_selects_background() {
    let config = StripConfig {
        score: ScoreKind::Area,
        anchor: CENTER,
        ..StripConfig::radial()
    };
    let path = strip(SQUARE_ICON, &config);
    let contours = split_contours(&path);
    assert_eq!(contours.len(), 2);
    // relative order of the glyphs is kept
    assert!(contours[0].bbox().max_x < contours[1].bbox().min_x);

    let bbox = path.bbox().unwrap();
    assert!(approx_eq(bbox.min_x, 0.) && approx_eq(bbox.max_x, 48.));
    assert!(approx_eq(bbox.center().im, 24.));
}

#[test]
fn test_area_ring_preset() {
    let config = StripConfig::area_ring();
    let path = strip(SQUARE_ICON, &config);
    let contours = split_contours(&path);
    assert_eq!(contours.len(), 3);

    // glyphs fitted to the inner box
    let glyphs = contours[0].bbox().combine(&contours[1].bbox());
    assert!(config.target.contains(&glyphs, 1e-2));
    assert!(approx_eq(glyphs.min_x, 8.) && approx_eq(glyphs.max_x, 40.));

    // ring spans the canvas
    let ring = contours[2].bbox();
    assert!(ring.contains(&BoundingBox::square(48.), 1e-2));
    assert!(BoundingBox::square(48.).contains(&ring, 1e-2));
}

#[test]
fn test_ring_output_data() {
    let output = strip_str(SQUARE_ICON, &StripConfig::area_ring()).unwrap();
    assert_contains!(output, "M 0,24 A 24,24 0 0,1 48,24 A 24,24 0 0,1 0,24 Z");
}

#[test]
fn test_curves_use_true_extent() {
    // the cubic bulges above its end points to y=13.5
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 h48 v48 h-48 z M14 24 C14 10 34 10 34 24 Z"/></svg>"#;
    let config = StripConfig {
        score: ScoreKind::Area,
        anchor: CENTER,
        ..StripConfig::radial()
    };
    let path = strip(input, &config);
    let bbox = path.bbox().unwrap();
    assert!(approx_eq(bbox.min_y, 0.), "{bbox:?}");
    assert!(BoundingBox::square(48.).contains(&bbox, 1e-2));
    assert!(path
        .segments()
        .iter()
        .any(|s| matches!(s, Segment::CubicBezier { .. })));
}

#[test]
fn test_legacy_quadratic_differs() {
    let input = r#"<svg viewBox="0 0 48 48"><path d="M0 0 h48 v48 h-48 z M16 28 Q24 16 32 28 Z"/></svg>"#;
    let translate = StripConfig {
        score: ScoreKind::Area,
        anchor: CENTER,
        ..StripConfig::radial()
    };
    let legacy = StripConfig {
        anchor: ScaleAnchor::Center {
            quadratic_control: QuadraticControl::ScaleOnly,
        },
        ..translate.clone()
    };

    let control = |config: &StripConfig| {
        strip(input, config)
            .segments()
            .iter()
            .find_map(|s| match s {
                Segment::QuadraticBezier { control, .. } => Some(*control),
                _ => None,
            })
            .unwrap()
    };
    let a = control(&translate);
    let b = control(&legacy);
    assert!((a - b).norm() > 1.);
    // translated control stays between the curve's end points
    assert!(a.re > 0. && a.re < 48.);
}

#[test]
fn test_identity_when_already_fitted() {
    // glyph already touches the canvas edges after removing the background
    let input = r#"<svg viewBox="0 0 48 48"><path d="M-10 -10 h68 v68 h-68 z M0 0 h48 v48 h-48 z"/></svg>"#;
    let config = StripConfig {
        score: ScoreKind::Area,
        ..StripConfig::radial()
    };
    let output = strip_str(input, &config).unwrap();
    assert_contains!(output, r#"d="M 0,0 L 48,0 L 48,48 L 0,48 Z""#);
}
