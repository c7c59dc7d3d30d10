use tracing::debug;

use crate::geometry::{BoundingBox, Point};
use crate::path::{CompoundPath, Segment};

const EPSILON: f32 = 1e-6;

/// Treatment of quadratic Bezier control points under center-anchored
/// scaling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuadraticControl {
    /// Scale and translate, as for every other point
    #[default]
    Translate,
    /// Scale only, leaving the control point offset from the rest of the
    /// curve after translation. This matches a long-standing behaviour of
    /// the icon scripts and is kept selectable for reproducing old output.
    ScaleOnly,
}

/// Where scaling originates from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScaleAnchor {
    /// Uniform scale about the coordinate origin, no translation
    #[default]
    Origin,
    /// Fit about the target box center
    Center { quadratic_control: QuadraticControl },
}

/// A uniform scale followed by a translation: `p * ratio + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub ratio: f32,
    pub offset: Point,
}

impl Scaling {
    pub fn about_origin(ratio: f32) -> Self {
        Self {
            ratio,
            offset: Point::new(0., 0.),
        }
    }

    /// Scale by `ratio` keeping `center` fixed
    pub fn about(center: Point, ratio: f32) -> Self {
        Self {
            ratio,
            offset: center * (1. - ratio),
        }
    }

    pub fn point(&self, p: Point) -> Point {
        p * self.ratio + self.offset
    }

    /// Scale without translating; used for magnitudes such as arc radii.
    pub fn magnitude(&self, v: Point) -> Point {
        v * self.ratio
    }

    pub fn segment(&self, seg: &Segment, quadratic_control: QuadraticControl) -> Segment {
        match *seg {
            Segment::Move { start, end } => Segment::Move {
                start: self.point(start),
                end: self.point(end),
            },
            Segment::Line { start, end } => Segment::Line {
                start: self.point(start),
                end: self.point(end),
            },
            Segment::Close { start, end } => Segment::Close {
                start: self.point(start),
                end: self.point(end),
            },
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => Segment::CubicBezier {
                start: self.point(start),
                control1: self.point(control1),
                control2: self.point(control2),
                end: self.point(end),
            },
            Segment::QuadraticBezier {
                start,
                control,
                end,
            } => Segment::QuadraticBezier {
                start: self.point(start),
                control: match quadratic_control {
                    QuadraticControl::Translate => self.point(control),
                    QuadraticControl::ScaleOnly => self.magnitude(control),
                },
                end: self.point(end),
            },
            Segment::Arc {
                start,
                radius,
                rotation,
                large_arc,
                sweep,
                end,
            } => Segment::Arc {
                start: self.point(start),
                radius: self.magnitude(radius),
                rotation,
                large_arc,
                sweep,
                end: self.point(end),
            },
        }
    }

    pub fn apply(&self, path: &CompoundPath, quadratic_control: QuadraticControl) -> CompoundPath {
        path.segments()
            .iter()
            .map(|seg| self.segment(seg, quadratic_control))
            .collect()
    }
}

/// Ratio which makes the larger dimension of `bbox` equal to the smaller
/// side of `target`.
fn origin_ratio(bbox: &BoundingBox, target: &BoundingBox) -> Option<f32> {
    let current = bbox.width().max(bbox.height());
    if current < EPSILON {
        return None;
    }
    Some(target.width().min(target.height()) / current)
}

/// Ratio about the target center which brings the worst-case edge of
/// `bbox` onto the matching edge of `target`.
///
/// Each of the four bbox edges is paired with the same target edge; the
/// pair whose source deviation from the center is greatest relative to the
/// target deviation wins (first pair on ties).
///
/// For a square target this is the pair with the greatest absolute source
/// deviation. For a non-square target the absolute rule could pick an edge
/// on the long axis and overflow the short one; ranking relative to the
/// target keeps the result inside `target`.
fn center_ratio(bbox: &BoundingBox, target: &BoundingBox) -> Option<f32> {
    let center = target.center();
    let pairs = [
        (bbox.min_x, target.min_x, center.re),
        (bbox.max_x, target.max_x, center.re),
        (bbox.min_y, target.min_y, center.im),
        (bbox.max_y, target.max_y, center.im),
    ];

    let mut worst: Option<(f32, f32, f32)> = None;
    for (source, dest, axis_center) in pairs {
        let source_dev = (axis_center - source).abs();
        let dest_dev = (axis_center - dest).abs();
        if dest_dev < EPSILON {
            continue;
        }
        let relative = source_dev / dest_dev;
        match worst {
            Some((best, _, _)) if relative <= best => {}
            _ => worst = Some((relative, source_dev, dest_dev)),
        }
    }

    let (_, source_dev, dest_dev) = worst?;
    if source_dev < EPSILON {
        return None;
    }
    Some(dest_dev / source_dev)
}

/// Compute the `Scaling` which fits `path` to `target` for the given anchor.
///
/// Returns `None` for an empty or degenerate path, in which case there is
/// nothing meaningful to scale.
pub fn fit_scaling(
    path: &CompoundPath,
    target: &BoundingBox,
    anchor: ScaleAnchor,
) -> Option<Scaling> {
    let bbox = path.bbox()?;
    match anchor {
        ScaleAnchor::Origin => origin_ratio(&bbox, target).map(Scaling::about_origin),
        ScaleAnchor::Center { .. } => {
            center_ratio(&bbox, target).map(|ratio| Scaling::about(target.center(), ratio))
        }
    }
}

/// Scale (and for center anchoring, translate) every point of `path` so that
/// it fits `target`.
pub fn scale_to_box(path: &CompoundPath, target: &BoundingBox, anchor: ScaleAnchor) -> CompoundPath {
    let Some(scaling) = fit_scaling(path, target, anchor) else {
        debug!("nothing to scale");
        return path.clone();
    };
    debug!(ratio = scaling.ratio, offset = ?scaling.offset, "scaling path");
    let quadratic_control = match anchor {
        ScaleAnchor::Origin => QuadraticControl::Translate,
        ScaleAnchor::Center { quadratic_control } => quadratic_control,
    };
    scaling.apply(path, quadratic_control)
}
