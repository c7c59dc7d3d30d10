use crate::geometry::{BoundingBox, BoundingBoxBuilder, Point};

use super::extrema::{arc_extrema, cubic_extrema, quadratic_extrema};

/// A single absolute path primitive.
///
/// Every variant carries its start and end point, so a segment can be
/// inspected (and re-emitted) without reference to its neighbours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    /// Start of a sub-path; `start` and `end` are both the destination.
    Move { start: Point, end: Point },
    Line { start: Point, end: Point },
    CubicBezier {
        start: Point,
        control1: Point,
        control2: Point,
        end: Point,
    },
    QuadraticBezier {
        start: Point,
        control: Point,
        end: Point,
    },
    /// Elliptical arc; `radius` holds `rx + ry·i`, `rotation` is in degrees.
    Arc {
        start: Point,
        radius: Point,
        rotation: f32,
        large_arc: bool,
        sweep: bool,
        end: Point,
    },
    /// Return to the sub-path's initial point (`end`).
    Close { start: Point, end: Point },
}

impl Segment {
    pub fn start(&self) -> Point {
        match *self {
            Segment::Move { start, .. }
            | Segment::Line { start, .. }
            | Segment::CubicBezier { start, .. }
            | Segment::QuadraticBezier { start, .. }
            | Segment::Arc { start, .. }
            | Segment::Close { start, .. } => start,
        }
    }

    pub fn end(&self) -> Point {
        match *self {
            Segment::Move { end, .. }
            | Segment::Line { end, .. }
            | Segment::CubicBezier { end, .. }
            | Segment::QuadraticBezier { end, .. }
            | Segment::Arc { end, .. }
            | Segment::Close { end, .. } => end,
        }
    }

    pub fn is_close(&self) -> bool {
        matches!(self, Segment::Close { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Segment::Move { .. })
    }

    /// Geometric extent of the segment, including curve extrema.
    pub fn bbox(&self) -> BoundingBox {
        let mut builder = BoundingBoxBuilder::new();
        builder.add_point(self.start());
        match *self {
            Segment::CubicBezier {
                start,
                control1,
                control2,
                end,
            } => {
                for p in cubic_extrema(start, control1, control2, end) {
                    builder.add_point(p);
                }
            }
            Segment::QuadraticBezier {
                start,
                control,
                end,
            } => {
                for p in quadratic_extrema(start, control, end) {
                    builder.add_point(p);
                }
            }
            Segment::Arc {
                start,
                radius,
                rotation,
                large_arc,
                sweep,
                end,
            } => {
                for p in arc_extrema(start, radius, rotation, large_arc, sweep, end) {
                    builder.add_point(p);
                }
            }
            Segment::Move { .. } | Segment::Line { .. } | Segment::Close { .. } => {}
        }
        builder.add_point(self.end());
        // always Some(): at least the start point was added
        builder
            .build()
            .unwrap_or_else(|| BoundingBox::from_point(self.start()))
    }
}
