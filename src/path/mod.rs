mod contour;
mod extrema;
mod parser;
mod segment;
mod syntax;

use std::fmt;

use itertools::Itertools;

use crate::errors::Result;
use crate::geometry::{BoundingBox, Point};
use crate::types::fstr;

pub use contour::{reassemble, split_contours, Contour};
pub use parser::PathParser;
pub use segment::Segment;

/// An ordered sequence of segments, possibly containing several sub-paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundPath {
    segments: Vec<Segment>,
}

impl CompoundPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(data: &str) -> Result<Self> {
        Ok(Self {
            segments: PathParser::new(data).parse()?,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Number of `Close` markers in the path
    pub fn close_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_close()).count()
    }

    /// Geometric extent of the whole path; `None` if the path is empty.
    pub fn bbox(&self) -> Option<BoundingBox> {
        BoundingBox::union(self.segments.iter().map(Segment::bbox))
    }

    /// Render as absolute SVG path data.
    ///
    /// Every coordinate goes through `fstr`, so values are rounded to three
    /// decimal places even where the segment itself was not changed.
    pub fn to_path_data(&self) -> String {
        let mut current: Option<Point> = None;
        let mut parts = Vec::with_capacity(self.segments.len());
        for seg in &self.segments {
            if !seg.is_move() && current != Some(seg.start()) {
                parts.push(format!("M {}", coord(seg.start())));
            }
            parts.push(segment_data(seg));
            current = Some(seg.end());
        }
        parts.join(" ")
    }
}

impl From<Vec<Segment>> for CompoundPath {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for CompoundPath {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for CompoundPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_path_data())
    }
}

fn coord(p: Point) -> String {
    format!("{},{}", fstr(p.re), fstr(p.im))
}

fn segment_data(seg: &Segment) -> String {
    match *seg {
        Segment::Move { end, .. } => format!("M {}", coord(end)),
        Segment::Line { end, .. } => format!("L {}", coord(end)),
        Segment::CubicBezier {
            control1,
            control2,
            end,
            ..
        } => format!(
            "C {}",
            [control1, control2, end].into_iter().map(coord).join(" ")
        ),
        Segment::QuadraticBezier { control, end, .. } => {
            format!("Q {} {}", coord(control), coord(end))
        }
        Segment::Arc {
            radius,
            rotation,
            large_arc,
            sweep,
            end,
            ..
        } => format!(
            "A {} {} {},{} {}",
            coord(radius),
            fstr(rotation),
            large_arc as u32,
            sweep as u32,
            coord(end)
        ),
        Segment::Close { .. } => "Z".to_string(),
    }
}
