use super::{pt, Point};

/// `BoundingBox` defines an axis-aligned rectangular region in user coordinates.
///
/// Note the field order is `(min_x, max_x, min_y, max_y)`, and the
/// constructor takes its arguments in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

#[derive(Debug, Clone, Default)]
pub struct BoundingBoxBuilder {
    bbox: Option<BoundingBox>,
}

impl BoundingBoxBuilder {
    pub fn new() -> Self {
        Self { bbox: None }
    }

    pub fn extend(&mut self, bbox: BoundingBox) -> &Self {
        if let Some(ref mut b) = self.bbox {
            *b = b.combine(&bbox);
        } else {
            self.bbox = Some(bbox);
        }
        self
    }

    pub fn add_point(&mut self, p: Point) -> &Self {
        self.extend(BoundingBox::from_point(p))
    }

    pub fn build(self) -> Option<BoundingBox> {
        self.bbox
    }
}

impl BoundingBox {
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// A square box of side `size` with its top-left corner at the origin
    pub fn square(size: f32) -> Self {
        Self::new(0., size, 0., size)
    }

    /// Degenerate box containing a single point
    pub fn from_point(p: Point) -> Self {
        Self::new(p.re, p.re, p.im, p.im)
    }

    pub fn union(bb_iter: impl IntoIterator<Item = Self>) -> Option<Self> {
        bb_iter.into_iter().reduce(|bb1, bb2| bb1.combine(&bb2))
    }

    pub fn combine(&self, other: &Self) -> Self {
        Self::new(
            self.min_x.min(other.min_x),
            self.max_x.max(other.max_x),
            self.min_y.min(other.min_y),
            self.max_y.max(other.max_y),
        )
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Midpoint of the min and max corners, as a single complex point
    pub fn center(&self) -> Point {
        pt(
            (self.min_x + self.max_x) / 2.,
            (self.min_y + self.max_y) / 2.,
        )
    }

    /// Shrink the box by the given absolute amount on each side
    pub fn inset(&self, amount: f32) -> Self {
        Self::new(
            self.min_x + amount,
            self.max_x - amount,
            self.min_y + amount,
            self.max_y - amount,
        )
    }

    /// True if `other` lies within this box, allowing `tolerance` slack
    /// on each edge.
    pub fn contains(&self, other: &Self, tolerance: f32) -> bool {
        other.min_x >= self.min_x - tolerance
            && other.max_x <= self.max_x + tolerance
            && other.min_y >= self.min_y - tolerance
            && other.max_y <= self.max_y + tolerance
    }
}
