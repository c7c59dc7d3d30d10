mod bbox;

pub use bbox::{BoundingBox, BoundingBoxBuilder};

use num_complex::Complex32;

/// A 2D point; `re` is x and `im` is y.
pub type Point = Complex32;

pub fn pt(x: f32, y: f32) -> Point {
    Point::new(x, y)
}
