use tracing::warn;

use super::{CompoundPath, Segment};
use crate::geometry::BoundingBox;

/// One closed sub-path: a run of segments ending in a single `Close`.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    segments: Vec<Segment>,
}

impl Contour {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The bounding box of this contour alone. A contour always holds at
    /// least its `Close` segment.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::union(self.segments.iter().map(Segment::bbox))
            .unwrap_or_else(|| BoundingBox::new(0., 0., 0., 0.))
    }
}

/// Split `path` strictly on `Close` markers.
///
/// Each Close-terminated run (including the Close itself) becomes one
/// `Contour`. Segments after the final Close do not form a contour and
/// are dropped.
pub fn split_contours(path: &CompoundPath) -> Vec<Contour> {
    let mut contours = Vec::new();
    let mut current = Vec::new();
    for seg in path.segments() {
        current.push(*seg);
        if seg.is_close() {
            contours.push(Contour {
                segments: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        warn!(
            count = current.len(),
            "dropping unclosed segments after the final sub-shape"
        );
    }
    contours
}

/// Concatenate every contour other than `removed` into a new path,
/// preserving the original order.
pub fn reassemble(contours: &[Contour], removed: Option<usize>) -> CompoundPath {
    contours
        .iter()
        .enumerate()
        .filter(|(idx, _)| Some(*idx) != removed)
        .flat_map(|(_, contour)| contour.segments.iter().copied())
        .collect()
}
