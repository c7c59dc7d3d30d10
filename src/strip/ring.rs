use tracing::warn;

use crate::geometry::{pt, BoundingBox};
use crate::path::{CompoundPath, Segment};

/// Append a circle centred on `outer`, with a diameter equal to the smaller
/// side of `outer`, as a new closed contour.
///
/// Combined with the (already fitted) artwork this yields a ring
/// silhouette, inverting the icon mask.
pub fn add_ring(path: &CompoundPath, outer: &BoundingBox) -> CompoundPath {
    let radius = outer.width().min(outer.height()) / 2.;
    let mut result = path.clone();
    if radius <= 0. {
        warn!(?outer, "ring box is degenerate; no ring added");
        return result;
    }

    let center = outer.center();
    let left = center - radius;
    let right = center + radius;
    let arc = |start, end| Segment::Arc {
        start,
        radius: pt(radius, radius),
        rotation: 0.,
        large_arc: false,
        sweep: true,
        end,
    };

    result.push(Segment::Move {
        start: left,
        end: left,
    });
    result.push(arc(left, right));
    result.push(arc(right, left));
    result.push(Segment::Close {
        start: left,
        end: left,
    });
    result
}
