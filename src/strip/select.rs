use crate::geometry::Point;
use crate::path::Contour;

/// How each contour is scored when looking for the outer shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreMode {
    /// Mean distance of each segment's start point from `center`
    RadialMean { center: Point },
    /// Area of the contour's own bounding box
    Area,
}

impl ScoreMode {
    pub fn score(&self, contour: &Contour) -> f32 {
        match *self {
            ScoreMode::RadialMean { center } => {
                let segments = contour.segments();
                if segments.is_empty() {
                    return 0.;
                }
                let total: f32 = segments.iter().map(|s| (s.start() - center).norm()).sum();
                total / segments.len() as f32
            }
            ScoreMode::Area => contour.bbox().area(),
        }
    }
}

/// Index of the highest-scoring contour, or `None` if there are none.
///
/// Ties keep the first contour encountered.
pub fn select_outer(contours: &[Contour], mode: &ScoreMode) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, contour) in contours.iter().enumerate() {
        let score = mode.score(contour);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}
