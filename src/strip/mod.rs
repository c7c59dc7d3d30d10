mod ring;
mod scale;
mod select;

use tracing::debug;

use crate::errors::{Error, Result};
use crate::geometry::{BoundingBox, Point};
use crate::path::{reassemble, split_contours, CompoundPath};

pub use ring::add_ring;
pub use scale::{fit_scaling, scale_to_box, QuadraticControl, ScaleAnchor, Scaling};
pub use select::{select_outer, ScoreMode};

/// Canvas size of the icon sets this tool is normally run on
pub const DEFAULT_CANVAS: f32 = 48.;

/// Which metric identifies the outer shape.
///
/// This is the configuration-level choice; `RadialMean` is resolved to a
/// `ScoreMode` once the document's center is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ScoreKind {
    /// Remove the sub-shape furthest (on average) from the viewBox center
    #[default]
    #[cfg_attr(feature = "cli", value(name = "radial"))]
    RadialMean,
    /// Remove the sub-shape with the largest bounding box
    Area,
}

impl ScoreKind {
    pub fn resolve(&self, center: Option<Point>) -> Result<ScoreMode> {
        match self {
            ScoreKind::RadialMean => center
                .map(|center| ScoreMode::RadialMean { center })
                .ok_or_else(|| {
                    Error::MalformedInput("radial-mean scoring requires a viewBox".to_string())
                }),
            ScoreKind::Area => Ok(ScoreMode::Area),
        }
    }
}

/// Settings for a single strip operation.
#[derive(Clone, Debug, PartialEq)]
pub struct StripConfig {
    /// Metric used to pick the outer shape
    pub score: ScoreKind,
    /// Box the remaining artwork is fitted to
    pub target: BoundingBox,
    /// How the artwork is scaled into `target`
    pub anchor: ScaleAnchor,
    /// Append a ring around this box (mask inversion)
    pub ring: Option<BoundingBox>,
    /// Accept an empty result (single-shape input) rather than failing
    pub allow_empty: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self::radial()
    }
}

impl StripConfig {
    /// Radial-mean selection, uniform scale from the origin to the canvas.
    pub fn radial() -> Self {
        Self {
            score: ScoreKind::RadialMean,
            target: BoundingBox::square(DEFAULT_CANVAS),
            anchor: ScaleAnchor::Origin,
            ring: None,
            allow_empty: false,
        }
    }

    /// Area selection, center-anchored fit into an inner box, and a ring
    /// spanning the full canvas.
    pub fn area_ring() -> Self {
        let canvas = BoundingBox::square(DEFAULT_CANVAS);
        Self {
            score: ScoreKind::Area,
            target: canvas.inset(8.),
            anchor: ScaleAnchor::Center {
                quadratic_control: QuadraticControl::default(),
            },
            ring: Some(canvas),
            allow_empty: false,
        }
    }
}

/// Outcome of stripping a path
#[derive(Clone, Debug, PartialEq)]
pub struct Stripped {
    pub path: CompoundPath,
    /// Number of closed sub-shapes found in the input
    pub contours: usize,
    /// Index of the removed (outer) sub-shape
    pub removed: usize,
}

/// Remove the outer shape from `path`, then fit the remainder to the
/// configured target box (and optionally add a ring).
///
/// `center` is the reference point for radial-mean scoring; it may be
/// `None` when scoring by area.
pub fn strip_path(
    path: &CompoundPath,
    center: Option<Point>,
    config: &StripConfig,
) -> Result<Stripped> {
    let mode = config.score.resolve(center)?;
    let contours = split_contours(path);
    debug!(count = contours.len(), "split path into sub-shapes");

    let removed = select_outer(&contours, &mode)
        .ok_or_else(|| Error::MalformedInput("path has no closed sub-shapes".to_string()))?;
    debug!(
        index = removed,
        score = mode.score(&contours[removed]),
        "selected outer shape"
    );

    let remaining = reassemble(&contours, Some(removed));
    if remaining.is_empty() && !config.allow_empty {
        return Err(Error::EmptyResult);
    }

    let mut result = scale_to_box(&remaining, &config.target, config.anchor);
    if let Some(outer) = &config.ring {
        result = add_ring(&result, outer);
    }

    Ok(Stripped {
        path: result,
        contours: contours.len(),
        removed,
    })
}
