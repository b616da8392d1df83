//! Point attractors pulling bodies with inverse-distance strength.
//!
//! Distances are floored before dividing so a body sitting on a well gets a
//! bounded pull instead of an infinite one.

use serde::{Deserialize, Serialize};

use crate::vector_math::{floored_distance, normalize_or_zero, Point2D};
use crate::MIN_DISTANCE;

/// A point that attracts nearby bodies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GravityWell {
    /// Centre of the well.
    pub position: Point2D,
    /// Pull at unit distance.
    pub strength: f64,
    /// Smallest distance used in the falloff.
    #[serde(default = "default_min_distance")]
    pub min_distance: f64,
}

const fn default_min_distance() -> f64 {
    MIN_DISTANCE
}

impl GravityWell {
    /// Creates a well with the default distance floor.
    #[must_use]
    pub const fn new(position: Point2D, strength: f64) -> Self {
        Self {
            position,
            strength,
            min_distance: MIN_DISTANCE,
        }
    }

    /// Replaces the distance floor. Non-positive values fall back to
    /// [`MIN_DISTANCE`].
    #[must_use]
    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = if min_distance > 0.0 {
            min_distance
        } else {
            MIN_DISTANCE
        };
        self
    }
}

/// Acceleration `body` experiences towards `well`.
///
/// The magnitude is `strength / max(distance, min_distance)`. A body exactly
/// on the well has no defined direction and receives no pull.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use prowl::gravity::{attraction, GravityWell};
/// let well = GravityWell::new(DVec2::new(10.0, 0.0), 100.0);
/// let a = attraction(DVec2::ZERO, &well);
/// assert!((a.x - 10.0).abs() < 1e-12);
/// assert_eq!(a.y, 0.0);
/// ```
#[must_use]
pub fn attraction(body: Point2D, well: &GravityWell) -> Point2D {
    let floor = if well.min_distance > 0.0 {
        well.min_distance
    } else {
        MIN_DISTANCE
    };
    let d = floored_distance(body, well.position, floor);
    normalize_or_zero(well.position - body) * (well.strength / d)
}

/// Sum of the attraction of every well.
#[must_use]
pub fn net_attraction(body: Point2D, wells: &[GravityWell]) -> Point2D {
    wells
        .iter()
        .map(|well| attraction(body, well))
        .fold(Point2D::ZERO, |acc, a| acc + a)
}
