//! Basic vector math helper functions.
//! Small helpers for distances, bearings and unit vectors on the 2D plane.
use glam::DVec2;

/// A position or velocity on the 2D plane.
pub type Point2D = DVec2;

/// Returns the Euclidean distance between two points.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use prowl::vector_math::distance;
/// let d = distance(DVec2::new(0.0, 0.0), DVec2::new(3.0, 4.0));
/// assert!((d - 5.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the distance between two points, never smaller than `min`.
///
/// Use this before dividing by a distance so coincident points do not
/// produce infinities.
#[must_use]
pub fn floored_distance(a: Point2D, b: Point2D, min: f64) -> f64 {
    distance(a, b).max(min)
}

/// Returns the bearing in radians of the vector from `a` to `b`.
///
/// Identical points yield `0.0`.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use prowl::vector_math::angle_to;
/// let theta = angle_to(DVec2::ZERO, DVec2::new(0.0, 2.0));
/// assert!((theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[must_use]
pub fn angle_to(a: Point2D, b: Point2D) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Returns the unit vector pointing along `theta`.
#[must_use]
pub fn unit_vector_from_angle(theta: f64) -> Point2D {
    DVec2::new(theta.cos(), theta.sin())
}

/// Returns the unit vector in the direction of `vector`.
///
/// Zero and non-finite inputs yield [`DVec2::ZERO`].
///
/// # Examples
///
/// ```
/// use glam::DVec2;
/// use prowl::vector_math::normalize_or_zero;
/// let n = normalize_or_zero(DVec2::new(3.0, 4.0));
/// assert!((n.x - 0.6).abs() < 1e-12);
/// assert!((n.y - 0.8).abs() < 1e-12);
///
/// assert_eq!(normalize_or_zero(DVec2::ZERO), DVec2::ZERO);
/// ```
#[must_use]
pub fn normalize_or_zero(vector: Point2D) -> Point2D {
    if !vector.is_finite() {
        return DVec2::ZERO;
    }
    vector.try_normalize().unwrap_or(DVec2::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[rstest]
    #[case::east(DVec2::new(1.0, 0.0), 0.0)]
    #[case::north(DVec2::new(0.0, 1.0), FRAC_PI_2)]
    #[case::diagonal(DVec2::new(1.0, 1.0), FRAC_PI_4)]
    #[case::west(DVec2::new(-1.0, 0.0), PI)]
    #[case::south(DVec2::new(0.0, -1.0), -FRAC_PI_2)]
    fn bearing_matches_compass(#[case] to: DVec2, #[case] expected: f64) {
        assert_relative_eq!(angle_to(DVec2::ZERO, to), expected);
    }

    #[test]
    fn bearing_of_identical_points_is_zero() {
        let p = DVec2::new(12.0, -7.0);
        assert_eq!(angle_to(p, p), 0.0);
    }

    #[test]
    fn floor_applies_only_below_minimum() {
        let a = DVec2::ZERO;
        assert_relative_eq!(floored_distance(a, a, 1.0), 1.0);
        assert_relative_eq!(floored_distance(a, DVec2::new(0.5, 0.0), 1.0), 1.0);
        assert_relative_eq!(floored_distance(a, DVec2::new(6.0, 8.0), 1.0), 10.0);
    }

    #[test]
    fn normalize_rejects_nan() {
        assert_eq!(normalize_or_zero(DVec2::new(f64::NAN, 1.0)), DVec2::ZERO);
    }
}
