//! Patrol ranges and the boundary reflection rule.
//!
//! An agent that is not alerted oscillates along one axis between two
//! inclusive bounds. The rule only reacts to the boundary inequality; it
//! never clamps the position back into the range.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::vector_math::Point2D;

/// Axis a patrol range is laid along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal patrol.
    #[default]
    X,
    /// Vertical patrol.
    Y,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    #[must_use]
    pub const fn component(self, point: Point2D) -> f64 {
        match self {
            Self::X => point.x,
            Self::Y => point.y,
        }
    }

    /// Builds a vector of the given signed magnitude along this axis.
    ///
    /// The perpendicular component is always exactly zero.
    #[must_use]
    pub const fn along(self, magnitude: f64) -> Point2D {
        match self {
            Self::X => DVec2::new(magnitude, 0.0),
            Self::Y => DVec2::new(0.0, magnitude),
        }
    }
}

/// Direction of travel along a patrol axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatrolDirection {
    /// Towards `max` (`+1`).
    #[default]
    Forward,
    /// Towards `min` (`-1`).
    Backward,
}

impl PatrolDirection {
    /// Returns `+1.0` or `-1.0`.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
        }
    }
}

/// Reasons a [`PatrolRange`] cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PatrolRangeError {
    /// A bound was NaN or infinite.
    #[error("patrol bounds must be finite (min {min}, max {max})")]
    NonFinite {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// The lower bound exceeds the upper bound.
    #[error("patrol min {min} exceeds max {max}")]
    Inverted {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

#[derive(Deserialize)]
struct RawPatrolRange {
    min: f64,
    max: f64,
    #[serde(default)]
    axis: Axis,
}

impl TryFrom<RawPatrolRange> for PatrolRange {
    type Error = PatrolRangeError;

    fn try_from(raw: RawPatrolRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max, raw.axis)
    }
}

/// Inclusive bounds an agent oscillates between along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPatrolRange")]
pub struct PatrolRange {
    min: f64,
    max: f64,
    axis: Axis,
}

impl PatrolRange {
    /// Creates a range, rejecting inverted or non-finite bounds.
    ///
    /// # Errors
    /// Returns [`PatrolRangeError`] when `min > max` or either bound is not
    /// finite.
    ///
    /// # Examples
    /// ```
    /// use prowl::patrol::{Axis, PatrolRange};
    /// let range = PatrolRange::new(50.0, 250.0, Axis::X).unwrap();
    /// assert_eq!(range.span(), 200.0);
    /// assert!(PatrolRange::new(3.0, 1.0, Axis::Y).is_err());
    /// ```
    pub fn new(min: f64, max: f64, axis: Axis) -> Result<Self, PatrolRangeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(PatrolRangeError::NonFinite { min, max });
        }
        if min > max {
            return Err(PatrolRangeError::Inverted { min, max });
        }
        Ok(Self { min, max, axis })
    }

    /// Creates the range `centre ± half_width` along `axis`.
    ///
    /// # Errors
    /// Fails when `half_width` is negative or the bounds are not finite.
    pub fn around(centre: f64, half_width: f64, axis: Axis) -> Result<Self, PatrolRangeError> {
        Self::new(centre - half_width, centre + half_width, axis)
    }

    /// Lower bound.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Patrolled axis.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Length of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `position` lies within the inclusive bounds.
    #[must_use]
    pub fn contains(&self, position: f64) -> bool {
        (self.min..=self.max).contains(&position)
    }
}

/// Decides the patrol direction for this tick.
///
/// Reverses only when the agent sits on or beyond the bound it is heading
/// towards; in every other case the direction is returned unchanged.
///
/// # Examples
/// ```
/// use prowl::patrol::{step, Axis, PatrolDirection, PatrolRange};
/// let range = PatrolRange::new(50.0, 250.0, Axis::X).unwrap();
/// assert_eq!(step(250.0, PatrolDirection::Forward, &range), PatrolDirection::Backward);
/// assert_eq!(step(250.0, PatrolDirection::Backward, &range), PatrolDirection::Backward);
/// assert_eq!(step(120.0, PatrolDirection::Forward, &range), PatrolDirection::Forward);
/// ```
#[must_use]
pub fn step(position: f64, direction: PatrolDirection, range: &PatrolRange) -> PatrolDirection {
    match direction {
        PatrolDirection::Backward if position <= range.min => PatrolDirection::Forward,
        PatrolDirection::Forward if position >= range.max => PatrolDirection::Backward,
        unchanged => unchanged,
    }
}
