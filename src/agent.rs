//! Agent records and their tuning parameters.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::patrol::{PatrolDirection, PatrolRange};
use crate::vector_math::Point2D;
use crate::{DEFAULT_CHASE_SPEED, DEFAULT_DETECTION_RADIUS, DEFAULT_PATROL_SPEED};

/// Behaviour an agent is currently exhibiting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentState {
    /// Oscillating along the patrol range.
    #[default]
    #[serde(rename = "patrol")]
    Patrolling,
    /// Pursuing the target in a straight line.
    #[serde(rename = "chase")]
    Chasing,
}

impl AgentState {
    /// Short label suitable for debug text and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Patrolling => "patrol",
            Self::Chasing => "chase",
        }
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tuning field rejected by [`AgentTuning::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{field} must be finite and non-negative, got {value}")]
pub struct TuningError {
    /// Name of the offending field.
    pub field: &'static str,
    /// Rejected value.
    pub value: f64,
}

/// Speeds and detection radius shared by agents of one kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTuning {
    /// Speed along the patrol axis.
    pub patrol_speed: f64,
    /// Speed while pursuing the target.
    pub chase_speed: f64,
    /// Distance below which the agent chases.
    pub detection_radius: f64,
}

impl Default for AgentTuning {
    fn default() -> Self {
        Self {
            patrol_speed: DEFAULT_PATROL_SPEED,
            chase_speed: DEFAULT_CHASE_SPEED,
            detection_radius: DEFAULT_DETECTION_RADIUS,
        }
    }
}

impl AgentTuning {
    /// Checks that every field is finite and non-negative.
    ///
    /// # Errors
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("patrol_speed", self.patrol_speed),
            ("chase_speed", self.chase_speed),
            ("detection_radius", self.detection_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError { field, value });
            }
        }
        Ok(())
    }
}

/// A non-player entity with patrol and chase behaviour.
///
/// Agents are plain values. The controller consumes one and returns the
/// next; nothing else holds a reference to it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Agent {
    /// Current position.
    pub position: Point2D,
    /// Velocity chosen on the last update.
    pub velocity: Point2D,
    /// Bounds of the patrol.
    pub patrol_range: PatrolRange,
    /// Direction of travel along the patrol axis.
    pub patrol_direction: PatrolDirection,
    /// Current behaviour.
    pub state: AgentState,
    /// Speed along the patrol axis.
    pub patrol_speed: f64,
    /// Speed while chasing.
    pub chase_speed: f64,
    /// Distance below which the agent chases.
    pub detection_radius: f64,
    /// Seconds spent in the current state.
    pub state_elapsed: f64,
}

impl Agent {
    /// Creates a patrolling agent heading forward along its range.
    ///
    /// The initial velocity is already the patrol velocity, matching scenes
    /// that set the sprite moving as soon as it is created.
    ///
    /// # Examples
    /// ```
    /// use glam::DVec2;
    /// use prowl::{Agent, AgentState, AgentTuning};
    /// use prowl::patrol::{Axis, PatrolRange};
    /// let range = PatrolRange::new(50.0, 250.0, Axis::X).unwrap();
    /// let agent = Agent::new(DVec2::new(100.0, 100.0), range, AgentTuning::default());
    /// assert_eq!(agent.state, AgentState::Patrolling);
    /// assert_eq!(agent.velocity, DVec2::new(80.0, 0.0));
    /// ```
    #[must_use]
    pub fn new(position: Point2D, patrol_range: PatrolRange, tuning: AgentTuning) -> Self {
        let direction = PatrolDirection::Forward;
        Self {
            position,
            velocity: patrol_range
                .axis()
                .along(tuning.patrol_speed * direction.sign()),
            patrol_range,
            patrol_direction: direction,
            state: AgentState::Patrolling,
            patrol_speed: tuning.patrol_speed,
            chase_speed: tuning.chase_speed,
            detection_radius: tuning.detection_radius,
            state_elapsed: 0.0,
        }
    }

    /// Returns the agent with a different starting direction.
    #[must_use]
    pub fn with_direction(mut self, direction: PatrolDirection) -> Self {
        self.patrol_direction = direction;
        if self.state == AgentState::Patrolling {
            self.velocity = self.patrol_velocity();
        }
        self
    }

    /// Velocity the agent would patrol with in its current direction.
    #[must_use]
    pub fn patrol_velocity(&self) -> Point2D {
        self.patrol_range
            .axis()
            .along(self.patrol_speed * self.patrol_direction.sign())
    }

    /// Speeds and radius of this agent.
    #[must_use]
    pub const fn tuning(&self) -> AgentTuning {
        AgentTuning {
            patrol_speed: self.patrol_speed,
            chase_speed: self.chase_speed,
            detection_radius: self.detection_radius,
        }
    }

    /// Advances the position by the current velocity over `dt` seconds.
    ///
    /// The controller never moves an agent; this stands in for the host's
    /// physics step when running headless.
    #[must_use]
    pub fn integrated(mut self, dt: f64) -> Self {
        self.position += self.velocity * dt;
        self
    }
}
