//! Per-tick patrol/chase decision making.
//!
//! [`update`] is a pure transform from the previous agent to the next one.
//! The state is reconsidered from scratch every tick: the agent chases while
//! the target is strictly inside its detection radius and patrols otherwise.
//! The controller chooses a velocity; it never moves the agent.

use log::{debug, trace};
use serde::Serialize;

use crate::agent::{Agent, AgentState};
use crate::patrol::{self, PatrolDirection};
use crate::vector_math::{angle_to, distance, unit_vector_from_angle, Point2D};

/// What happened to one agent during one tick.
///
/// Callers collect these explicitly, for example into a
/// [`SignalLog`](crate::signals::SignalLog), instead of writing to shared
/// state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Observation {
    /// State after the update.
    pub state: AgentState,
    /// State before the update.
    pub previous_state: AgentState,
    /// Distance from agent to target used for the decision.
    pub distance_to_target: f64,
    /// Velocity chosen for the next physics step.
    pub velocity: Point2D,
    /// Patrol direction after the update.
    pub patrol_direction: PatrolDirection,
    /// Whether the patrol direction reversed at a boundary this tick.
    pub direction_flipped: bool,
    /// Seconds spent in the current state.
    pub state_elapsed: f64,
}

impl Observation {
    /// Whether the agent switched between patrolling and chasing.
    #[must_use]
    pub fn transitioned(&self) -> bool {
        self.state != self.previous_state
    }
}

/// Result of one controller tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentUpdate {
    /// The agent for the next tick.
    pub agent: Agent,
    /// Summary of the decision taken.
    pub observation: Observation,
}

/// Chooses the state for a given target distance.
///
/// The comparison is strict: a target exactly on the radius is not chased.
#[must_use]
pub fn decide_state(distance_to_target: f64, detection_radius: f64) -> AgentState {
    if distance_to_target < detection_radius {
        AgentState::Chasing
    } else {
        AgentState::Patrolling
    }
}

/// Straight-line pursuit velocity of magnitude `speed` from `from` to `to`.
///
/// When both points coincide the bearing is `0.0`, so the velocity points
/// along the positive x axis.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use prowl::controller::chase_velocity;
/// let v = chase_velocity(DVec2::ZERO, DVec2::new(0.0, 10.0), 160.0);
/// assert!(v.x.abs() < 1e-9);
/// assert!((v.y - 160.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn chase_velocity(from: Point2D, to: Point2D, speed: f64) -> Point2D {
    unit_vector_from_angle(angle_to(from, to)) * speed
}

/// Advances `agent` by one tick against the target position.
///
/// Patrolling agents first apply the boundary rule and then take the patrol
/// velocity for the resulting direction, so a direction reversal and the
/// matching velocity land on the same tick. Chasing agents keep their patrol
/// direction for when they give up.
///
/// # Examples
/// ```
/// use glam::DVec2;
/// use prowl::controller::update;
/// use prowl::patrol::{Axis, PatrolRange};
/// use prowl::{Agent, AgentState, AgentTuning};
///
/// let range = PatrolRange::new(50.0, 250.0, Axis::X).unwrap();
/// let agent = Agent::new(DVec2::new(100.0, 100.0), range, AgentTuning::default());
///
/// let far = update(&agent, DVec2::new(400.0, 400.0), 1.0 / 60.0);
/// assert_eq!(far.agent.state, AgentState::Patrolling);
/// assert_eq!(far.agent.velocity, DVec2::new(80.0, 0.0));
///
/// let near = update(&far.agent, DVec2::new(120.0, 120.0), 1.0 / 60.0);
/// assert_eq!(near.agent.state, AgentState::Chasing);
/// assert!((near.agent.velocity.length() - 160.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn update(agent: &Agent, target: Point2D, dt: f64) -> AgentUpdate {
    let distance_to_target = distance(agent.position, target);
    let state = decide_state(distance_to_target, agent.detection_radius);

    let mut next = *agent;
    next.state = state;

    match state {
        AgentState::Chasing => {
            next.velocity = chase_velocity(agent.position, target, agent.chase_speed);
        }
        AgentState::Patrolling => {
            let along = agent.patrol_range.axis().component(agent.position);
            next.patrol_direction = patrol::step(along, agent.patrol_direction, &agent.patrol_range);
            next.velocity = next.patrol_velocity();
        }
    }

    let direction_flipped = next.patrol_direction != agent.patrol_direction;
    if state == agent.state {
        next.state_elapsed = agent.state_elapsed + dt;
    } else {
        next.state_elapsed = 0.0;
        debug!(
            "agent at {:?} switched {} -> {} (distance {distance_to_target:.2}, radius {:.2})",
            agent.position, agent.state, state, agent.detection_radius
        );
    }
    if direction_flipped {
        trace!(
            "agent at {:?} reversed patrol to {:?}",
            agent.position,
            next.patrol_direction
        );
    }

    AgentUpdate {
        agent: next,
        observation: Observation {
            state,
            previous_state: agent.state,
            distance_to_target,
            velocity: next.velocity,
            patrol_direction: next.patrol_direction,
            direction_flipped,
            state_elapsed: next.state_elapsed,
        },
    }
}
