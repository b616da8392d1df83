//! Agents and ranges used across the integration tests.

use glam::DVec2;
use prowl::{Agent, AgentTuning, Axis, PatrolDirection, PatrolRange};

/// The `50..=250` horizontal range used by the reference scenario.
///
/// # Panics
/// Never; the bounds are constant and valid.
#[must_use]
pub fn scenario_range() -> PatrolRange {
    PatrolRange::new(50.0, 250.0, Axis::X).unwrap_or_else(|e| panic!("fixture range: {e}"))
}

/// Agent at `(x, y)` on the reference range with default tuning.
///
/// # Examples
/// ```
/// use test_utils::fixtures::scenario_agent;
/// let agent = scenario_agent(100.0, 100.0);
/// assert_eq!(agent.chase_speed, 160.0);
/// ```
#[must_use]
pub fn scenario_agent(x: f64, y: f64) -> Agent {
    Agent::new(DVec2::new(x, y), scenario_range(), AgentTuning::default())
}

/// Agent on the reference range heading in `direction`.
#[must_use]
pub fn heading_agent(x: f64, direction: PatrolDirection) -> Agent {
    scenario_agent(x, 100.0).with_direction(direction)
}

/// Agent patrolling vertically between `min` and `max` at column `x`.
///
/// # Panics
/// Panics if `min > max`.
#[must_use]
pub fn vertical_agent(x: f64, y: f64, min: f64, max: f64) -> Agent {
    let range =
        PatrolRange::new(min, max, Axis::Y).unwrap_or_else(|e| panic!("fixture range: {e}"));
    Agent::new(DVec2::new(x, y), range, AgentTuning::default())
}
