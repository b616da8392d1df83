//! Headless frame driver owning a level's agents and target.
//!
//! Each tick first advances every agent by the velocity chosen on the
//! previous tick, the way an arcade physics step runs before the scene
//! callback, and then runs the controller for each agent in spawn order.

use log::{debug, info};
use serde::Serialize;

use crate::agent::Agent;
use crate::config::{ConfigError, LevelConfig};
use crate::controller::{self, Observation};
use crate::patrol::PatrolRange;
use crate::rng::SeededLcg;
use crate::signals::{SignalKind, SignalLog};
use crate::spawn::{scatter, KeepOut};
use crate::vector_math::{distance, Point2D};
use crate::SPAWN_MAX_ATTEMPTS;

/// Identifier of an agent within a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AgentId(pub u64);

/// Observations produced by one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// Tick number, starting at one.
    pub tick: u64,
    /// Simulated seconds since the level began, including this tick.
    pub elapsed: f64,
    /// One observation per live agent, in spawn order.
    pub observations: Vec<(AgentId, Observation)>,
}

/// A set of agents chasing a single target.
#[derive(Clone, Debug, Default)]
pub struct Level {
    agents: Vec<(AgentId, Agent)>,
    target: Point2D,
    next_id: u64,
    tick: u64,
    elapsed: f64,
}

impl Level {
    /// Creates an empty level with the target at `target`.
    #[must_use]
    pub fn new(target: Point2D) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Builds a level from a validated configuration.
    ///
    /// Spawn positions come from the seeded generator and stay at least
    /// `safe_radius` away from the target's start. Every agent patrols
    /// `patrol_half_width` either side of its spawn point.
    ///
    /// # Errors
    /// Returns the validation error when `config` is inconsistent.
    pub fn from_config(config: &LevelConfig) -> Result<(Self, SignalLog), ConfigError> {
        config.validate()?;
        let mut rng = SeededLcg::new(config.seed);
        let points = scatter(
            &mut rng,
            config.agent_count,
            &config.area,
            config.min_spacing,
            Some(KeepOut {
                centre: config.target.start,
                radius: config.safe_radius,
            }),
            SPAWN_MAX_ATTEMPTS,
        );

        let mut level = Self::new(config.target.start);
        for point in points {
            let centre = config.axis.component(point);
            let range = PatrolRange::around(centre, config.patrol_half_width, config.axis)?;
            level.spawn(Agent::new(point, range, config.tuning));
        }

        let mut signals = SignalLog::new();
        signals.push(
            0,
            0.0,
            SignalKind::LevelStarted {
                agents: level.len(),
                seed: config.seed,
            },
        );
        info!(
            "level started with {} agents (seed {})",
            level.len(),
            config.seed
        );
        Ok((level, signals))
    }

    /// Adds an agent and returns its identifier.
    pub fn spawn(&mut self, agent: Agent) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        debug!("spawned agent {} at {:?}", id.0, agent.position);
        self.agents.push((id, agent));
        id
    }

    /// Removes an agent, for example once it is defeated.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        let index = self.agents.iter().position(|(other, _)| *other == id)?;
        let (_, agent) = self.agents.remove(index);
        debug!("removed agent {}", id.0);
        Some(agent)
    }

    /// Removes every agent strictly closer than `radius` to the target and
    /// returns their identifiers in spawn order.
    ///
    /// This is how the target defeats agents it touches.
    pub fn remove_within(&mut self, radius: f64) -> Vec<AgentId> {
        let target = self.target;
        let mut removed = Vec::new();
        self.agents.retain(|(id, agent)| {
            let touching = distance(agent.position, target) < radius;
            if touching {
                removed.push(*id);
            }
            !touching
        });
        if !removed.is_empty() {
            debug!("target touched agents {removed:?}");
        }
        removed
    }

    /// Looks up an agent.
    #[must_use]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents
            .iter()
            .find(|(other, _)| *other == id)
            .map(|(_, agent)| agent)
    }

    /// Live agents in spawn order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &Agent)> {
        self.agents.iter().map(|(id, agent)| (*id, agent))
    }

    /// Number of live agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether every agent has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Current target position.
    #[must_use]
    pub const fn target(&self) -> Point2D {
        self.target
    }

    /// Moves the target.
    pub fn set_target(&mut self, target: Point2D) {
        self.target = target;
    }

    /// Ticks run so far.
    #[must_use]
    pub const fn ticks(&self) -> u64 {
        self.tick
    }

    /// Simulated seconds run so far.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advances every agent by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> TickReport {
        self.tick += 1;
        self.elapsed += dt;
        let target = self.target;
        let observations = self
            .agents
            .iter_mut()
            .map(|(id, agent)| {
                let moved = agent.integrated(dt);
                let next = controller::update(&moved, target, dt);
                *agent = next.agent;
                (*id, next.observation)
            })
            .collect();
        TickReport {
            tick: self.tick,
            elapsed: self.elapsed,
            observations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentState, AgentTuning};
    use crate::patrol::{Axis, PatrolDirection};
    use glam::DVec2;

    fn patroller(x: f64) -> Agent {
        let range = PatrolRange::new(50.0, 250.0, Axis::X).expect("valid range");
        Agent::new(DVec2::new(x, 100.0), range, AgentTuning::default())
    }

    #[test]
    fn ids_are_unique_after_removal() {
        let mut level = Level::new(DVec2::ZERO);
        let a = level.spawn(patroller(100.0));
        let b = level.spawn(patroller(120.0));
        assert!(level.remove(a).is_some());
        assert!(level.remove(a).is_none());
        let c = level.spawn(patroller(140.0));
        assert_ne!(b, c);
        assert_eq!(level.len(), 2);
        assert!(level.agent(a).is_none());
    }

    #[test]
    fn remove_within_takes_only_touching_agents() {
        let mut level = Level::new(DVec2::new(100.0, 100.0));
        let touching = level.spawn(patroller(110.0));
        let edge = level.spawn(patroller(132.0));
        let far = level.spawn(patroller(200.0));
        assert_eq!(level.remove_within(32.0), vec![touching]);
        assert!(level.agent(edge).is_some());
        assert!(level.agent(far).is_some());
        assert!(level.remove_within(0.0).is_empty());
    }

    #[test]
    fn configured_spawns_avoid_target_start() {
        let config = LevelConfig::default();
        let (level, _) = Level::from_config(&config).expect("default config builds");
        assert!(!level.is_empty());
        for (id, agent) in level.agents() {
            let d = distance(agent.position, config.target.start);
            assert!(d >= config.safe_radius, "agent {id:?} spawned {d:.1} from target");
        }
    }

    #[test]
    fn tick_integrates_before_deciding() {
        let mut level = Level::new(DVec2::new(1000.0, 1000.0));
        let id = level.spawn(patroller(245.0));
        // 245 + 80 * 0.1 = 253 >= 250, so the reversal lands on this tick.
        let report = level.tick(0.1);
        let agent = level.agent(id).expect("agent alive");
        assert!((agent.position.x - 253.0).abs() < 1e-9);
        assert_eq!(agent.patrol_direction, PatrolDirection::Backward);
        assert_eq!(agent.velocity, DVec2::new(-80.0, 0.0));
        assert_eq!(report.tick, 1);
        assert!(report.observations.iter().all(|(_, o)| o.direction_flipped));
    }

    #[test]
    fn patrol_oscillates_between_bounds() {
        let mut level = Level::new(DVec2::new(5000.0, 5000.0));
        let id = level.spawn(patroller(150.0));
        let mut flips = 0;
        for _ in 0..600 {
            let report = level.tick(1.0 / 60.0);
            flips += report
                .observations
                .iter()
                .filter(|(_, o)| o.direction_flipped)
                .count();
            let x = level.agent(id).expect("agent alive").position.x;
            assert!((48.0..=252.0).contains(&x), "agent escaped range at {x}");
        }
        // 600 ticks at 80 px/s covers 800 px over a 200 px range.
        assert!(flips >= 3, "expected several reversals, got {flips}");
    }

    #[test]
    fn state_follows_target_distance() {
        let mut level = Level::new(DVec2::new(110.0, 100.0));
        let near = level.spawn(patroller(100.0));
        let far = level.spawn(patroller(240.0));
        level.tick(0.0);
        assert_eq!(
            level.agent(near).map(|a| a.state),
            Some(AgentState::Chasing)
        );
        assert_eq!(
            level.agent(far).map(|a| a.state),
            Some(AgentState::Chasing)
        );
        level.set_target(DVec2::new(100.0, 400.0));
        level.tick(0.0);
        assert_eq!(
            level.agent(far).map(|a| a.state),
            Some(AgentState::Patrolling)
        );
    }
}
