//! Structured verification signals collected by the caller.
//!
//! A [`SignalLog`] is an ordinary value owned by whoever drives the agents.
//! Feed it observations after each tick and serialise it for a test harness
//! or a debug overlay.

use serde::Serialize;

use crate::agent::AgentState;
use crate::controller::Observation;
use crate::level::{AgentId, TickReport};
use crate::patrol::PatrolDirection;
use crate::vector_math::Point2D;

/// Something worth reporting about the agents.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SignalKind {
    /// A level began with the given number of agents.
    LevelStarted {
        /// Agents spawned.
        agents: usize,
        /// Seed used for placement.
        seed: u64,
    },
    /// An agent switched between patrolling and chasing.
    StateChanged {
        /// Agent concerned.
        agent: AgentId,
        /// Previous state.
        from: AgentState,
        /// New state.
        to: AgentState,
        /// Distance to the target at the switch.
        distance: f64,
    },
    /// An agent reversed at a patrol boundary.
    DirectionFlipped {
        /// Agent concerned.
        agent: AgentId,
        /// New direction.
        direction: PatrolDirection,
        /// Velocity taken after the reversal.
        velocity: Point2D,
    },
    /// An agent was removed from the level.
    AgentRemoved {
        /// Agent concerned.
        agent: AgentId,
    },
    /// Every agent of a level was removed.
    LevelCleared {
        /// Wave number of the cleared level, starting at one.
        level: u32,
    },
}

/// One timestamped signal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Signal {
    /// Tick counter when the signal was raised.
    pub tick: u64,
    /// Simulated seconds since the level began.
    pub elapsed: f64,
    /// Payload.
    #[serde(flatten)]
    pub kind: SignalKind,
}

/// Ordered collection of signals.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SignalLog {
    entries: Vec<Signal>,
}

impl SignalLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a signal.
    pub fn push(&mut self, tick: u64, elapsed: f64, kind: SignalKind) {
        log::debug!("signal at tick {tick}: {kind:?}");
        self.entries.push(Signal {
            tick,
            elapsed,
            kind,
        });
    }

    /// Derives signals from one agent's observation.
    ///
    /// Quiet ticks add nothing.
    pub fn record(&mut self, tick: u64, elapsed: f64, agent: AgentId, observation: &Observation) {
        if observation.transitioned() {
            self.push(
                tick,
                elapsed,
                SignalKind::StateChanged {
                    agent,
                    from: observation.previous_state,
                    to: observation.state,
                    distance: observation.distance_to_target,
                },
            );
        }
        if observation.direction_flipped {
            self.push(
                tick,
                elapsed,
                SignalKind::DirectionFlipped {
                    agent,
                    direction: observation.patrol_direction,
                    velocity: observation.velocity,
                },
            );
        }
    }

    /// Records that `agent` left the level.
    pub fn record_removal(&mut self, tick: u64, elapsed: f64, agent: AgentId) {
        self.push(tick, elapsed, SignalKind::AgentRemoved { agent });
    }

    /// Moves every signal of `other` to the end of this log.
    pub fn append(&mut self, mut other: Self) {
        self.entries.append(&mut other.entries);
    }

    /// Records every observation of a tick report.
    pub fn record_tick(&mut self, report: &TickReport) {
        for (id, observation) in &report.observations {
            self.record(report.tick, report.elapsed, *id, observation);
        }
    }

    /// Recorded signals in order.
    #[must_use]
    pub fn entries(&self) -> &[Signal] {
        &self.entries
    }

    /// Number of recorded signals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every recorded signal.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serialises the log as pretty JSON.
    ///
    /// # Errors
    /// Propagates `serde_json` failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
