#![cfg_attr(docsrs, feature(doc_cfg))]
//! Patrol and chase behaviour for 2D game agents.
//!
//! Agents oscillate along a bounded patrol range and switch to straight-line
//! pursuit while a target is inside their detection radius. The core is a
//! pure per-tick transform ([`controller::update`]); [`Level`] and
//! [`plugin::PatrolChasePlugin`] drive it headlessly or inside Bevy.
pub mod agent;
pub mod config;
pub mod constants;
pub mod controller;
pub mod gravity;
pub mod level;
pub mod logging;
pub mod patrol;
pub mod plugin;
pub mod rng;
pub mod signals;
pub mod spawn;
pub mod vector_math;
pub use constants::*;

// Re-export commonly used items
pub use agent::{Agent, AgentState, AgentTuning};
pub use config::{ConfigError, LevelConfig};
pub use controller::{update, AgentUpdate, Observation};
pub use level::{AgentId, Level, TickReport};
pub use logging::init as init_logging;
pub use patrol::{Axis, PatrolDirection, PatrolRange};
pub use plugin::{AgentSignals, ChaseTarget, PatrolAgent, PatrolChasePlugin, Velocity};
pub use signals::{Signal, SignalKind, SignalLog};
pub use vector_math::{angle_to, distance, unit_vector_from_angle, Point2D};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use prowl::prelude::*;
    //! ```

    pub use crate::controller::update;
    pub use crate::patrol::{Axis, PatrolDirection, PatrolRange};
    pub use crate::vector_math::Point2D;
    pub use crate::{Agent, AgentState, AgentTuning, Level, SignalLog};
}
