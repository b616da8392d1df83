//! Bevy plugin driving patrol/chase agents inside an `App`.
//!
//! Entities carrying [`PatrolAgent`] are moved by their [`Velocity`] and then
//! re-evaluated against the single entity marked [`ChaseTarget`]. Decisions
//! are recorded into the [`AgentSignals`] resource.

use bevy::prelude::*;
use log::debug;

use crate::agent::Agent;
use crate::controller;
use crate::level::AgentId;
use crate::signals::SignalLog;

/// Patrol/chase state attached to an entity.
///
/// The agent's position is taken from the entity's `Transform` every frame;
/// the rest of the record is owned by the component.
#[derive(Component, Debug, Clone, Copy, Deref, DerefMut)]
#[require(Transform, Velocity)]
pub struct PatrolAgent(pub Agent);

/// Marks the entity agents chase.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct ChaseTarget;

/// Planar velocity in units per second.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// Signals recorded by [`patrol_chase_system`].
#[derive(Resource, Debug, Default)]
pub struct AgentSignals {
    /// Collected signals.
    pub log: SignalLog,
    /// Frames in which agents were evaluated.
    pub ticks: u64,
}

/// Moves every entity with a [`Velocity`] by one frame.
pub fn integrate_velocity_system(time: Res<Time>, mut movers: Query<(&mut Transform, &Velocity)>) {
    let dt = time.delta_secs();
    for (mut transform, velocity) in &mut movers {
        transform.translation += velocity.0.extend(0.0) * dt;
    }
}

/// Runs the controller for every [`PatrolAgent`].
///
/// Does nothing unless exactly one [`ChaseTarget`] exists.
pub fn patrol_chase_system(
    time: Res<Time>,
    mut signals: ResMut<AgentSignals>,
    targets: Query<&Transform, With<ChaseTarget>>,
    mut agents: Query<(Entity, &mut PatrolAgent, &Transform, &mut Velocity), Without<ChaseTarget>>,
) {
    let Ok(target) = targets.single() else {
        debug!("patrol/chase skipped: expected exactly one chase target");
        return;
    };
    let target = target.translation.truncate().as_dvec2();
    let dt = time.delta_secs_f64();
    let elapsed = time.elapsed_secs_f64();

    signals.ticks += 1;
    let tick = signals.ticks;
    for (entity, mut agent, transform, mut velocity) in &mut agents {
        let mut current = agent.0;
        current.position = transform.translation.truncate().as_dvec2();
        let next = controller::update(&current, target, dt);
        agent.0 = next.agent;
        velocity.0 = next.agent.velocity.as_vec2();
        signals
            .log
            .record(tick, elapsed, AgentId(entity.to_bits()), &next.observation);
    }
}

/// Installs [`AgentSignals`] and the patrol/chase systems in `Update`.
#[derive(Default)]
pub struct PatrolChasePlugin;

impl Plugin for PatrolChasePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AgentSignals>().add_systems(
            Update,
            (integrate_velocity_system, patrol_chase_system).chain(),
        );
    }
}
