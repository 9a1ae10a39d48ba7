//! Snapshot system: reads the world and builds a `SteerSnapshot`.
//!
//! Read-only.

use hecs::World;

use gait_core::components::*;
use gait_core::state::{ActorView, SteerSnapshot};
use gait_core::types::{yaw, SimTime};

pub fn build_snapshot(world: &World, time: &SimTime) -> SteerSnapshot {
    let mut actors: Vec<ActorView> = world
        .query::<(
            &Actor,
            &Position,
            &Velocity,
            &Health,
            &HeadingState,
            &WobbleState,
            &SteeringMode,
        )>()
        .iter()
        .map(
            |(_entity, (actor, pos, vel, health, heading, wobble, mode))| ActorView {
                id: actor.id,
                position: pos.0,
                velocity: vel.0,
                heading: heading.0,
                heading_yaw: yaw(heading.0),
                wobble: wobble.0,
                health: health.current,
                max_health: health.max,
                smoothed: mode.smoothed,
            },
        )
        .collect();
    actors.sort_by_key(|a| a.id);

    SteerSnapshot {
        time: *time,
        actors,
    }
}
