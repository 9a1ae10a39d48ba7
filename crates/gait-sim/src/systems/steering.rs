//! Steering system: one `compute_velocity` call per actor per tick.
//!
//! This is the hook point that replaces the host's direct velocity
//! assignment. Heading and wobble components are the per-actor side-table
//! the controller reads and writes.

use hecs::World;

use gait_core::components::*;

use crate::steering::{SteeringController, SteeringInput};
use crate::world_setup::ActorRng;

pub fn run(world: &mut World, controller: &SteeringController) {
    for (_entity, (actor, desired, velocity, health, heading, wobble, mode, rng)) in world
        .query_mut::<(
            &Actor,
            &DesiredVelocity,
            &mut Velocity,
            &Health,
            &mut HeadingState,
            &mut WobbleState,
            &mut SteeringMode,
            &mut ActorRng,
        )>()
    {
        let input = SteeringInput {
            desired: desired.0,
            current_velocity: velocity.0,
            health: health.current,
            max_health: health.max,
        };

        let smoothed = !controller.bypasses(health.current, health.max);
        if smoothed != mode.smoothed {
            log::debug!(
                "Actor {:?} steering {} at {}/{} health",
                actor.id,
                if smoothed { "smoothed" } else { "bypassed" },
                health.current,
                health.max
            );
        }
        mode.smoothed = smoothed;

        velocity.0 = controller.compute_velocity(&input, heading, wobble, &mut rng.0);
    }
}
