//! Kinematic integration system.
//!
//! Velocities are in blocks per tick, so position += velocity.

use hecs::World;

use gait_core::components::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.0 += vel.0;
    }
}
