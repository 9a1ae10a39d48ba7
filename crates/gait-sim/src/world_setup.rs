//! Entity spawn factories for steered actors.

use glam::DVec3;
use hecs::World;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use gait_core::components::*;
use gait_core::constants::BOSS_MAX_HEALTH;
use gait_core::types::ActorId;

/// The actor's own random generator, feeding its wobble walk.
pub struct ActorRng(pub ChaCha8Rng);

/// Initial state for a new actor.
#[derive(Debug, Clone, Copy)]
pub struct ActorSpawn {
    pub position: DVec3,
    pub velocity: DVec3,
    pub desired: DVec3,
    pub health: f64,
    pub max_health: f64,
}

impl ActorSpawn {
    /// A full-health boss at rest.
    pub fn boss(position: DVec3) -> Self {
        Self {
            position,
            velocity: DVec3::ZERO,
            desired: DVec3::ZERO,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
        }
    }

    pub fn with_desired(mut self, desired: DVec3) -> Self {
        self.desired = desired;
        self
    }

    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }
}

/// Spawn an actor with zeroed steering state.
///
/// The actor's generator is seeded from `rng`, so spawn order fully
/// determines every actor's wobble sequence.
pub fn spawn_actor(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    id: ActorId,
    spawn: &ActorSpawn,
) -> hecs::Entity {
    let actor_rng = ChaCha8Rng::seed_from_u64(rng.gen());
    let health = Health {
        current: spawn.health.max(0.0).min(spawn.max_health),
        max: spawn.max_health,
    };

    world.spawn((
        Actor { id },
        Position(spawn.position),
        Velocity(spawn.velocity),
        DesiredVelocity(spawn.desired),
        health,
        HeadingState::default(),
        WobbleState::default(),
        SteeringMode::default(),
        ActorRng(actor_rng),
    ))
}

/// Scatter `count` full-health bosses on a ring around `center`, each
/// wanting to move toward the center at `speed` blocks per tick.
pub fn spawn_boss_ring(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u32,
    center: DVec3,
    radius: f64,
    speed: f64,
    count: usize,
) -> Vec<(ActorId, hecs::Entity)> {
    let mut spawned = Vec::with_capacity(count);
    for _ in 0..count {
        let bearing: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let position = center + DVec3::new(radius * bearing.cos(), 0.0, radius * bearing.sin());
        let inward = DVec3::new(-bearing.cos(), 0.0, -bearing.sin()) * speed;

        let id = ActorId(*next_id);
        *next_id += 1;
        let entity = spawn_actor(
            world,
            rng,
            id,
            &ActorSpawn::boss(position).with_desired(inward),
        );
        spawned.push((id, entity));
    }
    spawned
}
