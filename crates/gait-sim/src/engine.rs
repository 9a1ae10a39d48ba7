//! Headless steering harness.
//!
//! `SteeringEngine` stands in for the host game: it owns the hecs world
//! holding every actor's steering state, applies host commands at tick
//! boundaries, runs the steering and movement systems, and produces
//! `SteerSnapshot`s. Fully deterministic for a given seed.

use std::collections::{HashMap, VecDeque};

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use gait_core::commands::HostCommand;
use gait_core::components::{DesiredVelocity, Health};
use gait_core::config::SteeringConfig;
use gait_core::state::SteerSnapshot;
use gait_core::types::{ActorId, SimTime};

use crate::steering::SteeringController;
use crate::systems;
use crate::world_setup::{self, ActorSpawn};

/// Configuration for starting a new harness.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub steering: SteeringConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            steering: SteeringConfig::default(),
        }
    }
}

pub struct SteeringEngine {
    world: World,
    time: SimTime,
    rng: ChaCha8Rng,
    controller: SteeringController,
    next_actor_id: u32,
    actors: HashMap<ActorId, Entity>,
    command_queue: VecDeque<HostCommand>,
}

impl SteeringEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            controller: SteeringController::new(config.steering),
            next_actor_id: 0,
            actors: HashMap::new(),
            command_queue: VecDeque::new(),
        }
    }

    /// Spawn a new actor with zeroed heading and wobble.
    pub fn spawn_actor(&mut self, spawn: ActorSpawn) -> ActorId {
        let id = ActorId(self.next_actor_id);
        self.next_actor_id += 1;
        let entity = world_setup::spawn_actor(&mut self.world, &mut self.rng, id, &spawn);
        self.actors.insert(id, entity);
        log::debug!("Spawned actor {id:?} at {}", spawn.position);
        id
    }

    /// Spawn `count` bosses on a ring around `center`, all heading inward.
    pub fn spawn_boss_ring(
        &mut self,
        center: DVec3,
        radius: f64,
        speed: f64,
        count: usize,
    ) -> Vec<ActorId> {
        let spawned = world_setup::spawn_boss_ring(
            &mut self.world,
            &mut self.rng,
            &mut self.next_actor_id,
            center,
            radius,
            speed,
            count,
        );
        spawned
            .into_iter()
            .map(|(id, entity)| {
                self.actors.insert(id, entity);
                id
            })
            .collect()
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: HostCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = HostCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SteerSnapshot {
        self.process_commands();
        self.run_systems();
        self.time.advance();
        systems::snapshot::build_snapshot(&self.world, &self.time)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for tests that need to desync the id map.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn controller(&self) -> &SteeringController {
        &self.controller
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn entity(&self, id: ActorId) -> Option<Entity> {
        self.actors.get(&id).copied()
    }

    /// The desired velocity currently held for an actor.
    pub fn desired(&self, id: ActorId) -> Option<DVec3> {
        let entity = self.entity(id)?;
        self.world
            .get::<&DesiredVelocity>(entity)
            .ok()
            .map(|desired| desired.0)
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: HostCommand) {
        match command {
            HostCommand::SetDesired { actor, velocity } => {
                let Some(entity) = self.lookup(actor) else {
                    return;
                };
                if let Ok(mut desired) = self.world.get::<&mut DesiredVelocity>(entity) {
                    desired.0 = velocity;
                }
            }
            HostCommand::SetHealth { actor, health } => {
                let Some(entity) = self.lookup(actor) else {
                    return;
                };
                if let Ok(mut hp) = self.world.get::<&mut Health>(entity) {
                    hp.current = health.max(0.0).min(hp.max);
                }
            }
            HostCommand::Despawn { actor } => {
                let Some(entity) = self.actors.remove(&actor) else {
                    log::warn!("Despawn for unknown actor {actor:?} dropped");
                    return;
                };
                match self.world.despawn(entity) {
                    Ok(()) => log::debug!("Despawned actor {actor:?}"),
                    Err(e) => log::warn!("Despawn of actor {actor:?} found no entity: {e}"),
                }
            }
        }
    }

    fn lookup(&self, actor: ActorId) -> Option<Entity> {
        let entity = self.actors.get(&actor).copied();
        if entity.is_none() {
            log::warn!("Command for unknown actor {actor:?} dropped");
        }
        entity
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Steering (replaces the host's velocity assignment)
        systems::steering::run(&mut self.world, &self.controller);
        // 2. Movement integration
        systems::movement::run(&mut self.world);
    }
}
