//! Steering controller and headless harness for GAIT.
//!
//! [`steering::SteeringController`] is the whole algorithm; the engine
//! and systems exist so it can be driven tick by tick the way a host game
//! would, with per-actor state held in a hecs world.

pub mod engine;
pub mod random;
pub mod steering;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SteeringEngine};
pub use gait_core as core;
pub use random::{FnSource, RandomSource};
pub use steering::{SteeringController, SteeringInput};
