//! ECS components for hecs entities.
//!
//! Components are plain data structs. Steering logic lives in `gait-sim`.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::ActorId;

/// Identity tag for a steered actor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
}

/// World position (blocks).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Velocity actually applied to the actor (blocks per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// Velocity the host's own decision logic wants this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DesiredVelocity(pub DVec3);

/// Hit points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Smoothed horizontal direction of travel. y is always 0.
///
/// Starts at zero; the first non-bypass tick snaps it onto the target
/// direction. After that its magnitude is carried through every rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingState(pub DVec3);

/// Slowly drifting turn bias, kept within the configured wobble limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WobbleState(pub f64);

/// Whether the last steering pass smoothed this actor (false = bypassed).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringMode {
    pub smoothed: bool,
}
