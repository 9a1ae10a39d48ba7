//! Host commands sent to the steering harness.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::ActorId;

/// Everything the host can tell the harness between ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostCommand {
    /// Replace the velocity the host's AI wants for an actor.
    SetDesired { actor: ActorId, velocity: DVec3 },
    /// Set current health (clamped to `[0, max]`).
    SetHealth { actor: ActorId, health: f64 },
    /// Remove the actor and its steering state.
    Despawn { actor: ActorId },
}
