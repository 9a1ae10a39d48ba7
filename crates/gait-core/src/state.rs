//! Harness state snapshot, produced after each tick.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::types::{ActorId, SimTime};

/// Every actor's visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SteerSnapshot {
    pub time: SimTime,
    /// Sorted by actor id.
    pub actors: Vec<ActorView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorView {
    pub id: ActorId,
    pub position: DVec3,
    pub velocity: DVec3,
    pub heading: DVec3,
    /// Heading angle on the x/z plane (radians, 0 = +x).
    pub heading_yaw: f64,
    pub wobble: f64,
    pub health: f64,
    pub max_health: f64,
    /// False when the health bypass applied this tick.
    pub smoothed: bool,
}

impl SteerSnapshot {
    pub fn actor(&self, id: ActorId) -> Option<&ActorView> {
        self.actors.iter().find(|a| a.id == id)
    }
}
