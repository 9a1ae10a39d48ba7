//! Fundamental geometric and simulation types.
//!
//! Vectors are `glam::DVec3` with y up; the steering plane is x/z.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{NORMALIZE_EPSILON, TICK_RATE};

/// Stable identity of an actor across ticks. Assigned sequentially by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Project onto the horizontal plane (drop y).
pub fn horizontal(v: DVec3) -> DVec3 {
    DVec3::new(v.x, 0.0, v.z)
}

/// Unit vector along `v`, or zero when `v` is shorter than `NORMALIZE_EPSILON`.
pub fn normalize_or_zero(v: DVec3) -> DVec3 {
    let len = v.length();
    if len < NORMALIZE_EPSILON {
        DVec3::ZERO
    } else {
        v / len
    }
}

/// Heading angle in radians on the x/z plane (0 = +x, positive toward +z).
pub fn yaw(v: DVec3) -> f64 {
    v.z.atan2(v.x)
}
