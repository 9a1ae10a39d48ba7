//! Steering tuning parameters.
//!
//! `SteeringConfig::default()` reproduces the constants in
//! [`crate::constants`]. Hosts that want a different gait can load a JSON
//! file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{GaitError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteeringConfig {
    /// Heading-to-velocity scale.
    pub accel: f64,
    /// Velocity retention per tick, in [0, 1].
    pub drag: f64,
    /// Max heading rotation per tick (radians).
    pub max_turn: f64,
    /// Half-width of the per-tick wobble delta.
    pub wobble_step: f64,
    /// Wobble clamp bound.
    pub wobble_limit: f64,
    /// Wobble is divided by this before joining the turn angle.
    pub wobble_angle_divisor: f64,
    /// Below `max_health * health_bypass_fraction` steering is bypassed.
    pub health_bypass_fraction: f64,
}

impl Default for SteeringConfig {
    fn default() -> Self {
        Self {
            accel: ACCEL,
            drag: DRAG,
            max_turn: MAX_TURN,
            wobble_step: WOBBLE_STEP,
            wobble_limit: WOBBLE_LIMIT,
            wobble_angle_divisor: WOBBLE_ANGLE_DIVISOR,
            health_bypass_fraction: HEALTH_BYPASS_FRACTION,
        }
    }
}

impl SteeringConfig {
    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SteeringConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| GaitError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::debug!("Loaded steering config from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Reject values that would make the gait meaningless.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("accel", self.accel),
            ("drag", self.drag),
            ("max_turn", self.max_turn),
            ("wobble_step", self.wobble_step),
            ("wobble_limit", self.wobble_limit),
            ("wobble_angle_divisor", self.wobble_angle_divisor),
            ("health_bypass_fraction", self.health_bypass_fraction),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(invalid(field, "must be finite", value));
            }
        }

        for (field, value) in [
            ("accel", self.accel),
            ("max_turn", self.max_turn),
            ("wobble_step", self.wobble_step),
            ("wobble_limit", self.wobble_limit),
        ] {
            if value < 0.0 {
                return Err(invalid(field, "must not be negative", value));
            }
        }

        if !(0.0..=1.0).contains(&self.drag) {
            return Err(invalid("drag", "must be within [0, 1]", self.drag));
        }
        if !(0.0..=1.0).contains(&self.health_bypass_fraction) {
            return Err(invalid(
                "health_bypass_fraction",
                "must be within [0, 1]",
                self.health_bypass_fraction,
            ));
        }
        if self.wobble_angle_divisor <= 0.0 {
            return Err(invalid(
                "wobble_angle_divisor",
                "must be positive",
                self.wobble_angle_divisor,
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: &'static str, value: f64) -> GaitError {
    GaitError::InvalidConfig {
        field,
        reason,
        value,
    }
}
