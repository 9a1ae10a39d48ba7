//! Natural steering for boss actors.
//!
//! Replaces the host's instantaneous velocity assignment with a heading
//! that turns toward the desired direction at a bounded rate, plus a
//! velocity that blends the previous velocity (drag) with the heading
//! (acceleration). A slow random walk biases every turn so the path wobbles.
//!
//! Actors below the health threshold skip all of this and take the
//! desired velocity as-is.

use glam::DVec3;

use gait_core::components::{HeadingState, WobbleState};
use gait_core::config::SteeringConfig;
use gait_core::constants::HEADING_SNAP_EPSILON_SQ;
use gait_core::types::{horizontal, normalize_or_zero};

use crate::random::RandomSource;

/// Per-tick input from the host for one actor.
#[derive(Debug, Clone, Copy)]
pub struct SteeringInput {
    /// Velocity the host's AI wants to apply this tick.
    pub desired: DVec3,
    /// Velocity the actor currently has.
    pub current_velocity: DVec3,
    pub health: f64,
    pub max_health: f64,
}

#[derive(Debug, Clone, Default)]
pub struct SteeringController {
    config: SteeringConfig,
}

impl SteeringController {
    pub fn new(config: SteeringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// True when the actor is hurt enough to skip smoothing.
    pub fn bypasses(&self, health: f64, max_health: f64) -> bool {
        health < max_health * self.config.health_bypass_fraction
    }

    /// Compute the velocity to apply this tick.
    ///
    /// Mutates `heading` and `wobble` on every smoothed tick and leaves both
    /// untouched (drawing no random sample) when the health bypass applies.
    pub fn compute_velocity(
        &self,
        input: &SteeringInput,
        heading: &mut HeadingState,
        wobble: &mut WobbleState,
        rng: &mut impl RandomSource,
    ) -> DVec3 {
        if self.bypasses(input.health, input.max_health) {
            log::trace!(
                "Steering bypassed at health {}/{}",
                input.health,
                input.max_health
            );
            return input.desired;
        }

        let target_dir = normalize_or_zero(horizontal(input.desired));

        wobble.0 = update_wobble(
            wobble.0,
            rng.next_unit(),
            self.config.wobble_step,
            self.config.wobble_limit,
        );
        heading.0 = rotate_toward(
            heading.0,
            target_dir,
            self.config.max_turn,
            wobble.0 / self.config.wobble_angle_divisor,
        );

        let drag = self.config.drag;
        let accel = self.config.accel;
        DVec3::new(
            input.current_velocity.x * drag + heading.0.x * accel,
            input.desired.y,
            input.current_velocity.z * drag + heading.0.z * accel,
        )
    }
}

/// One step of the wobble random walk.
///
/// `sample` is uniform in `[0, 1)` and maps to a delta in `[-step, step)`.
/// The result is clamped, not wrapped, to `[-limit, limit]`, upper bound
/// first. Never panics, whatever the limit.
pub fn update_wobble(wobble: f64, sample: f64, step: f64, limit: f64) -> f64 {
    let delta = sample * (2.0 * step) - step;
    (wobble + delta).min(limit).max(-limit)
}

/// Rotate `current` toward `target` on the x/z plane by at most `max_angle`,
/// then by an extra `turn_bias` radians.
///
/// The bias is added after the clamp, so the total rotation can exceed
/// `max_angle` by up to `|turn_bias|`.
///
/// A near-zero `current` has no direction to turn from and snaps to `target`
/// as given. Otherwise the result keeps `|current|` and has y = 0.
pub fn rotate_toward(current: DVec3, target: DVec3, max_angle: f64, turn_bias: f64) -> DVec3 {
    if current.length_squared() < HEADING_SNAP_EPSILON_SQ {
        return target;
    }

    let cur = normalize_or_zero(current);
    let tgt = normalize_or_zero(target);

    // Y-up 2D cross product: positive turns from +x toward +z.
    let cross = cur.x * tgt.z - cur.z * tgt.x;
    let dot = cur.x * tgt.x + cur.z * tgt.z;

    let angle = cross.atan2(dot).min(max_angle).max(-max_angle) + turn_bias;
    let (sin, cos) = angle.sin_cos();

    let mag = current.length();
    DVec3::new(
        (cur.x * cos - cur.z * sin) * mag,
        0.0,
        (cur.x * sin + cur.z * cos) * mag,
    )
}

#[cfg(test)]
mod tests {
    use gait_core::constants::*;

    use super::*;
    use crate::random::FnSource;

    const EPS: f64 = 1e-9;

    fn fixed(sample: f64) -> FnSource<impl FnMut() -> f64> {
        FnSource(move || sample)
    }

    fn input(desired: DVec3, current_velocity: DVec3, health: f64) -> SteeringInput {
        SteeringInput {
            desired,
            current_velocity,
            health,
            max_health: 20.0,
        }
    }

    #[test]
    fn test_low_health_returns_desired_unchanged() {
        let controller = SteeringController::default();
        let mut heading = HeadingState(DVec3::new(0.3, 0.0, 0.4));
        let mut wobble = WobbleState(1.5);
        let desired = DVec3::new(0.7, -0.2, -0.9);

        let mut draws = 0;
        let mut rng = FnSource(|| {
            draws += 1;
            0.9
        });
        let out = controller.compute_velocity(
            &input(desired, DVec3::new(5.0, 5.0, 5.0), 5.0),
            &mut heading,
            &mut wobble,
            &mut rng,
        );

        assert_eq!(out, desired);
        assert_eq!(heading.0, DVec3::new(0.3, 0.0, 0.4));
        assert_eq!(wobble.0, 1.5);
        drop(rng);
        assert_eq!(draws, 0, "bypass must not consume randomness");
    }

    #[test]
    fn test_exactly_half_health_is_smoothed() {
        let controller = SteeringController::default();
        assert!(!controller.bypasses(10.0, 20.0));
        assert!(controller.bypasses(9.999, 20.0));
    }

    #[test]
    fn test_vertical_passes_through() {
        let controller = SteeringController::default();
        let mut heading = HeadingState::default();
        let mut wobble = WobbleState::default();
        let desired = DVec3::new(0.3, -0.123_456, 0.1);

        let out = controller.compute_velocity(
            &input(desired, DVec3::new(0.0, 0.8, 0.0), 20.0),
            &mut heading,
            &mut wobble,
            &mut fixed(0.37),
        );
        assert_eq!(out.y, desired.y);
    }

    #[test]
    fn test_first_smoothed_tick_snaps_heading() {
        let controller = SteeringController::default();
        let mut heading = HeadingState::default();
        let mut wobble = WobbleState::default();

        let out = controller.compute_velocity(
            &input(DVec3::new(0.0, 0.2, 3.0), DVec3::new(0.4, 0.0, 0.0), 20.0),
            &mut heading,
            &mut wobble,
            &mut fixed(0.5),
        );

        // Heading snaps onto the unit target direction.
        assert!((heading.0 - DVec3::Z).length() < EPS);
        // Wobble still advanced on the snap tick (sample 0.5 is a zero delta).
        assert!(wobble.0.abs() < EPS);
        assert!((out.x - 0.4 * DRAG).abs() < EPS);
        assert!((out.z - ACCEL).abs() < EPS);
        assert_eq!(out.y, 0.2);
    }

    #[test]
    fn test_wobble_advances_once_per_call() {
        let controller = SteeringController::default();
        let mut heading = HeadingState(DVec3::X);
        let mut wobble = WobbleState::default();

        let mut draws = 0;
        let mut rng = FnSource(|| {
            draws += 1;
            1.0 - f64::EPSILON
        });
        for _ in 0..3 {
            controller.compute_velocity(
                &input(DVec3::X, DVec3::ZERO, 20.0),
                &mut heading,
                &mut wobble,
                &mut rng,
            );
        }
        drop(rng);
        assert_eq!(draws, 3);
        assert!((wobble.0 - 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_blends_drag_and_heading() {
        let controller = SteeringController::default();
        let mut heading = HeadingState(DVec3::X);
        let mut wobble = WobbleState::default();

        // Target straight ahead, zero-delta wobble: heading stays +x.
        let out = controller.compute_velocity(
            &input(DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.1, 0.0, -0.2), 20.0),
            &mut heading,
            &mut wobble,
            &mut fixed(0.5),
        );
        assert!((out.x - (0.1 * DRAG + ACCEL)).abs() < EPS);
        assert!((out.z - (-0.2 * DRAG)).abs() < EPS);
    }

    #[test]
    fn test_purely_vertical_desired_keeps_turning_by_wobble_only() {
        let controller = SteeringController::default();
        let mut heading = HeadingState(DVec3::X);
        let mut wobble = WobbleState(1.0);

        let out = controller.compute_velocity(
            &input(DVec3::new(0.0, 0.5, 0.0), DVec3::ZERO, 20.0),
            &mut heading,
            &mut wobble,
            &mut fixed(0.5),
        );
        // atan2(0, 0) = 0, so only the 1.0 / 100 bias rotates the heading.
        let expected = DVec3::new(0.01_f64.cos(), 0.0, 0.01_f64.sin());
        assert!((heading.0 - expected).length() < EPS);
        assert_eq!(out.y, 0.5);
    }

    #[test]
    fn test_wobble_stays_in_bounds() {
        let samples = [0.0, 0.25, 0.5, 0.75, 1.0 - f64::EPSILON];
        let priors = [-2.0, -1.995, -0.3, 0.0, 1.0, 1.995, 2.0];
        for &prior in &priors {
            for &sample in &samples {
                let w = update_wobble(prior, sample, WOBBLE_STEP, WOBBLE_LIMIT);
                assert!(
                    (-WOBBLE_LIMIT..=WOBBLE_LIMIT).contains(&w),
                    "prior {prior}, sample {sample} -> {w}"
                );
            }
        }
    }

    #[test]
    fn test_wobble_clamps_instead_of_resetting() {
        let w = update_wobble(2.0, 1.0 - f64::EPSILON, WOBBLE_STEP, WOBBLE_LIMIT);
        assert_eq!(w, 2.0);
        let w = update_wobble(-2.0, 0.0, WOBBLE_STEP, WOBBLE_LIMIT);
        assert_eq!(w, -2.0);
        let w = update_wobble(1.5, 0.0, WOBBLE_STEP, WOBBLE_LIMIT);
        assert!((w - 1.49).abs() < EPS);
    }

    #[test]
    fn test_rotate_from_zero_returns_target() {
        let target = DVec3::new(0.6, 0.0, -0.8);
        assert_eq!(rotate_toward(DVec3::ZERO, target, MAX_TURN, 0.015), target);

        // Snap keeps the target's magnitude, not the old heading's.
        let tiny = DVec3::new(0.005, 0.0, 0.0);
        let out = rotate_toward(tiny, DVec3::Z, MAX_TURN, 0.0);
        assert_eq!(out, DVec3::Z);
    }

    #[test]
    fn test_rotate_quarter_turn_is_clamped() {
        let out = rotate_toward(DVec3::X, DVec3::Z, 0.03, 0.0);
        assert!((out.x - 0.99955).abs() < 1e-5, "x = {}", out.x);
        assert!((out.z - 0.029996).abs() < 1e-6, "z = {}", out.z);
        assert_eq!(out.y, 0.0);
    }

    #[test]
    fn test_rotate_preserves_magnitude() {
        let cases = [
            (DVec3::new(3.0, 0.0, 4.0), DVec3::new(-1.0, 0.0, 0.2), 0.03, 0.02),
            (DVec3::new(0.2, 0.0, -0.1), DVec3::new(0.0, 0.0, 1.0), 1.0, -0.02),
            (DVec3::new(-7.0, 0.0, 0.5), DVec3::new(7.0, 0.0, 0.5), 0.0, 0.0),
            (DVec3::new(1.0, 0.0, 1.0), DVec3::new(1.0, 0.0, 1.0), 0.5, 0.01),
        ];
        for (current, target, max_angle, bias) in cases {
            let out = rotate_toward(current, target, max_angle, bias);
            assert!(
                (out.length() - current.length()).abs() < 1e-9,
                "|{out}| != |{current}|"
            );
        }
    }

    #[test]
    fn test_rotation_direction_follows_cross_sign() {
        // Small offsets well inside the turn limit.
        let current = DVec3::X;
        let left = DVec3::new(1.0, 0.0, 0.01);
        let right = DVec3::new(1.0, 0.0, -0.01);

        let out = rotate_toward(current, left, 0.5, 0.0);
        assert!(out.z > 0.0);
        let out = rotate_toward(current, right, 0.5, 0.0);
        assert!(out.z < 0.0);

        // Inside the limit the heading lands on the target direction.
        let out = rotate_toward(current, left, 0.5, 0.0);
        assert!((out.z / out.x - 0.01).abs() < 1e-9);
    }

    #[test]
    fn test_bias_added_after_clamp() {
        // Clamped to 0.03, then +0.02 of bias: total 0.05 rad.
        let out = rotate_toward(DVec3::X, DVec3::Z, 0.03, 0.02);
        let angle = out.z.atan2(out.x);
        assert!((angle - 0.05).abs() < 1e-12);

        // Bias can rotate even when already aligned.
        let out = rotate_toward(DVec3::X, DVec3::X, 0.03, -0.01);
        assert!((out.z.atan2(out.x) + 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_bad_turn_limits_do_not_panic() {
        for max_angle in [-0.01, f64::NAN, f64::INFINITY] {
            let out = rotate_toward(DVec3::X, DVec3::Z, max_angle, 0.0);
            assert_eq!(out.y, 0.0, "max_angle {max_angle}");
        }
        let w = update_wobble(0.5, 0.5, WOBBLE_STEP, -1.0);
        assert!(w.is_finite());
        // NaN limit: no bound applies, the walk passes through.
        assert_eq!(update_wobble(0.5, 0.5, WOBBLE_STEP, f64::NAN), 0.5);
    }

    #[test]
    fn test_unvalidated_config_ticks_without_panic() {
        let controller = SteeringController::new(SteeringConfig {
            max_turn: -0.01,
            wobble_limit: -2.0,
            ..Default::default()
        });
        let mut heading = HeadingState::default();
        let mut wobble = WobbleState::default();
        for _ in 0..3 {
            let out = controller.compute_velocity(
                &input(DVec3::Z, DVec3::ZERO, 20.0),
                &mut heading,
                &mut wobble,
                &mut fixed(0.5),
            );
            assert_eq!(out.y, 0.0);
        }
    }

    #[test]
    fn test_custom_config_turn_rate() {
        let controller = SteeringController::new(SteeringConfig {
            max_turn: 0.1,
            ..Default::default()
        });
        let mut heading = HeadingState(DVec3::X);
        let mut wobble = WobbleState::default();
        controller.compute_velocity(
            &input(DVec3::Z, DVec3::ZERO, 20.0),
            &mut heading,
            &mut wobble,
            &mut fixed(0.5),
        );
        assert!((heading.0.z.atan2(heading.0.x) - 0.1).abs() < 1e-12);
    }
}
