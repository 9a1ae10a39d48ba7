//! Steering constants and tuning defaults.

/// Host simulation tick rate (Hz).
pub const TICK_RATE: u32 = 20;

// --- Steering ---

/// Scale applied to the heading vector when it is added to velocity.
pub const ACCEL: f64 = 0.05;

/// Fraction of the previous horizontal velocity retained each tick.
/// Together with `ACCEL` this sets the cruising speed.
pub const DRAG: f64 = 0.75;

/// Maximum heading rotation per tick (radians).
pub const MAX_TURN: f64 = 0.03;

/// Actors below this fraction of max health skip smoothing entirely.
pub const HEALTH_BYPASS_FRACTION: f64 = 0.5;

// --- Wobble ---

/// Half-width of the uniform per-tick wobble delta.
pub const WOBBLE_STEP: f64 = 0.01;

/// Wobble accumulator is clamped to `[-WOBBLE_LIMIT, WOBBLE_LIMIT]`.
pub const WOBBLE_LIMIT: f64 = 2.0;

/// Wobble is divided by this before being added to the turn angle.
pub const WOBBLE_ANGLE_DIVISOR: f64 = 100.0;

// --- Vector thresholds ---

/// Squared heading magnitude below which the heading snaps to the target.
pub const HEADING_SNAP_EPSILON_SQ: f64 = 0.0001;

/// Vectors shorter than this normalize to zero.
pub const NORMALIZE_EPSILON: f64 = 1.0e-4;

// --- Actors ---

/// Max health of a freshly spawned boss actor.
pub const BOSS_MAX_HEALTH: f64 = 300.0;
