//! Shared thresholds and defaults for the engine crate.

// ── Gesture capture ─────────────────────────────────────────────

/// Squared-distance jump threshold. A move sample farther than this from the
/// previous point is treated as a stray contact (palm) and ends the gesture.
pub const PALM_REJECTION_LIMIT_SQ: f64 = 200.0 * 200.0;

/// Squared-distance smoothing threshold. A move sample closer than this to
/// the previous point is discarded as visually meaningless.
pub const CURVE_SMOOTHING_LIMIT_SQ: f64 = 10.0;

/// Baseline stroke width hint in canvas units.
pub const STROKE_WIDTH_BASE: f64 = 2.0;

/// Upper bound for the speed-derived stroke width hint.
pub const STROKE_WIDTH_MAX: f64 = 8.0;

/// Divisor applied to the squared sample distance when deriving the width
/// hint from sample speed.
pub const STROKE_WIDTH_SPEED_DIVISOR: f64 = 400.0;

// ── Notices ─────────────────────────────────────────────────────

/// Toast lifetime in milliseconds.
pub const TOAST_DELAY_MS: i64 = 1600;

/// Maximum number of transcript lines retained before the oldest is evicted.
pub const TRANSCRIPT_CAP: usize = 500;

// ── Identity ────────────────────────────────────────────────────

/// Display name used before the user picks one.
pub const DEFAULT_NAME: &str = "user";

/// Stroke color used before the user picks one.
pub const DEFAULT_COLOR: &str = "#333333";

/// Durable-store key under which the local identity is persisted.
pub const PROFILE_KEY: &str = "state0";
