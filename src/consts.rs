//! Shared numeric constants for the stagecraft crate.

// ── Geometry ────────────────────────────────────────────────────

/// Lines whose directions form an angle with `|sin| <= PARALLEL_EPSILON` are
/// treated as parallel. The test is relative to both direction lengths, so it
/// holds at sub-pixel and world scales alike.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Slack on the edge parameter when a segment is tested against rectangle
/// edges. Corner crossings land a rounding error outside `[0, 1]` on both
/// adjoining edges; the slack keeps one of them.
pub const EDGE_EPSILON: f64 = 1e-9;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Stage ───────────────────────────────────────────────────────

/// Stage width used when no configuration overrides it, in pixels.
pub const DEFAULT_STAGE_WIDTH: u32 = 800;

/// Stage height used when no configuration overrides it, in pixels.
pub const DEFAULT_STAGE_HEIGHT: u32 = 600;

// ── Debug volumes ───────────────────────────────────────────────

/// Stroke width for debug bounding volumes, in pixels.
pub const DEFAULT_VOLUME_LINE_WIDTH: f64 = 1.0;

/// Stroke colour for debug bounding volumes.
pub const DEFAULT_VOLUME_COLOR: &str = "#00FF00";

/// Fill colour for the origin marker drawn inside a debug volume.
pub const DEFAULT_ORIGIN_COLOR: &str = "#FF0000";

/// Radius of the origin marker, in pixels.
pub const ORIGIN_DOT_RADIUS: f64 = 2.0;
