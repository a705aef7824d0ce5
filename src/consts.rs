//! Shared constants for the widget crate.

// ── Defaults ────────────────────────────────────────────────────

pub const DEFAULT_IMAGE: &str = "./character/friend.png";
pub const DEFAULT_WIDTH_PX: f64 = 200.0;
pub const DEFAULT_HEIGHT_PX: f64 = 300.0;
pub const DEFAULT_Z_INDEX: i64 = 9999;

/// Fraction of the remaining angular gap closed per frame.
pub const DEFAULT_SMOOTHING: f64 = 0.1;

/// Viewport width (px) at or below which the widget is hidden.
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 600.0;

pub const DEFAULT_EDGE_OFFSET_PX: f64 = 20.0;

/// Added to the pointer bearing so the artwork's "up" faces the cursor.
pub const DEFAULT_ROTATION_OFFSET_DEG: f64 = 90.0;

// ── Naming ──────────────────────────────────────────────────────

/// Class on every mounted element; also the id prefix.
pub const CLASS_NAME: &str = "friend-el";

/// Class toggled on while the bounce animation runs.
pub const BOUNCING_CLASS_NAME: &str = "bouncing";

/// Custom property carrying the published angle.
pub const ROTATION_PROPERTY: &str = "--rotation-angle";

// ── Timing ──────────────────────────────────────────────────────

/// Quiet period after the last resize before the center is recomputed.
pub const RESIZE_DEBOUNCE_MS: u32 = 200;
