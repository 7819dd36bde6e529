//! Shared numeric constants for the canvas crate.

// ── Field ───────────────────────────────────────────────────────

/// Number of particles seeded at startup.
pub const PARTICLE_COUNT: usize = 55;

/// Full range of the initial per-axis velocity; velocities land in `[-0.2, 0.2)`.
pub const VELOCITY_RANGE: f64 = 0.4;

/// Smallest particle radius in CSS pixels.
pub const RADIUS_MIN: f64 = 0.5;

/// Radius spread above [`RADIUS_MIN`].
pub const RADIUS_SPAN: f64 = 1.8;

/// Faintest particle fill opacity.
pub const OPACITY_MIN: f64 = 0.1;

/// Opacity spread above [`OPACITY_MIN`].
pub const OPACITY_SPAN: f64 = 0.5;

// ── Links ───────────────────────────────────────────────────────

/// Two particles closer than this (CSS pixels) are joined by a line.
pub const LINK_DISTANCE: f64 = 90.0;

/// Opacity of a link between two coincident particles; fades linearly to zero at [`LINK_DISTANCE`].
pub const LINK_OPACITY: f64 = 0.12;

/// Stroke width of a link line.
pub const LINK_WIDTH: f64 = 0.6;
