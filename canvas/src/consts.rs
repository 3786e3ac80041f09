//! Shared numeric constants for the canvas crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Default lower zoom bound.
pub const DEFAULT_MIN_ZOOM: f64 = 0.1;

/// Default upper zoom bound.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Multiplicative step for the zoom-in / zoom-out buttons and keys.
pub const ZOOM_STEP: f64 = 1.2;

/// Wheel zoom sensitivity: fraction of zoom change per wheel pixel.
pub const WHEEL_ZOOM_SPEED: f64 = 0.001;

// ── Grid ────────────────────────────────────────────────────────

/// Grid cell size in canvas units at zoom 1.0.
pub const GRID_BASE_SIZE: f64 = 20.0;

// ── Fit ─────────────────────────────────────────────────────────

/// Screen-space padding kept around content by "fit to content".
pub const FIT_PADDING_PX: f64 = 40.0;

// ── Cursors ─────────────────────────────────────────────────────

/// Cursor shown while a pan is available but not active.
pub const CURSOR_GRAB: &str = "grab";

/// Cursor shown while a pan gesture is in progress.
pub const CURSOR_GRABBING: &str = "grabbing";

/// Cursor for the default pointer.
pub const CURSOR_DEFAULT: &str = "default";

/// Cursor for shape and text creation tools.
pub const CURSOR_CROSSHAIR: &str = "crosshair";
