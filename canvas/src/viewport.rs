//! Viewport controller: the camera for one canvas view plus its gestures.
//!
//! [`ViewportController`] is the only writer of a view's [`Camera`]. Every
//! mutation goes through a method that keeps `zoom` inside the configured
//! bounds and drops non-finite input before it can reach the camera. None of
//! the operations can fail: out-of-range zoom requests are clamped, stray
//! gesture events (a move without a press) are ignored.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::camera::{Camera, Point, Rect};
use crate::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, WHEEL_ZOOM_SPEED, ZOOM_STEP};
use crate::gesture::{PanGesture, PinchGesture};
use crate::grid::snap_to_spacing;

/// Error returned by [`ViewportConfig::new`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A zoom bound is NaN or infinite.
    #[error("zoom bounds must be finite (min {min}, max {max})")]
    NonFinite { min: f64, max: f64 },
    /// The lower zoom bound is zero or negative.
    #[error("min zoom must be positive, got {0}")]
    NonPositiveMin(f64),
    /// The bounds do not bracket 1.0 (or are inverted).
    #[error("zoom bounds must satisfy min <= 1 <= max, got {min}..{max}")]
    Range { min: f64, max: f64 },
}

/// Zoom bounds for one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    min_zoom: f64,
    max_zoom: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { min_zoom: DEFAULT_MIN_ZOOM, max_zoom: DEFAULT_MAX_ZOOM }
    }
}

impl ViewportConfig {
    /// Validate zoom bounds.
    ///
    /// Bounds must be finite, `min` must be positive, and the range must
    /// contain 1.0 so that "reset" and "fit" (which never zoom past 100%)
    /// always land inside it.
    pub fn new(min_zoom: f64, max_zoom: f64) -> Result<Self, ConfigError> {
        if !min_zoom.is_finite() || !max_zoom.is_finite() {
            return Err(ConfigError::NonFinite { min: min_zoom, max: max_zoom });
        }
        if min_zoom <= 0.0 {
            return Err(ConfigError::NonPositiveMin(min_zoom));
        }
        if min_zoom > 1.0 || max_zoom < 1.0 {
            return Err(ConfigError::Range { min: min_zoom, max: max_zoom });
        }
        Ok(Self { min_zoom, max_zoom })
    }

    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Clamp `zoom` into `[min_zoom, max_zoom]`.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}

/// Owns the camera and gesture state for a single canvas view.
#[derive(Debug, Clone, Default)]
pub struct ViewportController {
    camera: Camera,
    config: ViewportConfig,
    pan: PanGesture,
    pinch: PinchGesture,
}

impl ViewportController {
    /// Create a controller at zoom 1.0, pan (0, 0).
    #[must_use]
    pub fn new(config: ViewportConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// The current camera.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn config(&self) -> ViewportConfig {
        self.config
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    // --- Coordinate mapping ---

    #[must_use]
    pub fn screen_to_canvas(&self, screen: Point) -> Point {
        self.camera.screen_to_world(screen)
    }

    #[must_use]
    pub fn canvas_to_screen(&self, canvas: Point) -> Point {
        self.camera.world_to_screen(canvas)
    }

    // --- Zoom ---

    /// Clamp `zoom` into bounds, store it, and return the applied value.
    ///
    /// Pan is left untouched, so the view zooms about the screen origin.
    pub fn set_scale(&mut self, zoom: f64) -> f64 {
        if !zoom.is_finite() {
            tracing::debug!(zoom, "ignoring non-finite zoom");
            return self.camera.zoom;
        }
        let applied = self.config.clamp(zoom);
        if zoom < self.config.min_zoom || zoom > self.config.max_zoom {
            tracing::trace!(requested = zoom, applied, "zoom clamped");
        }
        self.camera.zoom = applied;
        applied
    }

    /// Zoom to `target` while keeping the canvas point under `screen` fixed.
    ///
    /// Returns the applied (clamped) zoom.
    pub fn zoom_to_point(&mut self, screen: Point, target: f64) -> f64 {
        if !screen.is_finite() || !target.is_finite() {
            tracing::debug!(?screen, target, "ignoring non-finite zoom-to-point");
            return self.camera.zoom;
        }
        let old = self.camera.zoom;
        let applied = self.set_scale(target);
        let factor = applied / old;
        self.camera.pan_x += (screen.x - self.camera.pan_x) * (1.0 - factor);
        self.camera.pan_y += (screen.y - self.camera.pan_y) * (1.0 - factor);
        applied
    }

    /// Zoom in one step about `screen`.
    pub fn zoom_in(&mut self, screen: Point) -> f64 {
        self.zoom_to_point(screen, self.camera.zoom * ZOOM_STEP)
    }

    /// Zoom out one step about `screen`.
    pub fn zoom_out(&mut self, screen: Point) -> f64 {
        self.zoom_to_point(screen, self.camera.zoom / ZOOM_STEP)
    }

    /// Apply a wheel delta as a zoom about `screen`.
    ///
    /// Positive `delta_y` (scrolling down) zooms out. `speed` is the fractional
    /// zoom change per wheel pixel; pass `None` for the default.
    pub fn zoom_by_wheel(&mut self, screen: Point, delta_y: f64, speed: Option<f64>) -> f64 {
        let speed = speed.unwrap_or(WHEEL_ZOOM_SPEED);
        // A huge delta can drive the target negative; clamping pins it to min_zoom.
        self.zoom_to_point(screen, self.camera.zoom * (1.0 - delta_y * speed))
    }

    // --- Pan ---

    /// Translate the view by a screen-space delta. Unbounded.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        if !dx.is_finite() || !dy.is_finite() {
            tracing::debug!(dx, dy, "ignoring non-finite pan");
            return;
        }
        self.camera.pan_x += dx;
        self.camera.pan_y += dy;
    }

    /// Start a drag-to-pan gesture at `screen`.
    pub fn begin_pan(&mut self, screen: Point) {
        if !screen.is_finite() {
            tracing::debug!(?screen, "ignoring non-finite pan start");
            return;
        }
        self.pan.begin(screen);
    }

    /// Pan by the movement since the previous pointer. No-op when not panning.
    pub fn continue_pan(&mut self, screen: Point) {
        if !screen.is_finite() {
            tracing::debug!(?screen, "ignoring non-finite pan move");
            return;
        }
        if let Some((dx, dy)) = self.pan.update(screen) {
            self.pan_by(dx, dy);
        }
    }

    pub fn end_pan(&mut self) {
        self.pan.end();
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    /// Pointer recorded by the active pan gesture.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.pan.last_pointer()
    }

    // --- Pinch ---

    /// Start a two-finger pinch from touch points `a` and `b`.
    pub fn begin_pinch(&mut self, a: Point, b: Point) {
        self.pinch.begin(a, b);
    }

    /// Scale by the change in finger distance, zooming about their midpoint.
    pub fn continue_pinch(&mut self, a: Point, b: Point) {
        if let Some(step) = self.pinch.update(a, b) {
            self.zoom_to_point(step.center, self.camera.zoom * step.ratio);
        }
    }

    pub fn end_pinch(&mut self) {
        self.pinch.end();
    }

    #[must_use]
    pub fn is_pinching(&self) -> bool {
        self.pinch.is_active()
    }

    // --- Grid ---

    /// Snap `value` to the nearest multiple of `grid_size * zoom`.
    #[must_use]
    pub fn snap_to_grid(&self, value: f64, grid_size: f64) -> f64 {
        snap_to_spacing(value, grid_size * self.camera.zoom)
    }

    // --- Whole-view operations ---

    /// Fit `bounds` (world space) into a viewport, centred, never above 100%.
    ///
    /// `padding` is kept on every side, in the same units as the viewport.
    /// Returns the resulting camera. Invalid viewport sizes leave the camera
    /// unchanged.
    pub fn fit_to_bounds(&mut self, bounds: Rect, viewport_width: f64, viewport_height: f64, padding: f64) -> Camera {
        let valid_viewport = viewport_width > 0.0
            && viewport_height > 0.0
            && viewport_width.is_finite()
            && viewport_height.is_finite();
        if !valid_viewport || !bounds.is_finite() || !padding.is_finite() {
            tracing::debug!(?bounds, viewport_width, viewport_height, padding, "ignoring invalid fit request");
            return self.camera;
        }

        let scale_x = axis_fit(viewport_width, bounds.width, padding);
        let scale_y = axis_fit(viewport_height, bounds.height, padding);
        let zoom = self.config.clamp(scale_x.min(scale_y).min(1.0));

        self.camera = Camera {
            zoom,
            pan_x: (viewport_width - bounds.width * zoom) / 2.0 - bounds.x * zoom,
            pan_y: (viewport_height - bounds.height * zoom) / 2.0 - bounds.y * zoom,
        };
        self.camera
    }

    /// Back to zoom 1.0, pan (0, 0), with any gesture cancelled.
    pub fn reset(&mut self) {
        self.camera = Camera::default();
        self.pan.end();
        self.pinch.end();
    }

    /// Load a persisted camera.
    ///
    /// Zoom is clamped into bounds; non-finite fields keep their current value.
    pub fn restore(&mut self, camera: Camera) -> Camera {
        self.set_scale(camera.zoom);
        if camera.pan_x.is_finite() {
            self.camera.pan_x = camera.pan_x;
        }
        if camera.pan_y.is_finite() {
            self.camera.pan_y = camera.pan_y;
        }
        self.camera
    }
}

/// Scale that fits `content + 2 * padding` into `available`; unbounded when the
/// padded extent is empty.
fn axis_fit(available: f64, content: f64, padding: f64) -> f64 {
    let extent = content + 2.0 * padding;
    if extent > 0.0 { available / extent } else { f64::INFINITY }
}
