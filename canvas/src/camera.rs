#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Whether both coordinates are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point { x: (self.x + other.x) * 0.5, y: (self.y + other.y) * 0.5 }
    }
}

/// An axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle containing every rect in `rects`, or `None` if empty.
    #[must_use]
    pub fn union_all(rects: &[Rect]) -> Option<Rect> {
        let first = rects.first()?;
        let mut min_x = first.x;
        let mut min_y = first.y;
        let mut max_x = first.x + first.width;
        let mut max_y = first.y + first.height;
        for r in &rects[1..] {
            min_x = min_x.min(r.x);
            min_y = min_y.min(r.y);
            max_x = max_x.max(r.x + r.width);
            max_y = max_y.max(r.y + r.height);
        }
        Some(Rect { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y })
    }

    /// Whether all four fields are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Camera state for pan/zoom on the infinite canvas.
///
/// `pan_x` / `pan_y` are in CSS pixels and applied after scaling.
/// `zoom` is a scale factor (1.0 = no zoom).
///
/// Serialized as the flat object `{"scale", "panX", "panY"}` used by the
/// persistence layer. Missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    #[serde(rename = "panX")]
    pub pan_x: f64,
    #[serde(rename = "panY")]
    pub pan_y: f64,
    #[serde(rename = "scale")]
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pan_x: 0.0, pan_y: 0.0, zoom: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.pan_x) / self.zoom,
            y: (screen.y - self.pan_y) / self.zoom,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.zoom + self.pan_x,
            y: world.y * self.zoom + self.pan_y,
        }
    }

    /// Convert a screen-space distance (pixels) to world-space distance.
    #[must_use]
    pub fn screen_dist_to_world(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// The world-space rectangle visible in a viewport of the given CSS size.
    #[must_use]
    pub fn visible_world_rect(&self, viewport_width: f64, viewport_height: f64) -> Rect {
        let top_left = self.screen_to_world(Point::new(0.0, 0.0));
        Rect {
            x: top_left.x,
            y: top_left.y,
            width: self.screen_dist_to_world(viewport_width),
            height: self.screen_dist_to_world(viewport_height),
        }
    }

    /// CSS transform string for a DOM-based scene host.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan_x, self.pan_y, self.zoom)
    }

    /// 2D affine matrix `[a, b, c, d, e, f]` as taken by `setTransform`.
    #[must_use]
    pub fn matrix(&self) -> [f64; 6] {
        [self.zoom, 0.0, 0.0, self.zoom, self.pan_x, self.pan_y]
    }

    /// Zoom as a whole-number percentage for display.
    #[must_use]
    pub fn zoom_percent(&self) -> f64 {
        (self.zoom * 100.0).round()
    }
}
