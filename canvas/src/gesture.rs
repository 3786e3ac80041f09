//! Gesture trackers for pan and pinch.
//!
//! Each tracker only remembers its own "last" reference value so that a pan
//! and a pinch can run at the same time without disturbing each other. The
//! trackers compute incremental deltas; applying them to the camera is the
//! job of [`crate::viewport::ViewportController`].

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::camera::Point;

/// Drag-to-pan tracker: `Idle -> Panning -> Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PanGesture {
    last: Option<Point>,
}

impl PanGesture {
    /// Start (or restart) tracking from `screen`.
    pub fn begin(&mut self, screen: Point) {
        self.last = Some(screen);
    }

    /// Record `screen` and return the delta from the previous pointer.
    ///
    /// Returns `None` when no pan is active.
    pub fn update(&mut self, screen: Point) -> Option<(f64, f64)> {
        let last = self.last?;
        self.last = Some(screen);
        Some((screen.x - last.x, screen.y - last.y))
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Last recorded pointer position, if panning.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.last
    }
}

/// One step of a pinch: the zoom ratio and the point to zoom about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchStep {
    /// `new_distance / old_distance`.
    pub ratio: f64,
    /// Screen-space midpoint between the two touches.
    pub center: Point,
}

/// Two-finger pinch tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PinchGesture {
    last_distance: Option<f64>,
}

impl PinchGesture {
    /// Start tracking from the two touch points. Coincident touches are ignored.
    pub fn begin(&mut self, a: Point, b: Point) {
        let distance = a.distance(b);
        self.last_distance = (distance > 0.0 && distance.is_finite()).then_some(distance);
    }

    /// Record the new touch pair and return the zoom step since the last one.
    ///
    /// Returns `None` when no pinch is active or the new distance is degenerate;
    /// a degenerate sample leaves the recorded distance untouched.
    pub fn update(&mut self, a: Point, b: Point) -> Option<PinchStep> {
        let last = self.last_distance?;
        let distance = a.distance(b);
        if !(distance > 0.0 && distance.is_finite()) {
            return None;
        }
        self.last_distance = Some(distance);
        Some(PinchStep { ratio: distance / last, center: a.midpoint(b) })
    }

    pub fn end(&mut self) {
        self.last_distance = None;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_distance.is_some()
    }
}
