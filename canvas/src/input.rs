//! Input model: tools, modifier keys, mouse buttons, touches, and the pointer state machine.
//!
//! This module defines the types consumed by the input engine. `Tool` and
//! `Modifiers` capture the user's intent at the time of a pointer event.
//! `InputState` is the pointer gesture being tracked between pointer-down and
//! pointer-up; the camera-side bookkeeping for a pan lives in the viewport
//! controller, this enum only records which kind of gesture owns the pointer.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Hand tool: every primary drag pans the canvas.
    Hand,
    /// Freehand drawing.
    Draw,
    /// Draw a square / rectangle.
    Rect,
    /// Create a text box.
    Text,
}

impl Tool {
    /// Whether this tool creates scene content (snapped to the grid).
    #[must_use]
    pub fn creates_content(self) -> bool {
        matches!(self, Self::Draw | Self::Rect | Self::Text)
    }
}

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Ctrl or Meta: the wheel zooms instead of scrolling.
    #[must_use]
    pub fn zoom_wheel(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `" "`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_space(&self) -> bool {
        self.0 == " " || self.0 == "Space" || self.0 == "Spacebar"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Phase of a pointer event forwarded to the scene host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Space is held: primary drags pan regardless of tool.
    pub space_pressed: bool,
}

/// Internal state for the pointer state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The pointer is dragging the camera.
    Panning {
        /// Button that started the pan; only its release ends the gesture.
        button: Button,
    },
    /// The pointer is pressed and owned by the scene host (select, draw, resize, ...).
    Dragging {
        /// World-space position of the press.
        start_world: Point,
    },
}

/// State of the touch surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TouchState {
    /// No fingers down (or more than two).
    #[default]
    Idle,
    /// One finger panning.
    Panning,
    /// Two fingers pinching.
    Pinching,
}
