use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Rect};
use crate::consts::{CURSOR_GRAB, CURSOR_GRABBING, FIT_PADDING_PX, WHEEL_ZOOM_SPEED};
use crate::gesture::PanGesture;
use crate::grid::GridSettings;
use crate::input::{Button, InputState, Key, Modifiers, PointerPhase, Tool, TouchState, UiState, WheelDelta};
use crate::mode::{InteractionMode, PointerHandler};
use crate::viewport::{ViewportConfig, ViewportController};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The camera changed; the host should redraw.
    RenderNeeded,
    /// The host should switch the canvas cursor.
    SetCursor(String),
    /// A pointer event for the scene host, already mapped to world space.
    ScenePointer { phase: PointerPhase, world: Point, tool: Tool },
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub viewport: ViewportController,
    pub grid: GridSettings,
    pub ui: UiState,
    pub input: InputState,
    pub touch: TouchState,
    /// One-finger pan tracker, separate from the mouse pan held by the viewport.
    touch_pan: PanGesture,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    /// Fractional zoom change per wheel pixel.
    pub wheel_speed: f64,
    /// Screen padding used by [`EngineCore::fit_content`].
    pub fit_padding: f64,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            viewport: ViewportController::default(),
            grid: GridSettings::default(),
            ui: UiState::default(),
            input: InputState::default(),
            touch: TouchState::default(),
            touch_pan: PanGesture::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            wheel_speed: WHEEL_ZOOM_SPEED,
            fit_padding: FIT_PADDING_PX,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ViewportConfig, grid: GridSettings) -> Self {
        Self { viewport: ViewportController::new(config), grid, ..Self::default() }
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    ///
    /// Non-positive or non-finite values are ignored field by field.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        if width_css > 0.0 && width_css.is_finite() {
            self.viewport_width = width_css;
        }
        if height_css > 0.0 && height_css.is_finite() {
            self.viewport_height = height_css;
        }
        if dpr > 0.0 && dpr.is_finite() {
            self.dpr = dpr;
        }
        vec![Action::RenderNeeded]
    }

    /// Screen-space centre of the viewport.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport_width * 0.5, self.viewport_height * 0.5)
    }

    // --- Tool ---

    /// Set the active tool. Any scene drag in progress is abandoned.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        if matches!(self.input, InputState::Dragging { .. }) {
            self.input = InputState::Idle;
        }
        if matches!(self.input, InputState::Panning { .. }) {
            return Vec::new();
        }
        vec![Action::SetCursor(self.idle_cursor().to_owned())]
    }

    /// The interaction mode selected by the active tool.
    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        InteractionMode::for_tool(self.ui.tool)
    }

    fn idle_cursor(&self) -> &'static str {
        if self.ui.space_pressed { CURSOR_GRAB } else { self.mode().cursor() }
    }

    // --- Pointer input ---

    /// A press while another gesture is still open means its release was
    /// lost; that gesture is dropped and the new press starts fresh.
    pub fn on_pointer_down(&mut self, screen: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        if !screen.is_finite() {
            return Vec::new();
        }
        if matches!(self.input, InputState::Panning { .. }) {
            self.viewport.end_pan();
        }
        self.input = InputState::Idle;
        let pans = button == Button::Middle || (button == Button::Primary && self.ui.space_pressed);
        if pans {
            return self.start_pan(screen, button);
        }
        let mode = self.mode();
        mode.on_pointer_down(self, screen, button)
    }

    pub fn on_pointer_move(&mut self, screen: Point, _modifiers: Modifiers) -> Vec<Action> {
        if !screen.is_finite() {
            return Vec::new();
        }
        if matches!(self.input, InputState::Panning { .. }) {
            let before = self.viewport.camera();
            self.viewport.continue_pan(screen);
            return self.render_if_changed(before);
        }
        let mode = self.mode();
        mode.on_pointer_move(self, screen)
    }

    pub fn on_pointer_up(&mut self, screen: Point, button: Button, _modifiers: Modifiers) -> Vec<Action> {
        match self.input {
            InputState::Panning { button: pan_button } => {
                if pan_button != button {
                    return Vec::new();
                }
                self.viewport.end_pan();
                self.input = InputState::Idle;
                vec![Action::SetCursor(self.idle_cursor().to_owned())]
            }
            _ if !screen.is_finite() => Vec::new(),
            _ => {
                let mode = self.mode();
                mode.on_pointer_up(self, screen, button)
            }
        }
    }

    /// Begin a camera pan owned by `button`.
    pub fn start_pan(&mut self, screen: Point, button: Button) -> Vec<Action> {
        self.viewport.begin_pan(screen);
        self.input = InputState::Panning { button };
        vec![Action::SetCursor(CURSOR_GRABBING.to_owned())]
    }

    /// Ctrl/Meta + wheel zooms about the pointer; a plain wheel scrolls the view.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta, modifiers: Modifiers) -> Vec<Action> {
        let before = self.viewport.camera();
        if modifiers.zoom_wheel() {
            self.viewport.zoom_by_wheel(screen, delta.dy, Some(self.wheel_speed));
        } else {
            self.viewport.pan_by(-delta.dx, -delta.dy);
        }
        self.render_if_changed(before)
    }

    // --- Keyboard ---

    pub fn on_key_down(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if key.is_space() {
            if self.ui.space_pressed {
                return Vec::new();
            }
            self.ui.space_pressed = true;
            if matches!(self.input, InputState::Panning { .. }) {
                return Vec::new();
            }
            return vec![Action::SetCursor(CURSOR_GRAB.to_owned())];
        }
        match key.0.as_str() {
            "+" | "=" => self.zoom_in(),
            "-" => self.zoom_out(),
            "0" => self.reset_view(),
            _ => Vec::new(),
        }
    }

    pub fn on_key_up(&mut self, key: Key, _modifiers: Modifiers) -> Vec<Action> {
        if !key.is_space() || !self.ui.space_pressed {
            return Vec::new();
        }
        self.ui.space_pressed = false;
        if matches!(self.input, InputState::Panning { .. }) {
            return Vec::new();
        }
        vec![Action::SetCursor(self.idle_cursor().to_owned())]
    }

    // --- Touch input ---

    /// Touches currently on the surface after a `touchstart`.
    pub fn on_touch_start(&mut self, touches: &[Point]) -> Vec<Action> {
        self.retrack_touches(touches);
        Vec::new()
    }

    /// Touches currently on the surface after a `touchmove`.
    pub fn on_touch_move(&mut self, touches: &[Point]) -> Vec<Action> {
        let before = self.viewport.camera();
        match (self.touch, touches) {
            (TouchState::Panning, [one]) if one.is_finite() => {
                if let Some((dx, dy)) = self.touch_pan.update(*one) {
                    self.viewport.pan_by(dx, dy);
                }
            }
            (TouchState::Pinching, [a, b]) => self.viewport.continue_pinch(*a, *b),
            _ => {}
        }
        self.render_if_changed(before)
    }

    /// Touches still on the surface after a `touchend` / `touchcancel`.
    ///
    /// Lifting one finger of a pinch hands over to a pan from the remaining finger.
    pub fn on_touch_end(&mut self, remaining: &[Point]) -> Vec<Action> {
        self.retrack_touches(remaining);
        Vec::new()
    }

    /// Touch never ends the mouse pan; only the touch trackers are restarted.
    fn retrack_touches(&mut self, touches: &[Point]) {
        self.touch_pan.end();
        self.viewport.end_pinch();
        self.touch = match touches {
            [one] if one.is_finite() => {
                self.touch_pan.begin(*one);
                TouchState::Panning
            }
            [a, b] => {
                self.viewport.begin_pinch(*a, *b);
                TouchState::Pinching
            }
            _ => TouchState::Idle,
        };
    }

    // --- View commands ---

    /// Zoom in one step about the viewport centre.
    pub fn zoom_in(&mut self) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport.zoom_in(self.viewport_center());
        self.render_if_changed(before)
    }

    /// Zoom out one step about the viewport centre.
    pub fn zoom_out(&mut self) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport.zoom_out(self.viewport_center());
        self.render_if_changed(before)
    }

    /// Zoom 100%, no pan. Cancels any pan in progress.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.viewport.reset();
        self.touch = TouchState::Idle;
        self.touch_pan.end();
        if matches!(self.input, InputState::Panning { .. }) {
            self.input = InputState::Idle;
        }
        vec![Action::RenderNeeded]
    }

    /// Fit `bounds` into the current viewport with the configured padding.
    pub fn fit_content(&mut self, bounds: Rect) -> Vec<Action> {
        let before = self.viewport.camera();
        self.viewport
            .fit_to_bounds(bounds, self.viewport_width, self.viewport_height, self.fit_padding);
        self.render_if_changed(before)
    }

    /// Load a persisted camera (clamped into the configured bounds).
    pub fn restore_camera(&mut self, camera: Camera) -> Vec<Action> {
        self.viewport.restore(camera);
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.viewport.camera()
    }

    /// World position under `screen`, snapped to the visible grid when snapping is on.
    ///
    /// The on-screen grid is anchored at the pan offset, so the pan-relative
    /// screen offset is snapped before mapping to world space.
    #[must_use]
    pub fn snapped_world(&self, screen: Point) -> Point {
        let camera = self.camera();
        let offset_x = self.grid.snap(screen.x - camera.pan_x, camera.zoom);
        let offset_y = self.grid.snap(screen.y - camera.pan_y, camera.zoom);
        Point::new(offset_x / camera.zoom, offset_y / camera.zoom)
    }

    fn render_if_changed(&self, before: Camera) -> Vec<Action> {
        if self.viewport.camera() == before { Vec::new() } else { vec![Action::RenderNeeded] }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: ViewportConfig, grid: GridSettings) -> Self {
        Self { canvas, core: EngineCore::with_config(config, grid) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and device pixel ratio, resizing the backing store.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Vec<Action> {
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width(backing_pixels(self.core.viewport_width, self.core.dpr));
        self.canvas.set_height(backing_pixels(self.core.viewport_height, self.core.dpr));
        actions
    }

    // --- Render ---

    /// Apply the camera transform to the canvas 2D context.
    ///
    /// The scene host draws in world coordinates after this call.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let [a, b, c, d, e, f] = self.core.camera().matrix();
        let dpr = self.core.dpr;
        ctx.set_transform(a * dpr, b * dpr, c * dpr, d * dpr, e * dpr, f * dpr)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.core.camera()
    }

    /// CSS transform for DOM-based scene hosts.
    #[must_use]
    pub fn css_transform(&self) -> String {
        self.core.camera().css_transform()
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn backing_pixels(css: f64, dpr: f64) -> u32 {
    (css * dpr).round().max(1.0) as u32
}
