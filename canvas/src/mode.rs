//! Interaction modes: one pointer handler per tool family.
//!
//! The engine picks an [`InteractionMode`] from the active [`Tool`] and hands
//! it pointer events that are not already claimed by a camera pan. Camera
//! pans started by the middle button or by space+drag are handled by the
//! engine before a mode is consulted, so every mode gets them for free.

#[cfg(test)]
#[path = "mode_test.rs"]
mod mode_test;

use crate::camera::Point;
use crate::consts::{CURSOR_CROSSHAIR, CURSOR_DEFAULT, CURSOR_GRAB};
use crate::engine::{Action, EngineCore};
use crate::input::{Button, InputState, PointerPhase, Tool};

/// Pointer handling for one interaction mode.
pub trait PointerHandler {
    fn on_pointer_down(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action>;
    fn on_pointer_move(&self, core: &mut EngineCore, screen: Point) -> Vec<Action>;
    fn on_pointer_up(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action>;
    /// Cursor shown while this mode is idle.
    fn cursor(&self) -> &'static str;
}

/// Selection: presses and drags go to the scene host unsnapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectMode;

/// Hand: primary drags pan the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandMode;

/// Content creation: presses and drags go to the scene host snapped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateMode {
    pub tool: Tool,
}

/// The mode dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Select(SelectMode),
    Hand(HandMode),
    Create(CreateMode),
}

impl InteractionMode {
    #[must_use]
    pub fn for_tool(tool: Tool) -> Self {
        match tool {
            Tool::Select => Self::Select(SelectMode),
            Tool::Hand => Self::Hand(HandMode),
            Tool::Draw | Tool::Rect | Tool::Text => Self::Create(CreateMode { tool }),
        }
    }

    fn handler(&self) -> &dyn PointerHandler {
        match self {
            Self::Select(m) => m,
            Self::Hand(m) => m,
            Self::Create(m) => m,
        }
    }
}

impl PointerHandler for InteractionMode {
    fn on_pointer_down(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        self.handler().on_pointer_down(core, screen, button)
    }

    fn on_pointer_move(&self, core: &mut EngineCore, screen: Point) -> Vec<Action> {
        self.handler().on_pointer_move(core, screen)
    }

    fn on_pointer_up(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        self.handler().on_pointer_up(core, screen, button)
    }

    fn cursor(&self) -> &'static str {
        self.handler().cursor()
    }
}

// --- Scene forwarding shared by select and create ---

fn forward_down(core: &mut EngineCore, world: Point, button: Button, tool: Tool) -> Vec<Action> {
    if button != Button::Primary {
        return Vec::new();
    }
    core.input = InputState::Dragging { start_world: world };
    vec![Action::ScenePointer { phase: PointerPhase::Down, world, tool }]
}

fn forward_move(core: &EngineCore, world: Point, tool: Tool) -> Vec<Action> {
    if !matches!(core.input, InputState::Dragging { .. }) {
        return Vec::new();
    }
    vec![Action::ScenePointer { phase: PointerPhase::Move, world, tool }]
}

fn forward_up(core: &mut EngineCore, world: Point, button: Button, tool: Tool) -> Vec<Action> {
    if button != Button::Primary || !matches!(core.input, InputState::Dragging { .. }) {
        return Vec::new();
    }
    core.input = InputState::Idle;
    vec![Action::ScenePointer { phase: PointerPhase::Up, world, tool }]
}

impl PointerHandler for SelectMode {
    fn on_pointer_down(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        let world = core.camera().screen_to_world(screen);
        forward_down(core, world, button, Tool::Select)
    }

    fn on_pointer_move(&self, core: &mut EngineCore, screen: Point) -> Vec<Action> {
        let world = core.camera().screen_to_world(screen);
        forward_move(core, world, Tool::Select)
    }

    fn on_pointer_up(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        let world = core.camera().screen_to_world(screen);
        forward_up(core, world, button, Tool::Select)
    }

    fn cursor(&self) -> &'static str {
        CURSOR_DEFAULT
    }
}

impl PointerHandler for HandMode {
    fn on_pointer_down(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        core.start_pan(screen, button)
    }

    // Moves and releases of a hand pan are routed by the engine while
    // `InputState::Panning` is active; anything reaching here is a hover.
    fn on_pointer_move(&self, _core: &mut EngineCore, _screen: Point) -> Vec<Action> {
        Vec::new()
    }

    fn on_pointer_up(&self, _core: &mut EngineCore, _screen: Point, _button: Button) -> Vec<Action> {
        Vec::new()
    }

    fn cursor(&self) -> &'static str {
        CURSOR_GRAB
    }
}

impl PointerHandler for CreateMode {
    fn on_pointer_down(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        let world = core.snapped_world(screen);
        forward_down(core, world, button, self.tool)
    }

    fn on_pointer_move(&self, core: &mut EngineCore, screen: Point) -> Vec<Action> {
        let world = core.snapped_world(screen);
        forward_move(core, world, self.tool)
    }

    fn on_pointer_up(&self, core: &mut EngineCore, screen: Point, button: Button) -> Vec<Action> {
        let world = core.snapped_world(screen);
        forward_up(core, world, button, self.tool)
    }

    fn cursor(&self) -> &'static str {
        CURSOR_CROSSHAIR
    }
}
