//! Viewport and input engine for the infinite whiteboard canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! camera for one canvas view: translating raw DOM input events into pan and
//! zoom changes, mapping between screen and canvas coordinates, snapping to
//! the background grid, and fitting content into the window. Drawable objects,
//! hit-testing and redraw scheduling stay with the host scene library; the
//! engine only hands it a transform and world-space pointer events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`viewport`] | [`viewport::ViewportController`]: clamped zoom, pan, fit |
//! | [`camera`] | Camera value type and coordinate conversions |
//! | [`gesture`] | Pan and pinch gesture trackers |
//! | [`grid`] | Grid settings and snapping |
//! | [`input`] | Input event types and the pointer state machine |
//! | [`mode`] | Per-tool interaction modes |
//! | [`consts`] | Shared numeric constants (zoom limits, steps, grid size) |

pub mod camera;
pub mod consts;
pub mod engine;
pub mod gesture;
pub mod grid;
pub mod input;
pub mod mode;
pub mod viewport;
