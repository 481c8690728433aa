//! Boundary with the windowing layer.
//!
//! The core never creates windows itself. A [`SurfaceBackend`] creates a
//! [`Surface`] on request and receives the [`PaintHandler`] the session wants
//! run whenever the surface repaints. The handler is the only path from the
//! surface back into the command buffer.

pub mod image;

pub use crate::error::SurfaceError;
pub use image::{ImageBackend, ImageWindow, PointerState};

use crate::draw::Canvas;

/// Callback installed at creation time; invoked with a drawable canvas on
/// every repaint of the surface.
pub type PaintHandler = Box<dyn FnMut(&mut dyn Canvas)>;

/// Size and title requested for a new surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceSpec {
    /// Client-area width in pixels
    pub width: i32,
    /// Client-area height in pixels
    pub height: i32,
    pub title: String,
}

/// Physical mouse buttons that can be queried on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Parses the host-facing button name (`left`, `right`, `middle`).
    ///
    /// Matching is exact, like the host contract; anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(MouseButton::Left),
            "right" => Some(MouseButton::Right),
            "middle" => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// An on-screen (or off-screen) drawing target owned by a session.
///
/// All calls happen on the thread that created the surface.
pub trait Surface {
    /// Makes the surface visible. Blocks until it is shown.
    fn show(&mut self) -> Result<(), SurfaceError>;

    /// Requests a repaint; the surface runs its paint handler when it redraws.
    fn invalidate(&mut self);

    /// Pointer position relative to the surface's client area.
    fn pointer_position(&self) -> (i32, i32);

    /// Instantaneous physical state of `button`.
    fn button_pressed(&self, button: MouseButton) -> bool;

    /// Tears the surface down. Further calls are no-ops.
    fn destroy(&mut self);
}

/// Factory for surfaces, implemented by the windowing layer.
pub trait SurfaceBackend {
    /// Creates a surface of the requested size and installs `on_paint`.
    ///
    /// # Errors
    /// Returns an error if the native surface cannot be created.
    fn create(
        &mut self,
        spec: &SurfaceSpec,
        on_paint: PaintHandler,
    ) -> Result<Box<dyn Surface>, SurfaceError>;
}
