//! Headless surface backend rendering into Cairo image surfaces.
//!
//! Each [`ImageWindow`] owns an ARGB32 image of the requested size. A repaint
//! clears it to the background colour and runs the session's paint handler
//! synchronously. Pointer input comes from a shared [`PointerState`] that the
//! embedding host updates.

use super::{MouseButton, PaintHandler, Surface, SurfaceBackend, SurfaceError, SurfaceSpec};
use crate::draw::{CairoCanvas, Rgb, WHITE, fill_background};
use log::{debug, error, info};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::path::Path;
use std::rc::Rc;

/// Pointer input fed to headless windows by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerState {
    /// Position relative to the window's client area
    pub position: (i32, i32),
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl PointerState {
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Right => self.right,
            MouseButton::Middle => self.middle,
        }
    }
}

/// Creates [`ImageWindow`]s and keeps a handle to the most recent one's pixels.
pub struct ImageBackend {
    background: Rgb,
    pointer: Rc<RefCell<PointerState>>,
    last_frame: Option<cairo::ImageSurface>,
    paints: Rc<Cell<usize>>,
}

impl Default for ImageBackend {
    fn default() -> Self {
        Self::new(Rgb::from(WHITE))
    }
}

impl ImageBackend {
    /// Creates a backend whose windows clear to `background` before each paint.
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            pointer: Rc::new(RefCell::new(PointerState::default())),
            last_frame: None,
            paints: Rc::new(Cell::new(0)),
        }
    }

    /// Shared pointer input seen by every window this backend creates.
    pub fn pointer(&self) -> Rc<RefCell<PointerState>> {
        Rc::clone(&self.pointer)
    }

    /// Number of completed repaints across every window this backend created.
    pub fn paint_count(&self) -> usize {
        self.paints.get()
    }

    /// Returns an exclusive copy of the most recently created window's pixels.
    ///
    /// # Errors
    /// Returns [`SurfaceError::NotCreated`] if no window was ever created.
    pub fn snapshot(&self) -> Result<cairo::ImageSurface, SurfaceError> {
        let frame = self.last_frame.as_ref().ok_or(SurfaceError::NotCreated)?;
        let copy = cairo::ImageSurface::create(cairo::Format::ARgb32, frame.width(), frame.height())?;
        {
            let ctx = cairo::Context::new(&copy)?;
            ctx.set_source_surface(frame, 0.0, 0.0)?;
            ctx.set_operator(cairo::Operator::Source);
            ctx.paint()?;
        }
        copy.flush();
        Ok(copy)
    }

    /// Writes the most recently created window's pixels to a PNG file.
    ///
    /// The frame outlives its window, so this works after the session closed.
    ///
    /// # Errors
    /// Returns an error if no window was created or the file cannot be written.
    pub fn write_png(&self, path: &Path) -> Result<(), SurfaceError> {
        let frame = self.last_frame.as_ref().ok_or(SurfaceError::NotCreated)?;
        let mut file = File::create(path)?;
        frame
            .write_to_png(&mut file)
            .map_err(|e| SurfaceError::Png(e.to_string()))?;
        info!("Wrote frame to {}", path.display());
        Ok(())
    }
}

impl SurfaceBackend for ImageBackend {
    fn create(
        &mut self,
        spec: &SurfaceSpec,
        on_paint: PaintHandler,
    ) -> Result<Box<dyn Surface>, SurfaceError> {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, spec.width, spec.height)?;
        info!(
            "Created image surface '{}' ({}x{})",
            spec.title, spec.width, spec.height
        );
        self.last_frame = Some(image.clone());

        Ok(Box::new(ImageWindow {
            image,
            title: spec.title.clone(),
            background: self.background,
            pointer: Rc::clone(&self.pointer),
            on_paint,
            visible: false,
            destroyed: false,
            paints: Rc::clone(&self.paints),
        }))
    }
}

/// A headless window: an image surface plus the installed paint handler.
pub struct ImageWindow {
    image: cairo::ImageSurface,
    title: String,
    background: Rgb,
    pointer: Rc<RefCell<PointerState>>,
    on_paint: PaintHandler,
    visible: bool,
    destroyed: bool,
    paints: Rc<Cell<usize>>,
}

impl ImageWindow {
    fn repaint(&mut self) -> Result<(), SurfaceError> {
        {
            let ctx = cairo::Context::new(&self.image)?;
            fill_background(&ctx, self.background);
            let mut canvas = CairoCanvas::new(&ctx);
            (self.on_paint)(&mut canvas);
        }
        self.image.flush();
        self.paints.set(self.paints.get() + 1);
        debug!("Repainted '{}' (paint #{})", self.title, self.paints.get());
        Ok(())
    }
}

impl Surface for ImageWindow {
    fn show(&mut self) -> Result<(), SurfaceError> {
        if self.destroyed {
            return Err(SurfaceError::NotCreated);
        }
        self.visible = true;
        Ok(())
    }

    fn invalidate(&mut self) {
        if self.destroyed || !self.visible {
            return;
        }
        if let Err(err) = self.repaint() {
            error!("Repaint of '{}' failed: {}", self.title, err);
        }
    }

    fn pointer_position(&self) -> (i32, i32) {
        self.pointer.borrow().position
    }

    fn button_pressed(&self, button: MouseButton) -> bool {
        self.pointer.borrow().is_pressed(button)
    }

    fn destroy(&mut self) {
        if !self.destroyed {
            info!("Destroyed image surface '{}'", self.title);
        }
        self.destroyed = true;
        self.visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Bounds, Brush, Canvas};
    use std::cell::Cell;

    fn spec() -> SurfaceSpec {
        SurfaceSpec {
            width: 32,
            height: 24,
            title: "test".to_string(),
        }
    }

    #[test]
    fn invalidate_runs_handler_only_while_visible() {
        let mut backend = ImageBackend::default();
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let mut window = backend
            .create(&spec(), Box::new(move |_: &mut dyn Canvas| counter.set(counter.get() + 1)))
            .unwrap();

        window.invalidate();
        assert_eq!(runs.get(), 0);

        window.show().unwrap();
        window.invalidate();
        window.invalidate();
        assert_eq!(runs.get(), 2);

        window.destroy();
        window.invalidate();
        assert_eq!(runs.get(), 2);
        assert_eq!(backend.paint_count(), 2);
    }

    #[test]
    fn snapshot_contains_background_and_drawing() {
        let mut backend = ImageBackend::new(Rgb::new(0, 0, 255));
        let mut window = backend
            .create(
                &spec(),
                Box::new(|canvas: &mut dyn Canvas| {
                    canvas.fill_rect(
                        &Brush {
                            color: Rgb::new(255, 0, 0),
                        },
                        Bounds::new(0, 0, 4, 4),
                    );
                }),
            )
            .unwrap();
        window.show().unwrap();
        window.invalidate();

        let mut copy = backend.snapshot().unwrap();
        assert_eq!((copy.width(), copy.height()), (32, 24));
        let stride = copy.stride() as usize;
        let data = copy.data().unwrap();
        // Little-endian ARGB32: B, G, R, A
        assert_eq!(&data[0..4], &[0, 0, 255, 255]);
        let far = 20 * stride + 20 * 4;
        assert_eq!(&data[far..far + 4], &[255, 0, 0, 255]);
    }

    #[test]
    fn pointer_state_is_shared_with_windows() {
        let mut backend = ImageBackend::default();
        let window = backend.create(&spec(), Box::new(|_: &mut dyn Canvas| {})).unwrap();

        {
            let pointer = backend.pointer();
            let mut pointer = pointer.borrow_mut();
            pointer.position = (7, 9);
            pointer.right = true;
        }

        assert_eq!(window.pointer_position(), (7, 9));
        assert!(window.button_pressed(MouseButton::Right));
        assert!(!window.button_pressed(MouseButton::Left));
    }

    #[test]
    fn snapshot_without_window_fails() {
        let backend = ImageBackend::default();
        assert!(matches!(backend.snapshot(), Err(SurfaceError::NotCreated)));
    }
}
