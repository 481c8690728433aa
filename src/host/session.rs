//! Session facade: owns the surface, the command buffer and the stopwatch,
//! and executes host operations against them.

use super::args::Call;
use super::catalog::Operation;
use super::timer::{Stopwatch, format_elapsed};
use crate::config::Config;
use crate::draw::{Canvas, CommandBuffer, DrawingDefaults, FontDescriptor, Instruction, replay};
use crate::error::GfxError;
use crate::surface::{MouseButton, PaintHandler, Surface, SurfaceBackend, SurfaceSpec};
use crate::value::Value;
use log::{debug, error, info, warn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Smallest accepted surface width and height, in pixels.
pub const MIN_SURFACE_SIZE: i32 = 16;

/// Per-session settings fixed when the session is created.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    /// Pen/brush state each replay pass starts from
    pub defaults: DrawingDefaults,
    /// Font used by every text instruction
    pub font: FontDescriptor,
    /// Title used when `Init` is given an empty one
    pub default_title: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl SessionSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            defaults: config.drawing_defaults(),
            font: config.font(),
            default_title: config.surface.default_title.clone(),
        }
    }
}

/// A drawing session bound to one surface backend.
///
/// Operations are recorded into a command buffer and only drawn when the
/// surface repaints, either because of `Paint` or because the windowing layer
/// decided to redraw. A session and its surface live on one thread.
pub struct Session<B: SurfaceBackend> {
    backend: B,
    surface: Option<Box<dyn Surface>>,
    buffer: Rc<RefCell<CommandBuffer>>,
    settings: SessionSettings,
    timer: Option<Stopwatch>,
}

impl<B: SurfaceBackend> Session<B> {
    /// Creates a session with no active surface.
    pub fn new(backend: B, settings: SessionSettings) -> Self {
        Self {
            backend,
            surface: None,
            buffer: Rc::new(RefCell::new(CommandBuffer::new())),
            settings,
            timer: None,
        }
    }

    /// Calls the operation named `name` with positional `args`.
    ///
    /// Unknown names and unmet preconditions return `Ok(Value::Bool(false))`.
    ///
    /// # Errors
    /// Returns an error for argument lists that do not match the operation's
    /// signature, malformed polygon vertices and invalid elapsed-time formats.
    /// The session is left unchanged in every error case.
    pub fn invoke(&mut self, name: &str, args: &[Value]) -> Result<Value, GfxError> {
        match Operation::from_host_name(name) {
            Some(op) => self.invoke_op(op, args),
            None => {
                warn!("Unhandled operation '{}'", name);
                Ok(Value::Bool(false))
            }
        }
    }

    /// Calls a resolved operation. See [`Session::invoke`].
    pub fn invoke_op(&mut self, op: Operation, args: &[Value]) -> Result<Value, GfxError> {
        if op.requires_surface() && self.surface.is_none() {
            debug!("{} ignored: no active surface", op.host_name());
            return Ok(Value::Bool(false));
        }

        let call = Call::decode(op, args)?;
        self.execute(call)
    }

    fn execute(&mut self, call: Call) -> Result<Value, GfxError> {
        let result = match call {
            Call::Init {
                width,
                height,
                title,
            } => Value::Bool(self.init(width, height, &title)),
            Call::Close => Value::Bool(self.close()),
            Call::Clear => {
                self.buffer.borrow_mut().clear();
                Value::Bool(true)
            }
            Call::Record(instruction) => {
                self.record(instruction);
                Value::Bool(true)
            }
            Call::MousePosition => match &self.surface {
                Some(surface) => {
                    let (x, y) = surface.pointer_position();
                    Value::List(vec![Value::Int(x), Value::Int(y)])
                }
                None => Value::Bool(false),
            },
            Call::MouseButton(name) => Value::Bool(self.button_pressed(&name)),
            Call::TimerStart => {
                self.timer.get_or_insert_with(Stopwatch::new).start();
                Value::Bool(true)
            }
            Call::TimerReset => {
                self.timer.get_or_insert_with(Stopwatch::new).reset();
                Value::Bool(true)
            }
            Call::TimerStop => {
                let stopped = self.timer.as_mut().is_some_and(Stopwatch::stop);
                if !stopped {
                    debug!("Timer stop ignored: timer not running");
                }
                Value::Bool(stopped)
            }
            Call::ElapsedTime(format) => {
                let elapsed = self
                    .timer
                    .as_ref()
                    .map_or(Duration::ZERO, Stopwatch::elapsed);
                Value::Str(format_elapsed(&format, elapsed)?)
            }
            Call::Paint => {
                self.paint();
                Value::Nil
            }
        };
        Ok(result)
    }

    fn init(&mut self, width: i32, height: i32, title: &str) -> bool {
        if self.surface.is_some() {
            warn!("Init rejected: a surface is already active");
            return false;
        }
        if width < MIN_SURFACE_SIZE || height < MIN_SURFACE_SIZE {
            warn!(
                "Init rejected: {}x{} is below the {}x{} minimum",
                width, height, MIN_SURFACE_SIZE, MIN_SURFACE_SIZE
            );
            return false;
        }

        let spec = SurfaceSpec {
            width,
            height,
            title: if title.is_empty() {
                self.settings.default_title.clone()
            } else {
                title.to_string()
            },
        };

        let mut surface = match self.backend.create(&spec, self.paint_handler()) {
            Ok(surface) => surface,
            Err(err) => {
                error!("Failed to create surface '{}': {}", spec.title, err);
                return false;
            }
        };

        if let Err(err) = surface.show() {
            error!("Failed to show surface '{}': {}", spec.title, err);
            surface.destroy();
            return false;
        }

        self.buffer.borrow_mut().clear();
        surface.invalidate();
        self.surface = Some(surface);

        info!("Surface '{}' active ({}x{})", spec.title, width, height);
        true
    }

    fn close(&mut self) -> bool {
        self.buffer.borrow_mut().clear();
        if let Some(mut surface) = self.surface.take() {
            surface.destroy();
            info!("Surface closed");
        }
        true
    }

    fn record(&mut self, instruction: Instruction) {
        debug!("Recorded {}", instruction.tag());
        self.buffer.borrow_mut().append(instruction);
    }

    fn button_pressed(&self, name: &str) -> bool {
        let Some(surface) = &self.surface else {
            return false;
        };
        match MouseButton::from_name(name) {
            Some(button) => surface.button_pressed(button),
            None => {
                debug!("Unknown mouse button '{}'", name);
                false
            }
        }
    }

    fn paint(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.invalidate();
        }
    }

    /// Builds the repaint callback installed on each new surface.
    fn paint_handler(&self) -> PaintHandler {
        let buffer = Rc::clone(&self.buffer);
        let defaults = self.settings.defaults;
        let font = self.settings.font.clone();

        Box::new(move |canvas: &mut dyn Canvas| match buffer.try_borrow() {
            Ok(buffer) => {
                replay(buffer.snapshot(), defaults, &font, canvas);
            }
            Err(_) => warn!("Repaint skipped: command buffer is being modified"),
        })
    }

    /// Whether a surface is currently active.
    pub fn is_active(&self) -> bool {
        self.surface.is_some()
    }

    /// Copy of the recorded instructions, in call order.
    pub fn instructions(&self) -> Vec<Instruction> {
        self.buffer.borrow().snapshot().to_vec()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: SurfaceBackend> Drop for Session<B> {
    fn drop(&mut self) {
        if let Some(mut surface) = self.surface.take() {
            surface.destroy();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{DrawCall, RecordingCanvas};
    use crate::draw::{Bounds, Pen, Rgb};
    use crate::surface::SurfaceError;
    use std::cell::Cell;

    type Frames = Rc<RefCell<Vec<Vec<DrawCall>>>>;

    /// Backend whose surfaces record every repaint as a list of draw calls.
    #[derive(Default)]
    struct RecordingBackend {
        frames: Frames,
        created: Rc<Cell<usize>>,
        fail_create: bool,
    }

    struct RecordingSurface {
        frames: Frames,
        on_paint: PaintHandler,
    }

    impl Surface for RecordingSurface {
        fn show(&mut self) -> Result<(), SurfaceError> {
            Ok(())
        }

        fn invalidate(&mut self) {
            let mut canvas = RecordingCanvas::new();
            (self.on_paint)(&mut canvas);
            self.frames.borrow_mut().push(canvas.calls);
        }

        fn pointer_position(&self) -> (i32, i32) {
            (12, 34)
        }

        fn button_pressed(&self, button: MouseButton) -> bool {
            button == MouseButton::Left
        }

        fn destroy(&mut self) {}
    }

    impl SurfaceBackend for RecordingBackend {
        fn create(
            &mut self,
            _spec: &SurfaceSpec,
            on_paint: PaintHandler,
        ) -> Result<Box<dyn Surface>, SurfaceError> {
            if self.fail_create {
                return Err(SurfaceError::NotCreated);
            }
            self.created.set(self.created.get() + 1);
            Ok(Box::new(RecordingSurface {
                frames: Rc::clone(&self.frames),
                on_paint,
            }))
        }
    }

    fn session() -> Session<RecordingBackend> {
        Session::new(RecordingBackend::default(), SessionSettings::default())
    }

    fn ints(values: &[i32]) -> Vec<Value> {
        values.iter().copied().map(Value::Int).collect()
    }

    fn init(session: &mut Session<RecordingBackend>) {
        let args = vec![Value::Int(320), Value::Int(200), Value::from("test")];
        assert_eq!(session.invoke("Gfx_Init", &args).unwrap(), Value::Bool(true));
    }

    fn last_frame(session: &Session<RecordingBackend>) -> Vec<DrawCall> {
        session
            .backend()
            .frames
            .borrow()
            .last()
            .cloned()
            .unwrap_or_default()
    }

    #[test]
    fn init_rejects_small_surfaces() {
        let mut session = session();
        let args = vec![Value::Int(10), Value::Int(10), Value::from("x")];
        assert_eq!(session.invoke("Gfx_Init", &args).unwrap(), Value::Bool(false));
        assert!(!session.is_active());

        let args = vec![Value::Int(16), Value::Int(15), Value::from("x")];
        assert_eq!(session.invoke("Gfx_Init", &args).unwrap(), Value::Bool(false));
        assert_eq!(session.backend().created.get(), 0);
    }

    #[test]
    fn second_init_fails_while_active() {
        let mut session = session();
        init(&mut session);
        let args = vec![Value::Int(64), Value::Int(64), Value::from("again")];
        assert_eq!(session.invoke("Gfx_Init", &args).unwrap(), Value::Bool(false));
        assert_eq!(session.backend().created.get(), 1);
    }

    #[test]
    fn failed_creation_leaves_surface_absent() {
        let backend = RecordingBackend {
            fail_create: true,
            ..Default::default()
        };
        let mut session = Session::new(backend, SessionSettings::default());
        let args = vec![Value::Int(64), Value::Int(64), Value::from("")];
        assert_eq!(session.invoke("Gfx_Init", &args).unwrap(), Value::Bool(false));
        assert!(!session.is_active());
    }

    #[test]
    fn drawing_requires_active_surface() {
        let mut session = session();
        let result = session.invoke("Gfx_DrawLine", &ints(&[0, 0, 5, 5])).unwrap();
        assert_eq!(result, Value::Bool(false));
        assert_eq!(session.invoke("Gfx_Clear", &[]).unwrap(), Value::Bool(false));
        assert_eq!(
            session.invoke("Gfx_MousePosition", &[]).unwrap(),
            Value::Bool(false)
        );
        assert!(session.instructions().is_empty());
    }

    #[test]
    fn precondition_checked_before_arguments() {
        let mut session = session();
        // Malformed polygon, but no surface: plain false like any other call
        let args = vec![Value::from(vec![vec![1, 2, 3]])];
        assert_eq!(
            session.invoke("Gfx_FillPolygon", &args).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn default_pen_applies_before_any_colour() {
        let mut session = session();
        init(&mut session);
        session.invoke("Gfx_DrawLine", &ints(&[0, 0, 10, 10])).unwrap();
        session.invoke("Gfx_Paint", &[]).unwrap();

        assert_eq!(
            last_frame(&session),
            vec![DrawCall::Line {
                pen: Pen {
                    color: Rgb::new(0, 0, 0),
                    width: 1
                },
                x1: 0,
                y1: 0,
                x2: 10,
                y2: 10,
            }]
        );
    }

    #[test]
    fn nothing_is_drawn_until_paint() {
        let mut session = session();
        init(&mut session);
        let frames_after_init = session.backend().frames.borrow().len();

        session.invoke("Gfx_FillRectangle", &ints(&[0, 0, 4, 4])).unwrap();
        assert_eq!(session.backend().frames.borrow().len(), frames_after_init);

        session.invoke("Gfx_Paint", &[]).unwrap();
        assert_eq!(session.backend().frames.borrow().len(), frames_after_init + 1);
        assert_eq!(last_frame(&session).len(), 1);
    }

    #[test]
    fn clear_then_paint_gives_empty_frame() {
        let mut session = session();
        init(&mut session);
        session.invoke("Gfx_SetColour", &ints(&[255, 0, 0])).unwrap();
        session.invoke("Gfx_FillEllipse", &ints(&[0, 0, 8, 8])).unwrap();
        assert_eq!(session.invoke("Gfx_Clear", &[]).unwrap(), Value::Bool(true));
        assert_eq!(session.invoke("Gfx_Paint", &[]).unwrap(), Value::Nil);
        assert!(last_frame(&session).is_empty());
    }

    #[test]
    fn repeated_paints_are_identical() {
        let mut session = session();
        init(&mut session);
        session.invoke("Gfx_SetColour", &ints(&[0, 0, 255])).unwrap();
        session.invoke("Gfx_DrawRectangle", &ints(&[1, 2, 3, 4])).unwrap();
        session
            .invoke("Gfx_DrawString", &[Value::Int(5), Value::Int(6), Value::from("hi")])
            .unwrap();

        session.invoke("Gfx_Paint", &[]).unwrap();
        let first = last_frame(&session);
        session.invoke("Gfx_Paint", &[]).unwrap();
        let second = last_frame(&session);

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
        assert_eq!(session.instructions().len(), 3);
    }

    #[test]
    fn malformed_polygon_is_an_error_and_records_nothing() {
        let mut session = session();
        init(&mut session);
        let args = vec![Value::from(vec![vec![0, 0], vec![1]])];
        assert!(matches!(
            session.invoke("Gfx_DrawPolygon", &args),
            Err(GfxError::MalformedGeometry { index: 1, .. })
        ));
        assert!(session.instructions().is_empty());
    }

    #[test]
    fn polygon_is_recorded_in_order() {
        let mut session = session();
        init(&mut session);
        let args = vec![Value::from(vec![vec![0, 0], vec![10, 0], vec![5, 10]])];
        assert_eq!(
            session.invoke("Gfx_FillPolygon", &args).unwrap(),
            Value::Bool(true)
        );
        match &session.instructions()[..] {
            [Instruction::FillPolygon { points }] => assert_eq!(points.len(), 3),
            other => panic!("unexpected instructions {other:?}"),
        }
    }

    #[test]
    fn close_clears_buffer_and_is_idempotent() {
        let mut session = session();
        init(&mut session);
        session.invoke("Gfx_FillRectangle", &ints(&[0, 0, 4, 4])).unwrap();
        assert_eq!(session.invoke("Gfx_Close", &[]).unwrap(), Value::Bool(true));
        assert!(!session.is_active());
        assert!(session.instructions().is_empty());
        assert_eq!(session.invoke("Gfx_Close", &[]).unwrap(), Value::Bool(true));

        // A new surface can be opened after closing
        init(&mut session);
        assert_eq!(session.backend().created.get(), 2);
    }

    #[test]
    fn init_resets_buffer() {
        let mut session = session();
        init(&mut session);
        session.invoke("Gfx_DrawEllipse", &ints(&[0, 0, 4, 4])).unwrap();
        session.invoke("Gfx_Close", &[]).unwrap();
        init(&mut session);
        session.invoke("Gfx_Paint", &[]).unwrap();
        assert!(last_frame(&session).is_empty());
    }

    #[test]
    fn mouse_queries_delegate_to_surface() {
        let mut session = session();
        init(&mut session);
        assert_eq!(
            session.invoke("Gfx_MousePosition", &[]).unwrap(),
            Value::List(vec![Value::Int(12), Value::Int(34)])
        );
        assert_eq!(
            session.invoke("Gfx_MouseClick", &[Value::from("left")]).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            session.invoke("Gfx_MouseClick", &[Value::from("right")]).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            session.invoke("Gfx_MouseClick", &[Value::from("thumb")]).unwrap(),
            Value::Bool(false)
        );
    }

    #[test]
    fn unknown_operation_is_unhandled() {
        let mut session = session();
        assert_eq!(session.invoke("Gfx_Undo", &[]).unwrap(), Value::Bool(false));
    }

    #[test]
    fn argument_mismatch_is_reported() {
        let mut session = session();
        init(&mut session);
        assert!(matches!(
            session.invoke("Gfx_SetColour", &ints(&[1, 2])),
            Err(GfxError::ArgumentCount { .. })
        ));
        assert!(matches!(
            session.invoke("Gfx_SetLineWidth", &[Value::from("wide")]),
            Err(GfxError::ArgumentKind { .. })
        ));
    }

    #[test]
    fn timer_ops_work_without_surface() {
        let mut session = session();
        assert_eq!(session.invoke("Gfx_StopTimer", &[]).unwrap(), Value::Bool(false));
        assert_eq!(
            session.invoke("Gfx_ElapsedTime", &[Value::from("{2}.{3}")]).unwrap(),
            Value::from("0.0")
        );
        assert_eq!(session.invoke("Gfx_StartTimer", &[]).unwrap(), Value::Bool(true));
        assert_eq!(session.invoke("Gfx_StopTimer", &[]).unwrap(), Value::Bool(true));
        assert_eq!(session.invoke("Gfx_ResetTimer", &[]).unwrap(), Value::Bool(true));
        assert!(session.invoke("Gfx_ElapsedTime", &[Value::from("{9}")]).is_err());
    }

    #[test]
    fn settings_follow_config() {
        let mut config = Config::default();
        config.drawing.line_width = 5;
        config.surface.default_title = "Board".to_string();
        let mut session = Session::new(
            RecordingBackend::default(),
            SessionSettings::from_config(&config),
        );
        assert_eq!(session.settings().defaults.line_width, 5);
        assert_eq!(session.settings().default_title, "Board");

        init(&mut session);
        session.invoke("Gfx_DrawLine", &ints(&[0, 0, 1, 1])).unwrap();
        session.invoke("Gfx_Paint", &[]).unwrap();
        match &last_frame(&session)[..] {
            [DrawCall::Line { pen, .. }] => assert_eq!(pen.width, 5),
            other => panic!("unexpected frame {other:?}"),
        }
    }

    #[test]
    fn failed_elapsed_format_leaves_timer_absent() {
        let mut session = session();
        assert!(session.invoke("Gfx_ElapsedTime", &[Value::from("{7}")]).is_err());
        assert!(session.timer.is_none());
        assert_eq!(session.invoke("Gfx_StopTimer", &[]).unwrap(), Value::Bool(false));
    }

    #[test]
    fn paint_without_surface_is_noop() {
        let mut session = session();
        assert_eq!(session.invoke("Gfx_Paint", &[]).unwrap(), Value::Nil);
        assert!(session.backend().frames.borrow().is_empty());
    }

    #[test]
    fn fill_and_stroke_share_colour() {
        let mut session = session();
        init(&mut session);
        session.invoke("Gfx_SetColour", &ints(&[1, 2, 3])).unwrap();
        session.invoke("Gfx_SetLineWidth", &ints(&[7])).unwrap();
        session.invoke("Gfx_DrawRectangle", &ints(&[0, 0, 2, 2])).unwrap();
        session.invoke("Gfx_FillRectangle", &ints(&[0, 0, 2, 2])).unwrap();
        session.invoke("Gfx_Paint", &[]).unwrap();

        match &last_frame(&session)[..] {
            [DrawCall::Rect { pen, .. }, DrawCall::FillRect { brush, bounds }] => {
                assert_eq!(pen.color, Rgb::new(1, 2, 3));
                assert_eq!(pen.width, 7);
                assert_eq!(brush.color, Rgb::new(1, 2, 3));
                assert_eq!(*bounds, Bounds::new(0, 0, 2, 2));
            }
            other => panic!("unexpected frame {other:?}"),
        }
    }
}
