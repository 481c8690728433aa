//! Deferred drawing core: instructions, command buffer, drawing state and replay.
//!
//! This module defines the types the session records and replays:
//! - [`Instruction`]: one recorded drawing or state operation
//! - [`CommandBuffer`]: the ordered list of instructions awaiting a paint
//! - [`DrawingState`]: pen, brush and font reconstructed on every replay
//! - [`replay`]: walks a buffer and issues primitives on a [`Canvas`]
//! - [`CairoCanvas`] / [`RecordingCanvas`]: canvas implementations

pub mod buffer;
pub mod canvas;
pub mod color;
pub mod font;
pub mod geometry;
pub mod instruction;
pub mod recording;
pub mod replay;
pub mod state;

// Re-export commonly used types at module level
pub use buffer::CommandBuffer;
pub use canvas::{CairoCanvas, Canvas, fill_background};
pub use color::{Color, Rgb};
pub use font::FontDescriptor;
pub use geometry::{Bounds, PointF, normalize_points};
pub use instruction::Instruction;
pub use recording::{DrawCall, RecordingCanvas};
pub use replay::replay;
pub use state::{Brush, DrawingDefaults, DrawingState, Pen};

pub use color::{BLACK, BLUE, GREEN, RED, WHITE, YELLOW};
