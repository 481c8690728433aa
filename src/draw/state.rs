//! Drawing state machine: pen, brush and font as seen by the replay engine.

use super::color::{BLACK, Rgb};
use super::font::FontDescriptor;
use super::instruction::Instruction;

/// Stroke colour and width used by outline primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    pub color: Rgb,
    pub width: i32,
}

/// Fill colour used by fill primitives and text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    pub color: Rgb,
}

/// Starting pen/brush values for every replay pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawingDefaults {
    /// Initial colour of both pen and brush
    pub color: Rgb,
    /// Initial pen width
    pub line_width: i32,
}

impl Default for DrawingDefaults {
    fn default() -> Self {
        Self {
            color: Rgb::from(BLACK),
            line_width: 1,
        }
    }
}

/// Current pen, brush and font while walking a command buffer.
///
/// A fresh state is built from [`DrawingDefaults`] at the start of each
/// replay pass; nothing survives from one pass to the next.
#[derive(Debug)]
pub struct DrawingState<'a> {
    pen: Pen,
    brush: Brush,
    font: &'a FontDescriptor,
}

impl<'a> DrawingState<'a> {
    pub fn new(defaults: DrawingDefaults, font: &'a FontDescriptor) -> Self {
        Self {
            pen: Pen {
                color: defaults.color,
                width: defaults.line_width,
            },
            brush: Brush {
                color: defaults.color,
            },
            font,
        }
    }

    /// Applies a state-changing instruction.
    ///
    /// A colour change feeds both the pen and the brush. Returns `false`, and
    /// leaves the state alone, for instructions that draw rather than mutate.
    pub fn apply(&mut self, instruction: &Instruction) -> bool {
        match instruction {
            Instruction::SetColor(color) => {
                self.pen.color = *color;
                self.brush.color = *color;
                true
            }
            Instruction::SetLineWidth { width } => {
                self.pen.width = *width;
                true
            }
            _ => false,
        }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn font(&self) -> &'a FontDescriptor {
        self.font
    }
}
