//! Recorded drawing instructions.

use super::color::Rgb;
use super::geometry::{Bounds, PointF};
use serde::{Deserialize, Serialize};

/// One recorded drawing or state operation.
///
/// Instructions never carry their own colour or width: those are applied by
/// `SetColor`/`SetLineWidth` entries earlier in the buffer, so position in the
/// buffer is the only thing that gives an instruction its appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    /// Sets both the pen and the brush colour
    SetColor(Rgb),
    /// Sets the pen stroke width in device units
    SetLineWidth { width: i32 },
    /// Straight line between two endpoints
    DrawLine { x1: i32, y1: i32, x2: i32, y2: i32 },
    /// Rectangle outline
    DrawRect(Bounds),
    /// Filled rectangle
    FillRect(Bounds),
    /// Ellipse outline inscribed in the bounding box
    DrawEllipse(Bounds),
    /// Filled ellipse inscribed in the bounding box
    FillEllipse(Bounds),
    /// Text whose layout box starts at (x, y)
    DrawText { x: i32, y: i32, text: String },
    /// Closed polygon outline
    DrawPolygon { points: Vec<PointF> },
    /// Filled polygon
    FillPolygon { points: Vec<PointF> },
}

impl Instruction {
    /// Returns `true` for instructions that only mutate drawing state.
    pub fn is_state_change(&self) -> bool {
        matches!(
            self,
            Instruction::SetColor(_) | Instruction::SetLineWidth { .. }
        )
    }

    /// Short tag name, used in log output.
    pub fn tag(&self) -> &'static str {
        match self {
            Instruction::SetColor(_) => "SetColor",
            Instruction::SetLineWidth { .. } => "SetLineWidth",
            Instruction::DrawLine { .. } => "DrawLine",
            Instruction::DrawRect(_) => "DrawRect",
            Instruction::FillRect(_) => "FillRect",
            Instruction::DrawEllipse(_) => "DrawEllipse",
            Instruction::FillEllipse(_) => "FillEllipse",
            Instruction::DrawText { .. } => "DrawText",
            Instruction::DrawPolygon { .. } => "DrawPolygon",
            Instruction::FillPolygon { .. } => "FillPolygon",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_color_and_width_change_state() {
        assert!(Instruction::SetColor(Rgb::new(1, 2, 3)).is_state_change());
        assert!(Instruction::SetLineWidth { width: 4 }.is_state_change());
        assert!(!Instruction::FillRect(Bounds::new(0, 0, 1, 1)).is_state_change());
        assert!(
            !Instruction::DrawText {
                x: 0,
                y: 0,
                text: String::new()
            }
            .is_state_change()
        );
    }
}
