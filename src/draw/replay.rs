//! Replay engine: walks a command buffer and draws it onto a canvas.

use super::canvas::Canvas;
use super::font::FontDescriptor;
use super::instruction::Instruction;
use super::state::{DrawingDefaults, DrawingState};
use log::debug;

/// Replays `instructions` in order against `canvas`.
///
/// Drawing state starts from `defaults` and accumulates strictly left to
/// right: each primitive sees the pen or brush left by the last preceding
/// `SetColor`/`SetLineWidth`. The instructions are only read. An empty
/// sequence never touches the canvas, not even for quality hints.
///
/// Returns the number of primitives issued.
pub fn replay(
    instructions: &[Instruction],
    defaults: DrawingDefaults,
    font: &FontDescriptor,
    canvas: &mut dyn Canvas,
) -> usize {
    if instructions.is_empty() {
        return 0;
    }

    canvas.begin_pass();

    let mut state = DrawingState::new(defaults, font);
    let mut drawn = 0;

    for instruction in instructions {
        if instruction.is_state_change() {
            state.apply(instruction);
            continue;
        }
        render_instruction(instruction, &state, canvas);
        drawn += 1;
    }

    debug!(
        "Replayed {} instructions ({} primitives)",
        instructions.len(),
        drawn
    );
    drawn
}

/// Draws a single non-state instruction using the current state.
fn render_instruction(instruction: &Instruction, state: &DrawingState<'_>, canvas: &mut dyn Canvas) {
    match instruction {
        Instruction::DrawLine { x1, y1, x2, y2 } => {
            canvas.stroke_line(state.pen(), *x1, *y1, *x2, *y2);
        }
        Instruction::DrawRect(bounds) => canvas.stroke_rect(state.pen(), *bounds),
        Instruction::FillRect(bounds) => canvas.fill_rect(state.brush(), *bounds),
        Instruction::DrawEllipse(bounds) => canvas.stroke_ellipse(state.pen(), *bounds),
        Instruction::FillEllipse(bounds) => canvas.fill_ellipse(state.brush(), *bounds),
        Instruction::DrawText { x, y, text } => {
            canvas.draw_text(state.brush(), state.font(), *x, *y, text);
        }
        Instruction::DrawPolygon { points } => canvas.stroke_polygon(state.pen(), points),
        Instruction::FillPolygon { points } => canvas.fill_polygon(state.brush(), points),
        Instruction::SetColor(_) | Instruction::SetLineWidth { .. } => {}
    }
}
