//! Command buffer holding recorded instructions in call order.

use super::instruction::Instruction;

/// Ordered, append-only sequence of [`Instruction`]s awaiting replay.
///
/// Insertion order is the only order. The buffer is emptied as a whole and is
/// never truncated partially.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    instructions: Vec<Instruction>,
}

impl CommandBuffer {
    /// Creates a new empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instruction after all previously recorded ones.
    pub fn append(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Drops every recorded instruction.
    pub fn clear(&mut self) {
        self.instructions.clear();
    }

    /// Read-only view of the buffer exactly as it stands now.
    pub fn snapshot(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Bounds, Rgb};

    #[test]
    fn append_preserves_call_order() {
        let mut buffer = CommandBuffer::new();
        buffer.append(Instruction::SetColor(Rgb::new(255, 0, 0)));
        buffer.append(Instruction::FillRect(Bounds::new(0, 0, 10, 10)));
        buffer.append(Instruction::SetLineWidth { width: 3 });

        let tags: Vec<_> = buffer.snapshot().iter().map(Instruction::tag).collect();
        assert_eq!(tags, ["SetColor", "FillRect", "SetLineWidth"]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut buffer = CommandBuffer::new();
        buffer.append(Instruction::DrawRect(Bounds::new(1, 2, 3, 4)));
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.snapshot().is_empty());

        buffer.append(Instruction::SetLineWidth { width: 2 });
        assert_eq!(buffer.len(), 1);
    }
}
