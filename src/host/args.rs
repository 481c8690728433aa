//! Typed argument decoding for session operations.
//!
//! Each operation has a fixed arity and parameter kinds (see
//! [`Operation::signature`]). [`Call::decode`] checks positional host values
//! against that schema and produces a typed [`Call`], normalizing polygon
//! vertices on the way.

use super::catalog::Operation;
use crate::draw::{Bounds, Instruction, Rgb, normalize_points};
use crate::error::GfxError;
use crate::value::{Value, ValueKind};

/// A fully decoded operation, ready for the session to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Init {
        width: i32,
        height: i32,
        title: String,
    },
    Close,
    Clear,
    /// Any operation that appends one instruction to the buffer
    Record(Instruction),
    MousePosition,
    MouseButton(String),
    TimerStart,
    TimerReset,
    TimerStop,
    ElapsedTime(String),
    Paint,
}

impl Call {
    /// Decodes `values` according to `op`'s signature.
    ///
    /// # Errors
    /// - [`GfxError::ArgumentCount`] when the arity does not match
    /// - [`GfxError::ArgumentKind`] when a value has the wrong kind
    /// - [`GfxError::MalformedGeometry`] when a polygon vertex is not an `[x, y]` pair
    pub fn decode(op: Operation, values: &[Value]) -> Result<Self, GfxError> {
        let args = Args::new(op, values)?;

        let call = match op {
            Operation::Init => Call::Init {
                width: args.int(0)?,
                height: args.int(1)?,
                title: args.string(2)?.to_string(),
            },
            Operation::Close => Call::Close,
            Operation::Clear => Call::Clear,
            Operation::SetColour => Call::Record(Instruction::SetColor(Rgb::new(
                args.int(0)?,
                args.int(1)?,
                args.int(2)?,
            ))),
            Operation::SetLineWidth => Call::Record(Instruction::SetLineWidth {
                width: args.int(0)?,
            }),
            Operation::DrawLine => Call::Record(Instruction::DrawLine {
                x1: args.int(0)?,
                y1: args.int(1)?,
                x2: args.int(2)?,
                y2: args.int(3)?,
            }),
            Operation::DrawRectangle => Call::Record(Instruction::DrawRect(args.bounds()?)),
            Operation::FillRectangle => Call::Record(Instruction::FillRect(args.bounds()?)),
            Operation::DrawEllipse => Call::Record(Instruction::DrawEllipse(args.bounds()?)),
            Operation::FillEllipse => Call::Record(Instruction::FillEllipse(args.bounds()?)),
            Operation::DrawString => Call::Record(Instruction::DrawText {
                x: args.int(0)?,
                y: args.int(1)?,
                text: args.string(2)?.to_string(),
            }),
            Operation::DrawPolygon => Call::Record(Instruction::DrawPolygon {
                points: normalize_points(args.list(0)?)?,
            }),
            Operation::FillPolygon => Call::Record(Instruction::FillPolygon {
                points: normalize_points(args.list(0)?)?,
            }),
            Operation::MousePosition => Call::MousePosition,
            Operation::MouseButton => Call::MouseButton(args.string(0)?.to_string()),
            Operation::TimerStart => Call::TimerStart,
            Operation::TimerReset => Call::TimerReset,
            Operation::ElapsedTime => Call::ElapsedTime(args.string(0)?.to_string()),
            Operation::TimerStop => Call::TimerStop,
            Operation::Paint => Call::Paint,
        };

        Ok(call)
    }
}

/// Positional arguments already checked for arity.
struct Args<'a> {
    op: Operation,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(op: Operation, values: &'a [Value]) -> Result<Self, GfxError> {
        let expected = op.signature().params.len();
        if values.len() != expected {
            return Err(GfxError::ArgumentCount {
                operation: op.host_name(),
                expected,
                found: values.len(),
            });
        }
        Ok(Self { op, values })
    }

    fn mismatch(&self, index: usize, expected: ValueKind) -> GfxError {
        GfxError::ArgumentKind {
            operation: self.op.host_name(),
            index,
            expected,
            found: self.values[index].kind(),
        }
    }

    fn int(&self, index: usize) -> Result<i32, GfxError> {
        self.values[index]
            .as_int()
            .ok_or_else(|| self.mismatch(index, ValueKind::Int))
    }

    fn string(&self, index: usize) -> Result<&'a str, GfxError> {
        self.values[index]
            .as_str()
            .ok_or_else(|| self.mismatch(index, ValueKind::Str))
    }

    fn list(&self, index: usize) -> Result<&'a [Value], GfxError> {
        self.values[index]
            .as_list()
            .ok_or_else(|| self.mismatch(index, ValueKind::List))
    }

    fn bounds(&self) -> Result<Bounds, GfxError> {
        Ok(Bounds::new(
            self.int(0)?,
            self.int(1)?,
            self.int(2)?,
            self.int(3)?,
        ))
    }
}
