//! Operation names, signatures and the read-only catalog exposed to hosts.

use crate::value::ValueKind;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Every operation a session understands.
///
/// Hosts address operations by their string name ([`Operation::host_name`]);
/// inside the crate they are dispatched by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    Close,
    Clear,
    SetColour,
    SetLineWidth,
    DrawLine,
    DrawRectangle,
    FillRectangle,
    DrawEllipse,
    FillEllipse,
    DrawString,
    DrawPolygon,
    FillPolygon,
    MousePosition,
    MouseButton,
    TimerStart,
    TimerReset,
    ElapsedTime,
    TimerStop,
    Paint,
}

/// Signature of one operation as published to the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationSignature {
    pub name: &'static str,
    pub returns: ValueKind,
    pub params: &'static [ValueKind],
    pub description: &'static str,
}

const NO_PARAMS: &[ValueKind] = &[];
const ONE_INT: &[ValueKind] = &[ValueKind::Int];
const ONE_STR: &[ValueKind] = &[ValueKind::Str];
const ONE_LIST: &[ValueKind] = &[ValueKind::List];
const THREE_INTS: &[ValueKind] = &[ValueKind::Int, ValueKind::Int, ValueKind::Int];
const FOUR_INTS: &[ValueKind] = &[ValueKind::Int, ValueKind::Int, ValueKind::Int, ValueKind::Int];
const POSITION_AND_TEXT: &[ValueKind] = &[ValueKind::Int, ValueKind::Int, ValueKind::Str];

impl Operation {
    /// All operations in catalog order.
    pub const ALL: [Operation; 20] = [
        Operation::Init,
        Operation::Close,
        Operation::Clear,
        Operation::SetColour,
        Operation::SetLineWidth,
        Operation::DrawLine,
        Operation::DrawRectangle,
        Operation::FillRectangle,
        Operation::DrawEllipse,
        Operation::FillEllipse,
        Operation::DrawString,
        Operation::DrawPolygon,
        Operation::FillPolygon,
        Operation::MousePosition,
        Operation::MouseButton,
        Operation::TimerStart,
        Operation::TimerReset,
        Operation::ElapsedTime,
        Operation::TimerStop,
        Operation::Paint,
    ];

    /// Name the host uses to call this operation.
    pub fn host_name(self) -> &'static str {
        match self {
            Operation::Init => "Gfx_Init",
            Operation::Close => "Gfx_Close",
            Operation::Clear => "Gfx_Clear",
            Operation::SetColour => "Gfx_SetColour",
            Operation::SetLineWidth => "Gfx_SetLineWidth",
            Operation::DrawLine => "Gfx_DrawLine",
            Operation::DrawRectangle => "Gfx_DrawRectangle",
            Operation::FillRectangle => "Gfx_FillRectangle",
            Operation::DrawEllipse => "Gfx_DrawEllipse",
            Operation::FillEllipse => "Gfx_FillEllipse",
            Operation::DrawString => "Gfx_DrawString",
            Operation::DrawPolygon => "Gfx_DrawPolygon",
            Operation::FillPolygon => "Gfx_FillPolygon",
            Operation::MousePosition => "Gfx_MousePosition",
            Operation::MouseButton => "Gfx_MouseClick",
            Operation::TimerStart => "Gfx_StartTimer",
            Operation::TimerReset => "Gfx_ResetTimer",
            Operation::ElapsedTime => "Gfx_ElapsedTime",
            Operation::TimerStop => "Gfx_StopTimer",
            Operation::Paint => "Gfx_Paint",
        }
    }

    /// Resolves a host name. Names are case-sensitive.
    pub fn from_host_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// Whether the operation needs an active surface to do anything.
    pub fn requires_surface(self) -> bool {
        !matches!(
            self,
            Operation::Init
                | Operation::Close
                | Operation::TimerStart
                | Operation::TimerReset
                | Operation::ElapsedTime
                | Operation::TimerStop
                | Operation::Paint
        )
    }

    /// Published signature of this operation.
    pub fn signature(self) -> &'static OperationSignature {
        &CATALOG[self as usize]
    }

    fn describe(self) -> OperationSignature {
        let (returns, params, description) = match self {
            Operation::Init => (
                ValueKind::Bool,
                POSITION_AND_TEXT,
                "Open a drawing surface of the given width, height and title",
            ),
            Operation::Close => (ValueKind::Bool, NO_PARAMS, "Close the drawing surface"),
            Operation::Clear => (
                ValueKind::Bool,
                NO_PARAMS,
                "Discard everything drawn since the last clear",
            ),
            Operation::SetColour => (
                ValueKind::Bool,
                THREE_INTS,
                "Set the red, green and blue colour used by later drawing",
            ),
            Operation::SetLineWidth => (
                ValueKind::Bool,
                ONE_INT,
                "Set the outline width used by later drawing",
            ),
            Operation::DrawLine => (ValueKind::Bool, FOUR_INTS, "Draw a line from x1,y1 to x2,y2"),
            Operation::DrawRectangle => (ValueKind::Bool, FOUR_INTS, "Outline a rectangle x,y,w,h"),
            Operation::FillRectangle => (ValueKind::Bool, FOUR_INTS, "Fill a rectangle x,y,w,h"),
            Operation::DrawEllipse => (
                ValueKind::Bool,
                FOUR_INTS,
                "Outline the ellipse inside x,y,w,h",
            ),
            Operation::FillEllipse => (ValueKind::Bool, FOUR_INTS, "Fill the ellipse inside x,y,w,h"),
            Operation::DrawString => (
                ValueKind::Bool,
                POSITION_AND_TEXT,
                "Draw text at position x,y",
            ),
            Operation::DrawPolygon => (
                ValueKind::Bool,
                ONE_LIST,
                "Outline a polygon given as a list of [x, y] vertices",
            ),
            Operation::FillPolygon => (
                ValueKind::Bool,
                ONE_LIST,
                "Fill a polygon given as a list of [x, y] vertices",
            ),
            Operation::MousePosition => (
                ValueKind::List,
                NO_PARAMS,
                "Pointer position relative to the surface as [x, y]",
            ),
            Operation::MouseButton => (
                ValueKind::Bool,
                ONE_STR,
                "Whether the left, right or middle button is currently held",
            ),
            Operation::TimerStart => (ValueKind::Bool, NO_PARAMS, "Start or resume the stopwatch"),
            Operation::TimerReset => (ValueKind::Bool, NO_PARAMS, "Stop the stopwatch and zero it"),
            Operation::ElapsedTime => (
                ValueKind::Str,
                ONE_STR,
                "Format the elapsed time; {0} hours, {1} minutes, {2} seconds, {3} milliseconds",
            ),
            Operation::TimerStop => (ValueKind::Bool, NO_PARAMS, "Pause the stopwatch"),
            Operation::Paint => (
                ValueKind::Nil,
                NO_PARAMS,
                "Render everything recorded so far to the surface",
            ),
        };

        OperationSignature {
            name: self.host_name(),
            returns,
            params,
            description,
        }
    }
}

static CATALOG: Lazy<Vec<OperationSignature>> =
    Lazy::new(|| Operation::ALL.iter().map(|op| op.describe()).collect());

static BY_NAME: Lazy<HashMap<&'static str, Operation>> =
    Lazy::new(|| Operation::ALL.iter().map(|op| (op.host_name(), *op)).collect());

/// The process-wide operation catalog, built on first use and never modified.
pub fn catalog() -> &'static [OperationSignature] {
    &CATALOG
}
