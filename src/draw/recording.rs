//! A [`Canvas`] that records primitive calls instead of rasterizing them.
//!
//! Useful for hosts that forward frames elsewhere and for inspecting what a
//! replay pass would draw.

use super::canvas::Canvas;
use super::font::FontDescriptor;
use super::geometry::{Bounds, PointF};
use super::state::{Brush, Pen};

/// One primitive call made against a [`RecordingCanvas`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Line {
        pen: Pen,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    },
    Rect {
        pen: Pen,
        bounds: Bounds,
    },
    FillRect {
        brush: Brush,
        bounds: Bounds,
    },
    Ellipse {
        pen: Pen,
        bounds: Bounds,
    },
    FillEllipse {
        brush: Brush,
        bounds: Bounds,
    },
    Text {
        brush: Brush,
        font: FontDescriptor,
        x: i32,
        y: i32,
        text: String,
    },
    Polygon {
        pen: Pen,
        points: Vec<PointF>,
    },
    FillPolygon {
        brush: Brush,
        points: Vec<PointF>,
    },
}

/// Canvas that appends every primitive to [`RecordingCanvas::calls`].
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    /// Primitive calls in the order they were made
    pub calls: Vec<DrawCall>,
    /// Number of replay passes that started on this canvas
    pub passes: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the calls recorded so far.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Canvas for RecordingCanvas {
    fn begin_pass(&mut self) {
        self.passes += 1;
    }

    fn stroke_line(&mut self, pen: &Pen, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.calls.push(DrawCall::Line {
            pen: *pen,
            x1,
            y1,
            x2,
            y2,
        });
    }

    fn stroke_rect(&mut self, pen: &Pen, bounds: Bounds) {
        self.calls.push(DrawCall::Rect { pen: *pen, bounds });
    }

    fn fill_rect(&mut self, brush: &Brush, bounds: Bounds) {
        self.calls.push(DrawCall::FillRect {
            brush: *brush,
            bounds,
        });
    }

    fn stroke_ellipse(&mut self, pen: &Pen, bounds: Bounds) {
        self.calls.push(DrawCall::Ellipse { pen: *pen, bounds });
    }

    fn fill_ellipse(&mut self, brush: &Brush, bounds: Bounds) {
        self.calls.push(DrawCall::FillEllipse {
            brush: *brush,
            bounds,
        });
    }

    fn draw_text(&mut self, brush: &Brush, font: &FontDescriptor, x: i32, y: i32, text: &str) {
        self.calls.push(DrawCall::Text {
            brush: *brush,
            font: font.clone(),
            x,
            y,
            text: text.to_string(),
        });
    }

    fn stroke_polygon(&mut self, pen: &Pen, points: &[PointF]) {
        self.calls.push(DrawCall::Polygon {
            pen: *pen,
            points: points.to_vec(),
        });
    }

    fn fill_polygon(&mut self, brush: &Brush, points: &[PointF]) {
        self.calls.push(DrawCall::FillPolygon {
            brush: *brush,
            points: points.to_vec(),
        });
    }
}
