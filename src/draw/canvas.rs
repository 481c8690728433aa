//! Drawing capability consumed by the replay engine, plus its Cairo implementation.

use super::color::Rgb;
use super::font::FontDescriptor;
use super::geometry::{Bounds, PointF};
use super::state::{Brush, Pen};

/// A drawable context handed to the paint handler by a surface.
///
/// Geometry follows the usual native 2D API conventions: rectangles and
/// ellipses take an `x, y, w, h` bounding box, lines take two endpoints and
/// text is positioned by the top-left corner of its layout.
pub trait Canvas {
    /// Called once at the start of every non-empty replay pass to apply
    /// quality hints such as antialiasing.
    fn begin_pass(&mut self) {}

    fn stroke_line(&mut self, pen: &Pen, x1: i32, y1: i32, x2: i32, y2: i32);
    fn stroke_rect(&mut self, pen: &Pen, bounds: Bounds);
    fn fill_rect(&mut self, brush: &Brush, bounds: Bounds);
    fn stroke_ellipse(&mut self, pen: &Pen, bounds: Bounds);
    fn fill_ellipse(&mut self, brush: &Brush, bounds: Bounds);
    fn draw_text(&mut self, brush: &Brush, font: &FontDescriptor, x: i32, y: i32, text: &str);
    fn stroke_polygon(&mut self, pen: &Pen, points: &[PointF]);
    fn fill_polygon(&mut self, brush: &Brush, points: &[PointF]);
}

/// [`Canvas`] backed by a Cairo context, with Pango for text.
pub struct CairoCanvas<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoCanvas<'a> {
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self { ctx }
    }

    fn set_source(&self, color: Rgb) {
        let color = color.to_color();
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    fn apply_pen(&self, pen: &Pen) {
        self.set_source(pen.color);
        self.ctx.set_line_width(f64::from(pen.width));
    }

    /// Adds an ellipse path inscribed in `bounds`. Returns `false` when the
    /// box has no area and nothing was added.
    fn ellipse_path(&self, bounds: Bounds) -> bool {
        if bounds.w == 0 || bounds.h == 0 {
            return false;
        }

        let rx = f64::from(bounds.w) / 2.0;
        let ry = f64::from(bounds.h) / 2.0;

        self.ctx.save().ok();
        self.ctx
            .translate(f64::from(bounds.x) + rx, f64::from(bounds.y) + ry);
        self.ctx.scale(rx, ry);
        self.ctx.new_sub_path();
        self.ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
        self.ctx.restore().ok();
        true
    }

    /// Adds a closed polygon path. Fewer than two points add nothing.
    fn polygon_path(&self, points: &[PointF]) -> bool {
        let [first, rest @ ..] = points else {
            return false;
        };
        if rest.is_empty() {
            return false;
        }
        self.ctx.move_to(first.x, first.y);
        for point in rest {
            self.ctx.line_to(point.x, point.y);
        }
        self.ctx.close_path();
        true
    }
}

impl Canvas for CairoCanvas<'_> {
    fn begin_pass(&mut self) {
        self.ctx.set_antialias(cairo::Antialias::Best);
    }

    fn stroke_line(&mut self, pen: &Pen, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.apply_pen(pen);
        self.ctx.move_to(f64::from(x1), f64::from(y1));
        self.ctx.line_to(f64::from(x2), f64::from(y2));
        let _ = self.ctx.stroke();
    }

    fn stroke_rect(&mut self, pen: &Pen, bounds: Bounds) {
        self.apply_pen(pen);
        self.ctx.set_line_join(cairo::LineJoin::Miter);
        self.ctx.rectangle(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.w),
            f64::from(bounds.h),
        );
        let _ = self.ctx.stroke();
    }

    fn fill_rect(&mut self, brush: &Brush, bounds: Bounds) {
        self.set_source(brush.color);
        self.ctx.rectangle(
            f64::from(bounds.x),
            f64::from(bounds.y),
            f64::from(bounds.w),
            f64::from(bounds.h),
        );
        let _ = self.ctx.fill();
    }

    fn stroke_ellipse(&mut self, pen: &Pen, bounds: Bounds) {
        self.apply_pen(pen);
        if self.ellipse_path(bounds) {
            let _ = self.ctx.stroke();
        }
    }

    fn fill_ellipse(&mut self, brush: &Brush, bounds: Bounds) {
        self.set_source(brush.color);
        if self.ellipse_path(bounds) {
            let _ = self.ctx.fill();
        }
    }

    fn draw_text(&mut self, brush: &Brush, font: &FontDescriptor, x: i32, y: i32, text: &str) {
        if text.is_empty() {
            return;
        }

        // Keep font options from leaking into later primitives
        self.ctx.save().ok();

        let layout = pangocairo::functions::create_layout(self.ctx);
        let font_desc = pango::FontDescription::from_string(&font.to_pango_string());
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        self.set_source(brush.color);
        self.ctx.move_to(f64::from(x), f64::from(y));
        pangocairo::functions::show_layout(self.ctx, &layout);

        self.ctx.restore().ok();
    }

    fn stroke_polygon(&mut self, pen: &Pen, points: &[PointF]) {
        self.apply_pen(pen);
        self.ctx.set_line_join(cairo::LineJoin::Miter);
        if self.polygon_path(points) {
            let _ = self.ctx.stroke();
        }
    }

    fn fill_polygon(&mut self, brush: &Brush, points: &[PointF]) {
        self.set_source(brush.color);
        if self.polygon_path(points) {
            let _ = self.ctx.fill();
        }
    }
}

/// Fills the whole context with a solid background colour.
///
/// Surfaces call this before each replay so that every paint starts from a
/// blank frame.
pub fn fill_background(ctx: &cairo::Context, color: Rgb) {
    let color = color.to_color();
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
    ctx.restore().ok();
}
