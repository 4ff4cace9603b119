//! The drawing surface: replays a primitive list onto an exclusively owned
//! pixmap and captures the result as a PNG snapshot.

use tiny_skia::{
    Color, FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::draw::dims::dimension_arrowhead;
use crate::draw::{Primitive, Rgb, TextRotation, DIMENSION_STROKE};
use crate::error::Error;
use crate::fonts;
use crate::scale::Canvas;

/// A captured bitmap of one completed render, held only long enough to be
/// offered for export; replaced whenever a new result is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RasterImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Single-writer raster surface. One surface serves one drawing session;
/// every render pass starts from a fully reset state so stale output from a
/// previous result can never bleed into the next drawing.
pub struct Surface {
    pixmap: Pixmap,
}

fn paint(color: Rgb) -> Paint<'static> {
    let mut p = Paint::default();
    p.set_color_rgba8(color.0, color.1, color.2, 255);
    p.anti_alias = true;
    p
}

fn stroke(width: f32) -> Stroke {
    Stroke {
        width,
        line_cap: LineCap::Butt,
        line_join: LineJoin::Miter,
        ..Stroke::default()
    }
}

impl Surface {
    pub fn new(canvas: Canvas) -> Result<Self, Error> {
        let pixmap = Pixmap::new(canvas.width, canvas.height).ok_or(Error::Surface {
            width: canvas.width,
            height: canvas.height,
        })?;
        Ok(Surface { pixmap })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        }
    }

    /// Clear to the white page background. Stroke and fill state carry no
    /// history here by construction; the clear is what makes re-renders
    /// idempotent.
    pub fn reset(&mut self) {
        self.pixmap.fill(Color::WHITE);
    }

    /// Replay a complete primitive list. The list is already in layering
    /// order; this function adds nothing and reorders nothing.
    pub fn render(&mut self, primitives: &[Primitive]) {
        self.reset();
        for prim in primitives {
            self.draw(prim);
        }
    }

    fn draw(&mut self, prim: &Primitive) {
        match prim {
            Primitive::Rect {
                x,
                y,
                w,
                h,
                fill,
                stroke: stroke_width,
            } => self.draw_rect(*x, *y, *w, *h, *fill, *stroke_width),
            Primitive::Polyline {
                points,
                stroke: width,
            } => self.draw_polyline(points, *width),
            Primitive::Dot { x, y, radius } => self.draw_dot(*x, *y, *radius),
            Primitive::DimensionLine { x1, y1, x2, y2 } => {
                self.draw_dimension_line(*x1, *y1, *x2, *y2)
            }
            Primitive::Text {
                x,
                y,
                content,
                size,
                rotation,
            } => self.draw_text(*x, *y, content, *size, *rotation),
        }
    }

    fn draw_rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Option<Rgb>, sw: Option<f32>) {
        // Degenerate rectangles (zero-area column) are silently skipped;
        // tiny-skia rejects empty rects anyway.
        let Some(rect) =
            tiny_skia::Rect::from_xywh(x as f32, y as f32, (w as f32).max(0.0), (h as f32).max(0.0))
        else {
            return;
        };
        if let Some(color) = fill {
            self.pixmap
                .fill_rect(rect, &paint(color), Transform::identity(), None);
        }
        if let Some(width) = sw {
            let path = PathBuilder::from_rect(rect);
            self.pixmap.stroke_path(
                &path,
                &paint(crate::draw::BLACK),
                &stroke(width),
                Transform::identity(),
                None,
            );
        }
    }

    fn draw_polyline(&mut self, points: &[(f64, f64)], width: f32) {
        if points.len() < 2 {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].0 as f32, points[0].1 as f32);
        for &(x, y) in &points[1..] {
            pb.line_to(x as f32, y as f32);
        }
        let Some(path) = pb.finish() else { return };
        self.pixmap.stroke_path(
            &path,
            &paint(crate::draw::BLACK),
            &stroke(width),
            Transform::identity(),
            None,
        );
    }

    fn draw_dot(&mut self, x: f64, y: f64, radius: f64) {
        let mut pb = PathBuilder::new();
        pb.push_circle(x as f32, y as f32, radius as f32);
        let Some(path) = pb.finish() else { return };
        self.pixmap.fill_path(
            &path,
            &paint(crate::draw::BLACK),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_dimension_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let mut pb = PathBuilder::new();
        pb.move_to(x1 as f32, y1 as f32);
        pb.line_to(x2 as f32, y2 as f32);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(crate::draw::BLACK),
                &stroke(DIMENSION_STROKE),
                Transform::identity(),
                None,
            );
        }

        // Arrowhead at both ends regardless of length or direction.
        self.fill_triangle(dimension_arrowhead(x1, y1, x2, y2));
        self.fill_triangle(dimension_arrowhead(x2, y2, x1, y1));
    }

    fn fill_triangle(&mut self, tri: [(f64, f64); 3]) {
        let mut pb = PathBuilder::new();
        pb.move_to(tri[0].0 as f32, tri[0].1 as f32);
        pb.line_to(tri[1].0 as f32, tri[1].1 as f32);
        pb.line_to(tri[2].0 as f32, tri[2].1 as f32);
        pb.close();
        let Some(path) = pb.finish() else { return };
        self.pixmap.fill_path(
            &path,
            &paint(crate::draw::BLACK),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn draw_text(&mut self, x: f64, y: f64, content: &str, size: f64, rotation: TextRotation) {
        let Some(font_data) = fonts::label_font() else {
            // Warned once at lookup; keep rendering geometry without labels.
            return;
        };
        let Some(path) = fonts::centered_text_path(font_data, content, size, x, y) else {
            return;
        };
        let transform = match rotation {
            TextRotation::Horizontal => Transform::identity(),
            TextRotation::Quarter => Transform::from_rotate_at(270.0, x as f32, y as f32),
        };
        self.pixmap.fill_path(
            &path,
            &paint(crate::draw::BLACK),
            FillRule::Winding,
            transform,
            None,
        );
    }

    /// Snapshot the surface. Must only be called after a completed render
    /// pass; the session type enforces that ordering.
    pub fn capture(&self) -> Result<RasterImage, Error> {
        let png = self
            .pixmap
            .encode_png()
            .map_err(|e| Error::Png(e.to_string()))?;
        Ok(RasterImage {
            png,
            width: self.pixmap.width(),
            height: self.pixmap.height(),
        })
    }
}
