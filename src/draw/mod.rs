pub mod dims;
pub mod rebar;
pub mod shapes;

use crate::model::FootingResult;
use crate::scale::{Canvas, ScaleContext, PEDESTAL_HEIGHT_FRACTION};

/// Stroke width for footing/column outlines.
pub const SHAPE_STROKE: f32 = 1.3;
/// Stroke width for centerlines.
pub const CENTERLINE_STROKE: f32 = 0.5;
/// Stroke width for dimension lines.
pub const DIMENSION_STROKE: f32 = 0.9;
/// Base size used for arrowhead construction.
pub const ARROWHEAD_SIZE: f64 = 5.5;
/// Base font size before per-label scaling.
pub const FONT_SIZE: f64 = 12.0;

/// RGB color; the drawing only uses black and the column fill gray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const COLUMN_GRAY: Rgb = Rgb(0x99, 0x99, 0x99);

/// Text rotation is binary: horizontal labels and 270°-rotated ones for
/// vertical spans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRotation {
    Horizontal,
    Quarter,
}

/// One drawing instruction in pixel space. The full ordered list for a
/// drawing is regenerated from scratch on every result change; primitives
/// are never mutated.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: Option<Rgb>,
        stroke: Option<f32>,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        stroke: f32,
    },
    Dot {
        x: f64,
        y: f64,
        radius: f64,
    },
    /// Arrow-tipped at both ends, independent of length or direction.
    DimensionLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        rotation: TextRotation,
    },
}

/// Shared pixel-space measurements for one drawing, derived once per draw
/// from the result and the scale context and handed to every builder.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
    /// Top-left corner of the plan view.
    pub origin_x: f64,
    pub origin_y: f64,
    /// Plan-view edge length (the footprint is square).
    pub plan_side: f64,
    /// Footing thickness in the section view.
    pub section_depth: f64,
    /// Column rectangle in the plan view.
    pub col_w: f64,
    pub col_h: f64,
    /// Scaled bar hook length.
    pub hook: f64,
    /// Space right of the plan view reserved for the rotated callout.
    pub horz_space: f64,
    /// Vertical gap between the plan and section views.
    pub vert_space: f64,
    /// Pedestal height in the section view.
    pub pedestal: f64,
    /// Reinforcement dot radius.
    pub dot_radius: f64,
}

impl Frame {
    pub fn compute(footing: &FootingResult, scale: &ScaleContext) -> Self {
        let plan_side = scale.px(footing.width);
        Frame {
            origin_x: scale.origin_x,
            origin_y: scale.origin_y,
            plan_side,
            section_depth: scale.px(footing.thickness),
            col_w: scale.px(footing.column_x),
            col_h: scale.px(footing.column_y),
            hook: scale.px(footing.hook_length()),
            horz_space: 30.0 + plan_side * 0.4,
            vert_space: 50.0 + plan_side * 0.7,
            pedestal: plan_side * PEDESTAL_HEIGHT_FRACTION,
            dot_radius: scale.pixels_per_meter * 0.03,
        }
    }

    /// Y of the pedestal top (where the section view begins).
    pub fn section_top(&self) -> f64 {
        self.origin_y + self.plan_side + self.vert_space
    }

    /// Y of the footing top surface in the section view.
    pub fn footing_top(&self) -> f64 {
        self.section_top() + self.pedestal
    }

    /// Y of the footing underside in the section view.
    pub fn footing_bottom(&self) -> f64 {
        self.footing_top() + self.section_depth
    }

    /// X of the plan view's right edge.
    pub fn right(&self) -> f64 {
        self.origin_x + self.plan_side
    }

    /// X of the composition centerline.
    pub fn center_x(&self) -> f64 {
        self.origin_x + self.plan_side * 0.5
    }
}

/// Build the complete ordered primitive list for one drawing.
///
/// Order is significant for layering: base shapes, column ties, rebar
/// outlines, centerlines, reinforcement dots, dimension lines, text. Later
/// elements must never be occluded by earlier fills.
pub fn build_primitives(footing: &FootingResult, canvas: Canvas) -> Vec<Primitive> {
    let scale = ScaleContext::compute(footing, canvas);
    let frame = Frame::compute(footing, &scale);

    let mut out = Vec::new();
    shapes::push_base_shapes(&mut out, &frame);
    shapes::push_column_ties(&mut out, footing, &frame);
    shapes::push_rebar_outlines(&mut out, &frame);
    shapes::push_centerlines(&mut out, &frame);
    rebar::push_dots(&mut out, footing.bar_count, &frame);
    dims::push_dimension_lines(&mut out, &frame);
    dims::push_labels(&mut out, footing, &frame);
    out
}
