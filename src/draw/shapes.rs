//! Vertex paths for the plan rectangle, column overlay, stepped section
//! profile, column ties and the hooked rebar outlines.

use super::{Frame, Primitive, CENTERLINE_STROKE, COLUMN_GRAY, SHAPE_STROKE};
use crate::model::FootingResult;

/// Inset of rebar outlines from the footing faces.
const REBAR_INSET: f64 = 5.0;
/// Inset of the column dowels from the column faces.
const DOWEL_INSET: f64 = 4.0;
/// Clearance between the bottom bar and the footing underside.
const BAR_OFFSET: f64 = 4.0;
/// Extra clearance between bottom bar and the dot row.
const DOT_CLEARANCE: f64 = 4.0;
/// Dowel hooks stop this far above the dot row.
const DOWEL_BOTTOM_GAP: f64 = 1.5;
/// Position of the transverse rebar outline across the plan view.
const PLAN_REBAR_FRACTION: f64 = 0.75;
/// Position of the below-plan rebar outline within the view gap.
pub(crate) const GAP_REBAR_Y_FRACTION: f64 = 0.6;
/// Vertical spacing of column ties.
const TIE_SPACING: f64 = 15.0;
/// How far centerlines extend past the outline.
const CENTERLINE_OVERHANG: f64 = 15.0;
/// Pedestal axis line overhang past the dowels.
const AXIS_OVERHANG: f64 = 20.0;

fn line(points: Vec<(f64, f64)>, stroke: f32) -> Primitive {
    Primitive::Polyline { points, stroke }
}

/// Plan-view footprint, column overlay and the stepped section silhouette.
pub fn push_base_shapes(out: &mut Vec<Primitive>, f: &Frame) {
    out.push(Primitive::Rect {
        x: f.origin_x,
        y: f.origin_y,
        w: f.plan_side,
        h: f.plan_side,
        fill: None,
        stroke: Some(SHAPE_STROKE),
    });

    // Centered column overlay; degenerate (zero-area) columns draw nothing
    // visible but stay in the list so layering is stable.
    out.push(Primitive::Rect {
        x: f.center_x() - f.col_w * 0.5,
        y: f.origin_y + f.plan_side * 0.5 - f.col_h * 0.5,
        w: f.col_w,
        h: f.col_h,
        fill: Some(COLUMN_GRAY),
        stroke: None,
    });

    // Section silhouette: pedestal continuing down from the plan view,
    // seated on the footing profile. Open path, left pedestal face first.
    let left = f.origin_x;
    let right = f.right();
    let ped_left = f.center_x() - f.col_w * 0.5;
    let ped_right = f.center_x() + f.col_w * 0.5;
    out.push(line(
        vec![
            (ped_left, f.section_top()),
            (ped_left, f.footing_top()),
            (left, f.footing_top()),
            (left, f.footing_bottom()),
            (right, f.footing_bottom()),
            (right, f.footing_top()),
            (ped_right, f.footing_top()),
            (ped_right, f.section_top()),
        ],
        SHAPE_STROKE,
    ));
}

/// Horizontal tie lines inside the pedestal. The count grows with footing
/// width: `floor(width_m) + 2`.
pub fn push_column_ties(out: &mut Vec<Primitive>, footing: &FootingResult, f: &Frame) {
    let x_start = f.center_x() - f.col_w * 0.5 + DOWEL_INSET;
    let x_end = f.center_x() + f.col_w * 0.5 - DOWEL_INSET;
    let y_start = f.section_top() + 5.0;

    let count = footing.width.0.floor() as i64 + 2;
    for i in 0..count {
        let y = y_start + i as f64 * TIE_SPACING;
        out.push(line(vec![(x_start, y), (x_end, y)], SHAPE_STROKE));
    }
}

/// Column dowels (hooked at the bottom), the hooked plan-view bar outlines,
/// the detached callout bar right of the plan view, and the section-view
/// bottom bar.
pub fn push_rebar_outlines(out: &mut Vec<Primitive>, f: &Frame) {
    let dowel_left = f.center_x() - f.col_w * 0.5 + DOWEL_INSET;
    let dowel_right = f.center_x() + f.col_w * 0.5 - DOWEL_INSET;
    let dowel_bottom =
        f.footing_bottom() - BAR_OFFSET - DOT_CLEARANCE - f.dot_radius - DOWEL_BOTTOM_GAP;

    // Dowels hook outward at the bottom.
    out.push(line(
        vec![
            (dowel_left, f.section_top()),
            (dowel_left, dowel_bottom),
            (dowel_left - f.hook, dowel_bottom),
        ],
        SHAPE_STROKE,
    ));
    out.push(line(
        vec![
            (dowel_right, f.section_top()),
            (dowel_right, dowel_bottom),
            (dowel_right + f.hook, dowel_bottom),
        ],
        SHAPE_STROKE,
    ));

    // Vertical bar outline across the plan view, hooks pointing left.
    let bar_x = f.origin_x + f.plan_side * PLAN_REBAR_FRACTION;
    out.push(line(
        vec![
            (bar_x - f.hook, f.origin_y + REBAR_INSET),
            (bar_x, f.origin_y + REBAR_INSET),
            (bar_x, f.origin_y + f.plan_side - REBAR_INSET),
            (bar_x - f.hook, f.origin_y + f.plan_side - REBAR_INSET),
        ],
        SHAPE_STROKE,
    ));

    // Detached copy in the callout margin right of the plan view.
    let margin_x = f.right() + f.horz_space;
    out.push(line(
        vec![
            (margin_x - f.hook, f.origin_y + REBAR_INSET),
            (margin_x, f.origin_y + REBAR_INSET),
            (margin_x, f.origin_y + f.plan_side - REBAR_INSET),
            (margin_x - f.hook, f.origin_y + f.plan_side - REBAR_INSET),
        ],
        SHAPE_STROKE,
    ));

    // Horizontal bar outline across the plan view, hooks pointing up.
    let bar_y = f.origin_y + f.plan_side * PLAN_REBAR_FRACTION;
    out.push(line(
        vec![
            (f.origin_x + REBAR_INSET, bar_y - f.hook),
            (f.origin_x + REBAR_INSET, bar_y),
            (f.origin_x + f.plan_side - REBAR_INSET, bar_y),
            (f.origin_x + f.plan_side - REBAR_INSET, bar_y - f.hook),
        ],
        SHAPE_STROKE,
    ));

    // Detached copy in the gap below the plan view.
    let gap_bar_y = f.origin_y + f.plan_side + f.vert_space * GAP_REBAR_Y_FRACTION;
    out.push(line(
        vec![
            (f.origin_x + REBAR_INSET, gap_bar_y - f.hook),
            (f.origin_x + REBAR_INSET, gap_bar_y),
            (f.origin_x + f.plan_side - REBAR_INSET, gap_bar_y),
            (f.origin_x + f.plan_side - REBAR_INSET, gap_bar_y - f.hook),
        ],
        SHAPE_STROKE,
    ));

    // Bottom bar in the section view, hooked up at both ends.
    let bottom_bar_y = f.footing_bottom() - BAR_OFFSET;
    out.push(line(
        vec![
            (f.origin_x + REBAR_INSET, bottom_bar_y - f.hook),
            (f.origin_x + REBAR_INSET, bottom_bar_y),
            (f.origin_x + f.plan_side - REBAR_INSET, bottom_bar_y),
            (f.origin_x + f.plan_side - REBAR_INSET, bottom_bar_y - f.hook),
        ],
        SHAPE_STROKE,
    ));
}

/// Plan-view centerlines and the pedestal top axis line.
pub fn push_centerlines(out: &mut Vec<Primitive>, f: &Frame) {
    out.push(line(
        vec![
            (f.center_x(), f.origin_y - CENTERLINE_OVERHANG),
            (f.center_x(), f.origin_y + f.plan_side + CENTERLINE_OVERHANG),
        ],
        CENTERLINE_STROKE,
    ));
    out.push(line(
        vec![
            (f.origin_x - CENTERLINE_OVERHANG, f.origin_y + f.plan_side * 0.5),
            (f.right() + CENTERLINE_OVERHANG, f.origin_y + f.plan_side * 0.5),
        ],
        CENTERLINE_STROKE,
    ));
    out.push(line(
        vec![
            (
                f.center_x() - f.col_w * 0.5 + DOWEL_INSET - AXIS_OVERHANG,
                f.section_top(),
            ),
            (
                f.center_x() + f.col_w * 0.5 - DOWEL_INSET + AXIS_OVERHANG,
                f.section_top(),
            ),
        ],
        CENTERLINE_STROKE,
    ));
}

/// Span and clearance constants shared with the reinforcement dot layout.
pub(crate) const DOT_SPAN_INSET: f64 = REBAR_INSET + DOWEL_INSET;
pub(crate) const DOT_ROW_RISE: f64 = BAR_OFFSET + DOT_CLEARANCE;
/// Edge correction applied to the interior dot span.
pub(crate) const DOT_SPAN_CORRECTION: f64 = 4.0;
