//! Dimension lines with double arrowheads and the rotated text labels for
//! every measured feature of the drawing.

use super::shapes::GAP_REBAR_Y_FRACTION;
use super::{Frame, Primitive, TextRotation, ARROWHEAD_SIZE, FONT_SIZE};
use crate::model::{FootingResult, Meters};

/// Offset of the outer overall-span dimension lines from the outline.
const OUTER_BAND: f64 = 35.0;
/// Offset of the inner (half-span, thickness, column) dimension lines.
const INNER_BAND: f64 = 8.0;

/// Below this footing width the bar-callout text is scaled down to keep the
/// stacked labels from overlapping. Presentation heuristic only.
pub const CALLOUT_SHRINK_THRESHOLD: Meters = Meters(2.3);

/// Label scale for span dimensions.
const SPAN_FONT_SCALE: f64 = 1.4;

/// Callout font scale, shrunk on narrow footings.
fn callout_font_scale(footing: &FootingResult, f: &Frame) -> f64 {
    if footing.width < CALLOUT_SHRINK_THRESHOLD {
        SPAN_FONT_SCALE.min(f.plan_side * 0.01)
    } else {
        SPAN_FONT_SCALE
    }
}

/// Offset of the clear-distance dimension band below the pedestal top,
/// proportional to the plan size.
fn clear_band(f: &Frame) -> f64 {
    15.0 * f.plan_side * 0.009
}

/// Arrowhead triangle for the tip at `(x2, y2)` of a line from `(x1, y1)`.
/// Head size is fixed, never proportional to line length, so short lines
/// still get recognizable arrowheads.
pub fn arrowhead(x1: f64, y1: f64, x2: f64, y2: f64, size: f64) -> [(f64, f64); 3] {
    let angle = (y2 - y1).atan2(x2 - x1);
    let head_len = size * 4.0;
    let head_width = size * 4.0;

    let a1x = x2 - head_len * (angle + std::f64::consts::FRAC_PI_3).cos();
    let a1y = y2 - head_len * (angle + std::f64::consts::FRAC_PI_3).sin();
    let a2x = x2 - head_len * (angle - std::f64::consts::FRAC_PI_3).cos();
    let a2y = y2 - head_len * (angle - std::f64::consts::FRAC_PI_3).sin();

    let o1x = head_width * (angle + std::f64::consts::FRAC_PI_2).cos();
    let o1y = head_width * (angle + std::f64::consts::FRAC_PI_2).sin();
    let o2x = head_width * (angle - std::f64::consts::FRAC_PI_2).cos();
    let o2y = head_width * (angle - std::f64::consts::FRAC_PI_2).sin();

    [(x2, y2), (a1x + o1x, a1y + o1y), (a2x + o2x, a2y + o2y)]
}

/// Default arrowhead for dimension lines.
pub fn dimension_arrowhead(x1: f64, y1: f64, x2: f64, y2: f64) -> [(f64, f64); 3] {
    arrowhead(x1, y1, x2, y2, ARROWHEAD_SIZE)
}

fn dim(x1: f64, y1: f64, x2: f64, y2: f64) -> Primitive {
    Primitive::DimensionLine { x1, y1, x2, y2 }
}

/// The ten dimension lines of the drawing: overall width (both axes), half
/// splits, thickness, column width, and the two clear distances.
pub fn push_dimension_lines(out: &mut Vec<Primitive>, f: &Frame) {
    let top = f.origin_y;
    let left = f.origin_x;
    let right = f.right();
    let center = f.center_x();
    let below_plan = f.origin_y + f.plan_side;
    let ped_left = center - f.col_w * 0.5;
    let ped_right = center + f.col_w * 0.5;
    let band = clear_band(f);

    // Overall width, vertical and horizontal.
    out.push(dim(right + OUTER_BAND, top, right + OUTER_BAND, top + f.plan_side));
    out.push(dim(left, below_plan + OUTER_BAND, right, below_plan + OUTER_BAND));

    // Footing thickness.
    out.push(dim(
        right + INNER_BAND,
        f.footing_bottom(),
        right + INNER_BAND,
        f.footing_top(),
    ));

    // Half-width splits, vertical then horizontal.
    out.push(dim(right + INNER_BAND, top, right + INNER_BAND, top + f.plan_side * 0.5));
    out.push(dim(
        right + INNER_BAND,
        top + f.plan_side * 0.5,
        right + INNER_BAND,
        top + f.plan_side,
    ));
    out.push(dim(left, below_plan + INNER_BAND, center, below_plan + INNER_BAND));
    out.push(dim(center, below_plan + INNER_BAND, right, below_plan + INNER_BAND));

    // Column-to-edge clear distances and the column width itself.
    out.push(dim(left, f.section_top() + band, ped_left, f.section_top() + band));
    out.push(dim(
        ped_left,
        f.section_top() - INNER_BAND,
        ped_right,
        f.section_top() - INNER_BAND,
    ));
    out.push(dim(right, f.section_top() + band, ped_right, f.section_top() + band));
}

/// Label placement offsets.
const TXT_NEAR: f64 = 8.0;
const TXT_STACK: f64 = 12.0;
const TXT_MID: f64 = 20.0;
const TXT_FAR: f64 = 48.0;

fn text(x: f64, y: f64, content: String, size: f64, rotation: TextRotation) -> Primitive {
    Primitive::Text {
        x,
        y,
        content,
        size,
        rotation,
    }
}

/// Every text label of the drawing. All millimeter values round to the
/// nearest whole millimeter, consistently with the callout lengths.
pub fn push_labels(out: &mut Vec<Primitive>, footing: &FootingResult, f: &Frame) {
    let span_size = FONT_SIZE * SPAN_FONT_SCALE;
    let callout_size = FONT_SIZE * callout_font_scale(footing, f);

    let top = f.origin_y;
    let left = f.origin_x;
    let right = f.right();
    let center = f.center_x();
    let below_plan = f.origin_y + f.plan_side;
    let margin_x = right + f.horz_space;
    let gap_bar_y = below_plan + f.vert_space * GAP_REBAR_Y_FRACTION;
    let band = clear_band(f);

    let width_mm = footing.width.round_mm();
    let half_mm = Meters(footing.width.0 * 0.5).round_mm();
    let clear_mm = Meters((footing.width.0 - footing.column_x.0) * 0.5).round_mm();
    let col_mm = footing.column_x.round_mm();
    let hook_mm = footing.hook_length().round_mm();
    let straight_mm = footing.straight_bar_length().round_mm();
    let callout = footing.bar_callout();

    // Section thickness, rotated alongside its dimension line.
    out.push(text(
        right + TXT_MID,
        f.footing_top() + f.section_depth * 0.5,
        footing.thickness.round_mm().to_string(),
        span_size,
        TextRotation::Quarter,
    ));

    // Vertical spans right of the plan view.
    out.push(text(
        right + TXT_FAR,
        top + f.plan_side * 0.5,
        width_mm.to_string(),
        span_size,
        TextRotation::Quarter,
    ));
    out.push(text(
        right + TXT_MID,
        top + f.plan_side * 0.25,
        half_mm.to_string(),
        span_size,
        TextRotation::Quarter,
    ));
    out.push(text(
        right + TXT_MID,
        top + f.plan_side * 0.75,
        half_mm.to_string(),
        span_size,
        TextRotation::Quarter,
    ));

    // Horizontal spans below the plan view.
    out.push(text(
        center,
        below_plan + TXT_FAR,
        width_mm.to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        left + f.plan_side * 0.25,
        below_plan + TXT_MID,
        half_mm.to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        left + f.plan_side * 0.75,
        below_plan + TXT_MID,
        half_mm.to_string(),
        span_size,
        TextRotation::Horizontal,
    ));

    // Clear distances beside the pedestal, then the column width above it.
    out.push(text(
        left + f.plan_side * 0.21,
        f.section_top() + band - TXT_NEAR,
        clear_mm.to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        left + f.plan_side * 0.79,
        f.section_top() + band - TXT_NEAR,
        clear_mm.to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        center,
        f.section_top() - INNER_BAND - TXT_STACK,
        col_mm.to_string(),
        span_size,
        TextRotation::Horizontal,
    ));

    // Bar callout stacked over the straight length, on the bar outline in
    // the gap below the plan view.
    out.push(text(
        center,
        gap_bar_y - TXT_STACK,
        callout.clone(),
        callout_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        center,
        gap_bar_y + TXT_STACK,
        straight_mm.to_string(),
        callout_size,
        TextRotation::Horizontal,
    ));

    // Hook lengths at both ends of that bar.
    out.push(text(
        left - TXT_NEAR,
        gap_bar_y - f.hook * 0.5,
        hook_mm.to_string(),
        callout_size,
        TextRotation::Quarter,
    ));
    out.push(text(
        right + TXT_NEAR,
        gap_bar_y - f.hook * 0.5,
        hook_mm.to_string(),
        callout_size,
        TextRotation::Quarter,
    ));

    // Rotated callout stack on the detached bar in the right margin.
    out.push(text(
        margin_x - TXT_STACK,
        top + f.plan_side * 0.5,
        callout,
        callout_size,
        TextRotation::Quarter,
    ));
    out.push(text(
        margin_x + TXT_STACK,
        top + f.plan_side * 0.5,
        straight_mm.to_string(),
        callout_size,
        TextRotation::Quarter,
    ));
    out.push(text(
        margin_x - f.hook * 0.5,
        top - TXT_NEAR,
        hook_mm.to_string(),
        callout_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        margin_x - f.hook * 0.5,
        below_plan + TXT_NEAR,
        hook_mm.to_string(),
        callout_size,
        TextRotation::Horizontal,
    ));

    // Section cut markers and the section title.
    out.push(text(
        left - TXT_MID,
        top + f.plan_side * 0.5,
        "A".to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        right + TXT_MID,
        top + f.plan_side * 0.5,
        "A".to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
    out.push(text(
        center,
        f.footing_bottom() + TXT_MID,
        "Section A-A".to_string(),
        span_size,
        TextRotation::Horizontal,
    ));
}
