//! Evenly spaced reinforcement marker positions along a span.

use super::shapes::{DOT_ROW_RISE, DOT_SPAN_CORRECTION, DOT_SPAN_INSET};
use super::{Frame, Primitive};

/// Marker positions for `count` bars across `[span_start, span_end]`.
///
/// The interior is divided into `count - 1` equal gaps, but the first and
/// last markers are forced to the exact span boundaries so rounding in the
/// interior spacing can never drift off the edges. A single bar sits at the
/// span midpoint; the naive `span / (count - 1)` formula would divide by
/// zero there.
pub fn layout_bars(count: u32, span_start: f64, span_end: f64, marker_radius: f64) -> Vec<f64> {
    if count == 1 {
        return vec![(span_start + span_end) * 0.5];
    }

    let interior = span_end - span_start - 2.0 * marker_radius + DOT_SPAN_CORRECTION;
    let gap = interior / (count - 1) as f64;

    (0..count)
        .map(|i| {
            if i == 0 {
                span_start
            } else if i == count - 1 {
                span_end
            } else {
                span_start + gap * i as f64
            }
        })
        .collect()
}

/// The dot row in the section view: one filled dot per bar, sitting just
/// above the bottom bar outline.
pub fn push_dots(out: &mut Vec<Primitive>, count: u32, f: &Frame) {
    let span_start = f.origin_x + DOT_SPAN_INSET;
    let span_end = f.right() - DOT_SPAN_INSET;
    let y = f.footing_bottom() - DOT_ROW_RISE;

    for x in layout_bars(count, span_start, span_end, f.dot_radius) {
        out.push(Primitive::Dot {
            x,
            y,
            radius: f.dot_radius,
        });
    }
}
