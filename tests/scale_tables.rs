mod common;

use footing_draw::model::Meters;
use footing_draw::scale::{pixels_per_meter, vertical_divisor, Canvas, ScaleContext};

#[test]
fn multiplier_brackets() {
    let cases = [
        (0.5, 100.0),
        (1.8, 100.0),
        (1.999, 100.0),
        (2.2, 93.0),
        (2.6, 86.0),
        (3.2, 79.0),
        (3.7, 72.0),
        (4.2, 65.0),
        (4.9, 58.0),
        (5.0, 51.0),
        (7.5, 51.0),
    ];
    for (width, expected) in cases {
        assert_eq!(
            pixels_per_meter(Meters(width)),
            expected,
            "width {width} m"
        );
    }
}

#[test]
fn exact_breakpoints_take_the_next_bracket() {
    // Strict `<` semantics: a width exactly at a breakpoint gets the
    // smaller multiplier of the following bracket.
    assert_eq!(pixels_per_meter(Meters(2.0)), 93.0);
    assert_eq!(pixels_per_meter(Meters(2.5)), 86.0);
    assert_eq!(pixels_per_meter(Meters(4.5)), 58.0);
}

#[test]
fn multiplier_constant_within_bracket_and_decreasing_across() {
    assert_eq!(
        pixels_per_meter(Meters(0.8)),
        pixels_per_meter(Meters(1.95))
    );

    let widths = [1.0, 2.1, 2.7, 3.1, 3.6, 4.1, 4.6, 5.5];
    for pair in widths.windows(2) {
        assert!(
            pixels_per_meter(Meters(pair[0])) > pixels_per_meter(Meters(pair[1])),
            "crossing a breakpoint must strictly decrease the multiplier ({} vs {})",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn vertical_divisor_brackets() {
    assert_eq!(vertical_divisor(Meters(1.8)), 6.0);
    assert_eq!(vertical_divisor(Meters(2.0)), 5.3);
    assert_eq!(vertical_divisor(Meters(3.5)), 4.6);
    assert_eq!(vertical_divisor(Meters(4.2)), 3.9);
    assert_eq!(vertical_divisor(Meters(5.9)), 3.2);
    assert_eq!(vertical_divisor(Meters(6.0)), 2.5);
}

#[test]
fn origin_is_horizontally_centered() {
    let footing = common::sample_footing();
    let canvas = Canvas::default();
    let ctx = ScaleContext::compute(&footing, canvas);

    // plan side 180 px at multiplier 100, callout margin 30 + 0.4 * 180
    let total_w = 180.0 + 30.0 + 0.4 * 180.0;
    assert!((ctx.origin_x - (canvas.width as f64 - total_w) / 2.0).abs() < 1e-9);
    assert_eq!(ctx.pixels_per_meter, 100.0);
}

#[test]
fn scale_context_is_reproducible() {
    let footing = common::sample_footing();
    let a = ScaleContext::compute(&footing, Canvas::default());
    let b = ScaleContext::compute(&footing, Canvas::default());
    assert_eq!(a, b);
}
