mod common;

use footing_draw::draw::{build_primitives, Primitive, TextRotation};
use footing_draw::model::Meters;
use footing_draw::scale::Canvas;
use footing_draw::{FootingResult, GeometryError};

fn dots(primitives: &[Primitive]) -> Vec<(f64, f64)> {
    primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Dot { x, y, .. } => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

fn labels(primitives: &[Primitive]) -> Vec<String> {
    primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text { content, .. } => Some(content.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn plan_rectangle_is_square_at_the_table_multiplier() {
    let footing = common::sample_footing();
    let primitives = build_primitives(&footing, Canvas::default());

    // The base plan rectangle is the first primitive.
    match &primitives[0] {
        Primitive::Rect { w, h, fill, .. } => {
            assert!((*w - 180.0).abs() < 1e-9, "1.8 m at 100 px/m, got {w}");
            assert_eq!(*w, *h, "plan view is square");
            assert!(fill.is_none(), "footprint is an outline, not a fill");
        }
        other => panic!("expected plan rectangle first, got {other:?}"),
    }
}

#[test]
fn six_markers_span_the_interior_with_exact_endpoints() {
    let footing = common::sample_footing();
    let primitives = build_primitives(&footing, Canvas::default());

    let dots = dots(&primitives);
    assert_eq!(dots.len(), 6);

    let xs: Vec<f64> = dots.iter().map(|d| d.0).collect();
    let span = xs.last().unwrap() - xs.first().unwrap();
    assert!(
        (span - (180.0 - 2.0 * 9.0)).abs() < 1e-9,
        "span between edge dots, got {span}"
    );

    // All dots share one row in the section view.
    assert!(dots.windows(2).all(|w| w[0].1 == w[1].1));
}

#[test]
fn single_bar_draws_one_centered_marker() {
    let footing = FootingResult::from_record(&common::record(
        1800.0, 450.0, 400.0, 400.0, 1, 150.0, 16.0, 40.0,
    ))
    .unwrap();
    let primitives = build_primitives(&footing, Canvas::default());

    let dots = dots(&primitives);
    assert_eq!(dots.len(), 1);
    assert!(dots[0].0.is_finite() && dots[0].1.is_finite());

    // Midpoint of the dot span, which is centered on the plan view.
    let plan_center = match &primitives[0] {
        Primitive::Rect { x, w, .. } => x + w / 2.0,
        other => panic!("expected plan rectangle first, got {other:?}"),
    };
    assert!((dots[0].0 - plan_center).abs() < 1e-9);
}

#[test]
fn degenerate_column_is_accepted() {
    let footing = FootingResult::from_record(&common::record(
        1800.0, 450.0, 0.0, 0.0, 6, 150.0, 16.0, 40.0,
    ))
    .expect("zero-area column is valid");
    let primitives = build_primitives(&footing, Canvas::default());

    match &primitives[1] {
        Primitive::Rect { w, h, fill, .. } => {
            assert_eq!((*w, *h), (0.0, 0.0));
            assert!(fill.is_some());
        }
        other => panic!("expected column rectangle second, got {other:?}"),
    }
}

#[test]
fn oversized_column_is_rejected() {
    let err = FootingResult::from_record(&common::record(
        1800.0, 450.0, 2000.0, 400.0, 6, 150.0, 16.0, 40.0,
    ))
    .unwrap_err();
    assert!(matches!(err, GeometryError::ColumnExceedsFooting { .. }));
}

#[test]
fn invalid_geometry_is_rejected() {
    let bad = [
        common::record(0.0, 450.0, 400.0, 400.0, 6, 150.0, 16.0, 40.0),
        common::record(-1800.0, 450.0, 400.0, 400.0, 6, 150.0, 16.0, 40.0),
        common::record(1800.0, 0.0, 400.0, 400.0, 6, 150.0, 16.0, 40.0),
        common::record(1800.0, 450.0, -400.0, 400.0, 6, 150.0, 16.0, 40.0),
        common::record(1800.0, 450.0, 400.0, 400.0, 0, 150.0, 16.0, 40.0),
        common::record(1800.0, 450.0, 400.0, 400.0, 6, 0.0, 16.0, 40.0),
        common::record(1800.0, 450.0, 400.0, 400.0, 6, 150.0, 0.0, 40.0),
        common::record(1800.0, 450.0, 400.0, 400.0, 6, 150.0, 16.0, 0.0),
    ];
    for rec in &bad {
        assert!(FootingResult::from_record(rec).is_err());
    }
}

#[test]
fn labels_round_to_whole_millimeters() {
    let footing = common::sample_footing();
    let primitives = build_primitives(&footing, Canvas::default());
    let labels = labels(&primitives);

    // hook = ceil((0.45 - 0.115) * 100) / 100 = 0.34 m
    assert_eq!(footing.hook_length(), Meters(0.34));
    assert_eq!(footing.straight_bar_length().round_mm(), 1650);
    assert_eq!(footing.total_bar_length().round_mm(), 2330);

    for expected in [
        "1800",
        "900",
        "450",
        "700",
        "400",
        "340",
        "1650",
        "6\u{03d5}16@150-2330",
        "A",
        "Section A-A",
    ] {
        assert!(
            labels.iter().any(|l| l == expected),
            "missing label {expected:?} in {labels:?}"
        );
    }
}

#[test]
fn callout_and_straight_length_are_stacked_not_merged() {
    let footing = common::sample_footing();
    let primitives = build_primitives(&footing, Canvas::default());

    let stacked: Vec<(&str, f64, f64)> = primitives
        .iter()
        .filter_map(|p| match p {
            Primitive::Text {
                x,
                y,
                content,
                rotation: TextRotation::Horizontal,
                ..
            } if content == "6\u{03d5}16@150-2330" || content == "1650" => {
                Some((content.as_str(), *x, *y))
            }
            _ => None,
        })
        .collect();

    let callout = stacked
        .iter()
        .find(|(c, _, _)| c.starts_with('6'))
        .expect("callout label");
    let straight = stacked
        .iter()
        .find(|(c, _, _)| *c == "1650")
        .expect("straight-length label");

    assert_eq!(callout.1, straight.1, "same anchor x");
    assert!(callout.2 < straight.2, "callout sits above the length");
}

#[test]
fn text_rotation_is_binary() {
    let footing = common::sample_footing();
    let primitives = build_primitives(&footing, Canvas::default());

    let mut horizontal = 0;
    let mut quarter = 0;
    for p in &primitives {
        if let Primitive::Text { rotation, .. } = p {
            match rotation {
                TextRotation::Horizontal => horizontal += 1,
                TextRotation::Quarter => quarter += 1,
            }
        }
    }
    assert!(horizontal > 0 && quarter > 0);
}

#[test]
fn dimension_lines_count_and_double_arrowheads() {
    let footing = common::sample_footing();
    let primitives = build_primitives(&footing, Canvas::default());

    let dims: Vec<_> = primitives
        .iter()
        .filter(|p| matches!(p, Primitive::DimensionLine { .. }))
        .collect();
    assert_eq!(dims.len(), 10);

    // Arrowheads come from the line angle with a fixed size; a short line
    // still gets a full-size head.
    let head = footing_draw::draw::dims::dimension_arrowhead(0.0, 0.0, 3.0, 0.0);
    let tip = head[0];
    assert_eq!(tip, (3.0, 0.0));
    let base_len = ((head[1].0 - tip.0).powi(2) + (head[1].1 - tip.1).powi(2)).sqrt();
    assert!(base_len > 3.0, "head is not proportional to line length");
}

#[test]
fn covr_accepts_number_or_string() {
    let footing = footing_draw::parse_record_bytes(common::sample_record_json().as_bytes())
        .expect("string covr parses");
    assert_eq!(footing.cover, footing_draw::model::Millimeters(40.0));

    let numeric = br#"{"b":1800,"d":450,"colx":400,"coly":400,"N":6,"s":150,"bar":16,"covr":40}"#;
    let footing2 = footing_draw::parse_record_bytes(numeric).expect("numeric covr parses");
    assert_eq!(footing, footing2);
}
