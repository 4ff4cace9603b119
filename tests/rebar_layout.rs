use footing_draw::draw::rebar::layout_bars;

#[test]
fn endpoints_are_exact_span_boundaries() {
    for count in 2..40u32 {
        let positions = layout_bars(count, 13.7, 201.3, 3.0);
        assert_eq!(positions.len(), count as usize);
        assert_eq!(positions[0], 13.7, "first marker, count {count}");
        assert_eq!(
            *positions.last().unwrap(),
            201.3,
            "last marker, count {count}"
        );
    }
}

#[test]
fn single_bar_sits_at_the_midpoint() {
    let positions = layout_bars(1, 100.0, 300.0, 3.0);
    assert_eq!(positions, vec![200.0]);
}

#[test]
fn single_bar_never_produces_non_finite_positions() {
    for (start, end) in [(0.0, 0.0), (-50.0, 50.0), (10.0, 1000.0)] {
        for p in layout_bars(1, start, end, 2.5) {
            assert!(p.is_finite());
        }
    }
}

#[test]
fn interior_markers_are_evenly_spaced() {
    let positions = layout_bars(6, 9.0, 171.0, 1.8);
    // Gap comes from the corrected interior span, so compare interior
    // markers against each other rather than against the snapped ends.
    let gap = positions[2] - positions[1];
    for w in positions[1..positions.len() - 1].windows(2) {
        assert!((w[1] - w[0] - gap).abs() < 1e-9);
    }
    assert!(gap > 0.0);
}

#[test]
fn positions_are_strictly_increasing() {
    let positions = layout_bars(12, 0.0, 500.0, 4.0);
    for w in positions.windows(2) {
        assert!(w[0] < w[1]);
    }
}
