use super::*;
use crate::model::DividerKind;

fn divider(segment_id: &str, position: f64) -> DividerElement {
    DividerElement {
        id: format!("d-{segment_id}-{position}"),
        kind: DividerKind::StandingCabinet,
        name: "Cabinet".into(),
        width: 60.0,
        segment_id: segment_id.into(),
        position,
        price: 500.0,
    }
}

fn axis_len(s: &Segment) -> f64 {
    (s.polygon[1] - s.polygon[0]).norm()
}

const STRAIGHT: Dimensions = Dimensions::Straight {
    length: 300.0,
    depth: 60.0,
};

const L_DIMS: Dimensions = Dimensions::LShape {
    length_a: 200.0,
    length_b: 150.0,
    depth: 60.0,
};

const U_DIMS: Dimensions = Dimensions::UShape {
    length_left: 150.0,
    length_right: 120.0,
    gap_width: 300.0,
    depth: 60.0,
};

#[test]
fn base_segment_ids_per_layout() {
    let ids = |layout, dims: &Dimensions| -> Vec<String> {
        generate_segment_polygons(layout, dims, Orientation::LeftArm)
            .into_iter()
            .map(|s| s.segment_id)
            .collect()
    };
    assert_eq!(ids(Layout::Straight, &STRAIGHT), vec!["main"]);
    assert_eq!(ids(Layout::LShape, &L_DIMS), vec!["A", "B"]);
    assert_eq!(ids(Layout::UShape, &U_DIMS), vec!["A", "B", "C"]);
    assert!(ids(Layout::UShape, &STRAIGHT).is_empty());
}

#[test]
fn straight_main_equals_outer_polygon() {
    let segs = generate_segment_polygons(Layout::Straight, &STRAIGHT, Orientation::LeftArm);
    let outer = crate::polygon::generate_polygon(Layout::Straight, &STRAIGHT, Orientation::LeftArm);
    assert_eq!(segs[0].polygon, outer);
}

#[test]
fn arms_are_depth_wide() {
    let segs = generate_segment_polygons(Layout::UShape, &U_DIMS, Orientation::LeftArm);
    let a = crate::geom::BBox::of(&segs[0].polygon).unwrap();
    let b = crate::geom::BBox::of(&segs[1].polygon).unwrap();
    let c = crate::geom::BBox::of(&segs[2].polygon).unwrap();
    assert_eq!(a.width(), 60.0);
    assert_eq!(b.width(), 60.0);
    assert_eq!(c.height(), 60.0);
    assert_eq!(c.width(), 180.0);
    assert_eq!(a.height(), 210.0);
    assert_eq!(b.height(), 180.0);
}

#[test]
fn right_arm_segment_sits_on_the_right() {
    let segs = generate_segment_polygons(Layout::LShape, &L_DIMS, Orientation::RightArm);
    let b = crate::geom::BBox::of(&segs[1].polygon).unwrap();
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (140.0, 200.0, 60.0, 210.0));
}

#[test]
fn no_dividers_is_identity() {
    for (layout, dims) in [
        (Layout::Straight, STRAIGHT),
        (Layout::LShape, L_DIMS),
        (Layout::UShape, U_DIMS),
    ] {
        let base = generate_segment_polygons(layout, &dims, Orientation::LeftArm);
        let split = generate_segment_polygons_with_dividers(layout, &dims, Orientation::LeftArm, &[]);
        assert_eq!(base, split);
    }
}

#[test]
fn half_split_conserves_length() {
    let segs = generate_segment_polygons_with_dividers(
        Layout::Straight,
        &STRAIGHT,
        Orientation::LeftArm,
        &[divider("main", 0.5)],
    );
    assert_eq!(segs.len(), 2);
    assert_eq!(segs[0].segment_id, "main");
    assert_eq!(segs[1].segment_id, "main-2");
    let total: f64 = segs.iter().map(axis_len).sum();
    assert!((total - 300.0).abs() < 1e-9);
    // perpendicular extent carried over
    assert_eq!(segs[1].polygon[2], Point::new(300.0, 60.0));
    assert_eq!(segs[1].polygon[3], Point::new(150.0, 60.0));
}

#[test]
fn dividers_sorted_and_matched_case_insensitively() {
    let segs = generate_segment_polygons_with_dividers(
        Layout::Straight,
        &STRAIGHT,
        Orientation::LeftArm,
        &[divider("MAIN", 0.75), divider("Main", 0.25)],
    );
    let ids: Vec<_> = segs.iter().map(|s| s.segment_id.as_str()).collect();
    assert_eq!(ids, ["main", "main-2", "main-3"]);
    let lens: Vec<_> = segs.iter().map(axis_len).collect();
    assert!((lens[0] - 75.0).abs() < 1e-9);
    assert!((lens[1] - 150.0).abs() < 1e-9);
    assert!((lens[2] - 75.0).abs() < 1e-9);
}

#[test]
fn degenerate_positions_are_skipped() {
    let segs = generate_segment_polygons_with_dividers(
        Layout::Straight,
        &STRAIGHT,
        Orientation::LeftArm,
        &[
            divider("main", 0.0),
            divider("main", 0.4),
            divider("main", 0.4),
            divider("main", 1.0),
        ],
    );
    assert_eq!(segs.len(), 2);
    let total: f64 = segs.iter().map(axis_len).sum();
    assert!((total - 300.0).abs() < 1e-9);
}

#[test]
fn letter_ids_advance_and_others_pass_through() {
    let segs = generate_segment_polygons_with_dividers(
        Layout::UShape,
        &U_DIMS,
        Orientation::LeftArm,
        &[divider("c", 0.5), divider("unknown", 0.5)],
    );
    let ids: Vec<_> = segs.iter().map(|s| s.segment_id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "C", "D"]);
    assert_eq!(segs[0].name, "Segment A (left)");
    assert_eq!(segs[3].name, "Segment D");
    // C runs along x from 60 to 240; the second half starts at 150
    assert_eq!(segs[3].polygon[0], Point::new(150.0, 0.0));
}

#[test]
fn id_sequence() {
    assert_eq!(next_segment_id("main", 0), "main");
    assert_eq!(next_segment_id("main", 2), "main-3");
    assert_eq!(next_segment_id("a", 0), "A");
    assert_eq!(next_segment_id("B", 1), "C");
}
