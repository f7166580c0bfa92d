//! Property tests for the engine-wide laws.

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::api::*;
use crate::geom::{BBox, Rect};
use crate::model::{
    CountertopStyle, Cutout, CutoutKind, Design, Dimensions, DividerElement, DividerKind, ErrorKind, Layout,
    Orientation, RefX, RefY, StyleKind,
};

fn white() -> CountertopStyle {
    CountertopStyle {
        kind: StyleKind::Color,
        value: "#FFFFFF".into(),
        name: "White".into(),
        price_per_sqm: None,
        category: None,
    }
}

fn cutout(id: &str, width: f64, depth: f64, ox: f64, oy: f64, rx: RefX, ry: RefY) -> Cutout {
    Cutout {
        id: id.into(),
        name: id.to_uppercase(),
        kind: CutoutKind::Sink,
        width,
        depth,
        offset_x: ox,
        offset_y: oy,
        reference_x: rx,
        reference_y: ry,
    }
}

fn any_dimensions() -> impl Strategy<Value = Dimensions> {
    prop_oneof![
        (50.0f64..400.0, 40.0f64..90.0).prop_map(|(length, depth)| Dimensions::Straight { length, depth }),
        (100.0f64..400.0, 50.0f64..300.0, 40.0f64..90.0).prop_map(|(length_a, length_b, depth)| {
            Dimensions::LShape {
                length_a,
                length_b,
                depth,
            }
        }),
        (50.0f64..300.0, 50.0f64..300.0, 100.0f64..400.0, 40.0f64..90.0).prop_map(|(l, r, c, depth)| {
            Dimensions::UShape {
                length_left: l,
                length_right: r,
                gap_width: c,
                depth,
            }
        }),
    ]
}

/// Zero, negative, or a usable length.
fn maybe_bad() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(-5.0), 1.0f64..400.0]
}

fn any_ref() -> impl Strategy<Value = (RefX, RefY)> {
    (any::<bool>(), any::<bool>()).prop_map(|(l, f)| {
        (
            if l { RefX::Left } else { RefX::Right },
            if f { RefY::Front } else { RefY::Back },
        )
    })
}

proptest! {
    #[test]
    fn offsets_round_trip_inside_bbox(
        dims in any_dimensions(),
        right_arm in any::<bool>(),
        (rx, ry) in any_ref(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let orientation = if right_arm { Orientation::RightArm } else { Orientation::LeftArm };
        let poly = generate_polygon(dims.layout(), &dims, orientation);
        let b = BBox::of(&poly).unwrap();
        let c = cutout("c", 10.0, 10.0, fx * b.width(), fy * b.height(), rx, ry);
        let at = calculate_cutout_position(&c, &poly);
        prop_assert!(b.contains(at));
        let o = calculate_offsets_from_position(at, &poly, rx, ry);
        prop_assert!((o.offset_x - c.offset_x).abs() < 1e-9);
        prop_assert!((o.offset_y - c.offset_y).abs() < 1e-9);
    }

    #[test]
    fn rectangle_overlap_is_symmetric(
        a in (0.0f64..100.0, 0.0f64..100.0, 0.0f64..50.0, 0.0f64..50.0),
        b in (0.0f64..100.0, 0.0f64..100.0, 0.0f64..50.0, 0.0f64..50.0),
    ) {
        let ra = Rect { x: a.0, y: a.1, width: a.2, height: a.3 };
        let rb = Rect { x: b.0, y: b.1, width: b.2, height: b.3 };
        prop_assert_eq!(do_rectangles_overlap(&ra, &rb), do_rectangles_overlap(&rb, &ra));
    }

    #[test]
    fn never_reports_self_overlap(offsets in prop::collection::vec((20.0f64..280.0, 10.0f64..50.0), 1..6)) {
        let mut design = Design::new(Layout::Straight, white());
        for (i, &(ox, oy)) in offsets.iter().enumerate() {
            design.cutouts.push(cutout(&format!("c{i}"), 40.0, 40.0, ox, oy, RefX::Left, RefY::Front));
        }
        for e in validate_design(&design).iter().filter(|e| e.kind == ErrorKind::Overlap) {
            prop_assert_eq!(e.cutouts.len(), 2);
            prop_assert_ne!(&e.cutouts[0], &e.cutouts[1]);
        }
    }

    #[test]
    fn no_dividers_is_identity(dims in any_dimensions(), right_arm in any::<bool>()) {
        let orientation = if right_arm { Orientation::RightArm } else { Orientation::LeftArm };
        let layout = dims.layout();
        prop_assert_eq!(
            generate_segment_polygons_with_dividers(layout, &dims, orientation, &[]),
            generate_segment_polygons(layout, &dims, orientation)
        );
    }

    #[test]
    fn divider_slices_conserve_length(length in 50.0f64..500.0, position in 0.01f64..0.99) {
        let dims = Dimensions::Straight { length, depth: 60.0 };
        let divider = DividerElement {
            id: "d".into(),
            kind: DividerKind::Gap,
            name: "Gap".into(),
            width: 10.0,
            segment_id: "MAIN".into(),
            position,
            price: 0.0,
        };
        let segs = generate_segment_polygons_with_dividers(Layout::Straight, &dims, Orientation::LeftArm, &[divider]);
        prop_assert_eq!(segs.len(), 2);
        let total: f64 = segs.iter().map(|s| BBox::of(&s.polygon).unwrap().width()).sum();
        prop_assert!((total - length).abs() < 1e-9);
    }

    #[test]
    fn total_is_subtotal_plus_vat(dims in any_dimensions(), n in 0usize..4) {
        let mut design = Design::new(dims.layout(), white());
        design.dimensions = dims;
        for i in 0..n {
            design.cutouts.push(cutout(&format!("c{i}"), 40.0, 40.0, 50.0, 30.0, RefX::Left, RefY::Front));
        }
        let p = calculate_pricing(&design);
        prop_assert!(p.area > 0.0);
        prop_assert!((p.total - p.subtotal * 1.23).abs() < 1e-9 * p.total.max(1.0));
    }

    #[test]
    fn polygon_empty_iff_a_field_is_unusable(
        layout_pick in 0u8..3,
        a in maybe_bad(),
        b in maybe_bad(),
        c in maybe_bad(),
        d in maybe_bad(),
    ) {
        let (dims, fields) = match layout_pick {
            0 => (Dimensions::Straight { length: a, depth: b }, vec![a, b]),
            1 => (Dimensions::LShape { length_a: a, length_b: b, depth: c }, vec![a, b, c]),
            _ => (
                Dimensions::UShape { length_left: a, length_right: b, gap_width: c, depth: d },
                vec![a, b, c, d],
            ),
        };
        let empty = generate_polygon(dims.layout(), &dims, Orientation::LeftArm).is_empty();
        prop_assert_eq!(empty, fields.iter().any(|&v| v <= 0.0));
    }
}

#[test]
fn seeded_overlap_fixes_clear_or_give_up() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut design = Design::new(Layout::Straight, white());
        let n = rng.gen_range(2..6);
        for i in 0..n {
            let (w, d) = (rng.gen_range(10.0..60.0), rng.gen_range(10.0..40.0));
            let (ox, oy) = (rng.gen_range(30.0..120.0), rng.gen_range(20.0..40.0));
            design.cutouts.push(cutout(&format!("c{i}"), w, d, ox, oy, RefX::Left, RefY::Front));
        }
        let poly = generate_polygon(design.layout, &design.dimensions, design.orientation);
        for e in validate_design(&design).iter().filter(|e| e.kind == ErrorKind::Overlap) {
            assert!(can_auto_fix(e));
            let fixed = get_auto_fix_suggestion(e, &design).unwrap();
            let original = design.cutout(&fixed.id).unwrap();
            if fixed == *original {
                continue;
            }
            let rect = cutout_rect(&fixed, &poly);
            let clear = design
                .cutouts
                .iter()
                .filter(|c| c.id != fixed.id)
                .all(|c| !do_rectangles_overlap(&rect, &cutout_rect(c, &poly)));
            assert!(clear, "suggestion for {} still overlaps", e.id);
        }
    }
}
