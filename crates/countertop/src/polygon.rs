//! Outer boundary of a countertop for each layout family.
//!
//! Vertex order is part of the contract: `[0]` is the top-left outer corner
//! and the edge `[0] → [1]` runs along the back edge. Segment math and
//! bounding-box consumers depend on it, as do exports that must reproduce
//! the on-screen geometry exactly.
//!
//! Invariant (arm width)
//! - Every arm of an L or U top is exactly `depth` wide. `arm_width` is the
//!   single definition; layouts with independent arm widths would have to
//!   change it together with `segments`.

use crate::geom::Point;
use crate::model::{Dimensions, Layout, Orientation};

/// Width of an L/U arm for a top of the given depth.
#[inline]
pub fn arm_width(depth: f64) -> f64 {
    depth
}

/// Inner notch width `g = max(0, C − 2·arm)` of a U top whose bar is `outer_width` (C) wide.
#[inline]
pub fn inner_gap(depth: f64, outer_width: f64) -> f64 {
    (outer_width - 2.0 * arm_width(depth)).max(0.0)
}

/// A usable dimension: finite and strictly positive.
#[inline]
pub(crate) fn usable(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Outer boundary polygon.
///
/// Returns an empty list when `dimensions` is not the variant for `layout` or
/// when any field the layout requires is zero, negative, or not finite.
pub fn generate_polygon(layout: Layout, dimensions: &Dimensions, orientation: Orientation) -> Vec<Point> {
    if dimensions.layout() != layout {
        return Vec::new();
    }
    let p = Point::new;
    match *dimensions {
        Dimensions::Straight { length, depth } => {
            if !(usable(length) && usable(depth)) {
                return Vec::new();
            }
            vec![p(0.0, 0.0), p(length, 0.0), p(length, depth), p(0.0, depth)]
        }
        Dimensions::LShape {
            length_a,
            length_b,
            depth,
        } => {
            if !(usable(length_a) && usable(length_b) && usable(depth)) {
                return Vec::new();
            }
            let w = arm_width(depth);
            let bottom = depth + length_b;
            match orientation {
                Orientation::LeftArm => vec![
                    p(0.0, 0.0),
                    p(length_a, 0.0),
                    p(length_a, depth),
                    p(w, depth),
                    p(w, bottom),
                    p(0.0, bottom),
                ],
                Orientation::RightArm => vec![
                    p(0.0, 0.0),
                    p(length_a, 0.0),
                    p(length_a, bottom),
                    p(length_a - w, bottom),
                    p(length_a - w, depth),
                    p(0.0, depth),
                ],
            }
        }
        Dimensions::UShape {
            length_left,
            length_right,
            gap_width,
            depth,
        } => {
            if !(usable(length_left) && usable(length_right) && usable(gap_width) && usable(depth)) {
                return Vec::new();
            }
            let w = arm_width(depth);
            let outer = gap_width;
            vec![
                p(0.0, 0.0),
                p(outer, 0.0),
                p(outer, length_right + depth),
                p(outer - w, length_right + depth),
                p(outer - w, depth),
                p(w, depth),
                p(w, length_left + depth),
                p(0.0, length_left + depth),
            ]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{shoelace_area, BBox};

    #[test]
    fn straight_rectangle() {
        let dims = Dimensions::Straight {
            length: 100.0,
            depth: 60.0,
        };
        let poly = generate_polygon(Layout::Straight, &dims, Orientation::LeftArm);
        assert_eq!(poly.len(), 4);
        assert_eq!(poly[0], Point::new(0.0, 0.0));
        assert_eq!(poly[2], Point::new(100.0, 60.0));
        let b = BBox::of(&poly).unwrap();
        assert_eq!((b.width(), b.height()), (100.0, 60.0));
        assert!((shoelace_area(&poly) / 10_000.0 - 0.6).abs() < 1e-12);
    }

    #[test]
    fn l_shape_area_is_both_arms() {
        let dims = Dimensions::LShape {
            length_a: 200.0,
            length_b: 150.0,
            depth: 60.0,
        };
        for o in [Orientation::LeftArm, Orientation::RightArm] {
            let poly = generate_polygon(Layout::LShape, &dims, o);
            assert_eq!(poly.len(), 6);
            assert!((shoelace_area(&poly) - (200.0 * 60.0 + 150.0 * 60.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn l_shape_orientations_mirror() {
        let dims = Dimensions::LShape {
            length_a: 200.0,
            length_b: 150.0,
            depth: 60.0,
        };
        let left = generate_polygon(Layout::LShape, &dims, Orientation::LeftArm);
        let right = generate_polygon(Layout::LShape, &dims, Orientation::RightArm);
        // the arm hangs off x ∈ [0, 60] on the left, x ∈ [140, 200] on the right
        assert_eq!(left[4], Point::new(60.0, 210.0));
        assert_eq!(right[3], Point::new(140.0, 210.0));
    }

    #[test]
    fn u_shape_vertices_and_gap() {
        let dims = Dimensions::UShape {
            length_left: 150.0,
            length_right: 100.0,
            gap_width: 300.0,
            depth: 60.0,
        };
        let poly = generate_polygon(Layout::UShape, &dims, Orientation::LeftArm);
        assert_eq!(poly.len(), 8);
        assert_eq!(poly[2], Point::new(300.0, 160.0));
        assert_eq!(poly[6], Point::new(60.0, 210.0));
        assert_eq!(poly[4].x - poly[5].x, inner_gap(60.0, 300.0));
        let expected = 300.0 * 60.0 + 150.0 * 60.0 + 100.0 * 60.0;
        assert!((shoelace_area(&poly) - expected).abs() < 1e-9);
    }

    #[test]
    fn inner_gap_never_negative() {
        assert_eq!(inner_gap(60.0, 100.0), 0.0);
        assert_eq!(inner_gap(60.0, 200.0), 80.0);
    }

    #[test]
    fn invalid_fields_give_empty() {
        let cases = [
            (Layout::Straight, Dimensions::Straight { length: 0.0, depth: 60.0 }),
            (Layout::Straight, Dimensions::Straight { length: 100.0, depth: -1.0 }),
            (
                Layout::LShape,
                Dimensions::LShape { length_a: 200.0, length_b: f64::NAN, depth: 60.0 },
            ),
            (
                Layout::UShape,
                Dimensions::UShape {
                    length_left: 150.0,
                    length_right: 0.0,
                    gap_width: 200.0,
                    depth: 60.0,
                },
            ),
            // variant does not match the layout
            (Layout::LShape, Dimensions::Straight { length: 100.0, depth: 60.0 }),
        ];
        for (layout, dims) in cases {
            assert!(generate_polygon(layout, &dims, Orientation::LeftArm).is_empty());
        }
    }
}
