//! Slicing a rectangular segment along its primary axis.

use super::{Segment, MAIN_SEGMENT};
use crate::geom::Point;

/// Id of the `counter`-th slice of `original`.
///
/// `main` yields `main`, `main-2`, `main-3`, …; letter ids advance the
/// character code (`A`, `B`, `C`, …) starting from the original letter.
pub fn next_segment_id(original: &str, counter: usize) -> String {
    if original.eq_ignore_ascii_case(MAIN_SEGMENT) {
        return if counter == 0 {
            MAIN_SEGMENT.to_string()
        } else {
            format!("{MAIN_SEGMENT}-{}", counter + 1)
        };
    }
    let first = original.chars().next().map_or('A', |c| c.to_ascii_uppercase());
    char::from_u32(first as u32 + counter as u32)
        .map(String::from)
        .unwrap_or_else(|| format!("{original}-{}", counter + 1))
}

/// Slices for sorted `positions` in `[0, 1]`. Zero-length slices are skipped.
pub(super) fn slice_segment(segment: &Segment, positions: &[f64]) -> Vec<Segment> {
    let poly = &segment.polygon;
    if poly.len() < 4 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(positions.len() + 1);
    let mut previous = 0.0;
    for &pos in positions {
        if pos > previous {
            let id = next_segment_id(&segment.segment_id, out.len());
            out.push(slice_between(poly, previous, pos, id));
        }
        previous = pos;
    }
    if previous < 1.0 {
        let id = next_segment_id(&segment.segment_id, out.len());
        out.push(slice_between(poly, previous, 1.0, id));
    }
    out
}

/// Sub-rectangle between fractions `start` and `end` of the axis `[0] → [1]`.
/// The perpendicular sides are copied from the base rectangle.
fn slice_between(poly: &[Point], start: f64, end: f64, segment_id: String) -> Segment {
    let (p1, p2, p3, p4) = (poly[0], poly[1], poly[2], poly[3]);
    let axis = p2 - p1;
    let a = p1 + axis * start;
    let b = p1 + axis * end;
    Segment {
        name: format!("Segment {segment_id}"),
        segment_id,
        polygon: vec![a, b, b + (p3 - p2), a + (p4 - p1)],
    }
}
