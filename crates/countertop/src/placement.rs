//! Corner-relative cutout placement and its inverse.
//!
//! Offsets are measured from a corner of the outer polygon's *bounding box*,
//! not from the polygon itself. On L/U tops this means offsets can put a
//! cutout into the concave notch; `validate` then reports it as outside the
//! material because its containment test uses the true polygon.

use serde::{Deserialize, Serialize};

use crate::geom::{BBox, Point, Rect};
use crate::model::{Cutout, RefX, RefY};

pub use crate::geom::{distance_to_edge as get_distance_to_edge, do_rectangles_overlap, snap_to_grid};

/// Offsets of a cutout center from its reference corner (cm, never negative).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offsets {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Absolute center of `cutout`. The origin for an empty polygon.
pub fn calculate_cutout_position(cutout: &Cutout, polygon: &[Point]) -> Point {
    match BBox::of(polygon) {
        Some(b) => position_in_box(&b, cutout.offset_x, cutout.offset_y, cutout.reference_x, cutout.reference_y),
        None => Point::zeros(),
    }
}

/// Offsets that place a center at `point`, clamped at zero. Zero for an empty polygon.
pub fn calculate_offsets_from_position(
    point: Point,
    polygon: &[Point],
    reference_x: RefX,
    reference_y: RefY,
) -> Offsets {
    let Some(b) = BBox::of(polygon) else {
        return Offsets {
            offset_x: 0.0,
            offset_y: 0.0,
        };
    };
    let offset_x = match reference_x {
        RefX::Left => point.x - b.min_x,
        RefX::Right => b.max_x - point.x,
    };
    let offset_y = match reference_y {
        RefY::Front => point.y - b.min_y,
        RefY::Back => b.max_y - point.y,
    };
    Offsets {
        offset_x: offset_x.max(0.0),
        offset_y: offset_y.max(0.0),
    }
}

/// Footprint of `cutout` around its computed center.
pub fn cutout_rect(cutout: &Cutout, polygon: &[Point]) -> Rect {
    Rect::centered(calculate_cutout_position(cutout, polygon), cutout.width, cutout.depth)
}

/// Closed containment test against the cutout footprint.
pub fn is_point_in_cutout(point: Point, cutout: &Cutout, polygon: &[Point]) -> bool {
    let r = cutout_rect(cutout, polygon);
    point.x >= r.x && point.x <= r.x + r.width && point.y >= r.y && point.y <= r.y + r.height
}

#[inline]
pub(crate) fn position_in_box(b: &BBox, offset_x: f64, offset_y: f64, rx: RefX, ry: RefY) -> Point {
    let x = match rx {
        RefX::Left => b.min_x + offset_x,
        RefX::Right => b.max_x - offset_x,
    };
    let y = match ry {
        RefY::Front => b.min_y + offset_y,
        RefY::Back => b.max_y - offset_y,
    };
    Point::new(x, y)
}
