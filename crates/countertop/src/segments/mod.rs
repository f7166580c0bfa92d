//! Named rectangular regions of the countertop, optionally split by dividers.
//!
//! Model
//! - Straight → one segment `main` equal to the outer polygon.
//! - L → `A` (back arm, full `length_a`) and `B` (side arm below it).
//! - U → `A` (left arm), `B` (right arm), `C` (top bar between the arms).
//! - Each base segment is a 4-vertex rectangle whose edge `[0] → [1]` is its
//!   primary axis; dividers slice along that axis (see `split`).
//!
//! Segments are derived from dimensions directly, not cut out of the outer
//! polygon, so neighbouring segments may overlap at an inner corner.

mod split;

use serde::{Deserialize, Serialize};

use crate::geom::Point;
use crate::model::{Dimensions, DividerElement, Layout, Orientation};
use crate::polygon::{arm_width, usable};

pub use split::next_segment_id;

/// Id of the single segment of a straight top.
pub const MAIN_SEGMENT: &str = "main";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub segment_id: String,
    pub name: String,
    pub polygon: Vec<Point>,
}

impl Segment {
    fn new(id: &str, name: &str, polygon: Vec<Point>) -> Segment {
        Segment {
            segment_id: id.to_string(),
            name: name.to_string(),
            polygon,
        }
    }
}

/// Axis-aligned rectangle with corners `(x0,y0) (x1,y0) (x1,y1) (x0,y1)`.
fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Point> {
    vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ]
}

/// Base segments for a layout; empty under the same conditions as `generate_polygon`.
pub fn generate_segment_polygons(
    layout: Layout,
    dimensions: &Dimensions,
    orientation: Orientation,
) -> Vec<Segment> {
    if dimensions.layout() != layout {
        return Vec::new();
    }
    match *dimensions {
        Dimensions::Straight { length, depth } => {
            if !(usable(length) && usable(depth)) {
                return Vec::new();
            }
            vec![Segment::new(MAIN_SEGMENT, "Main", rect(0.0, 0.0, length, depth))]
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
            let x0 = match orientation {
                Orientation::LeftArm => 0.0,
                Orientation::RightArm => length_a - w,
            };
            vec![
                Segment::new("A", "Segment A (back)", rect(0.0, 0.0, length_a, w)),
                Segment::new("B", "Segment B (side)", rect(x0, depth, x0 + w, depth + length_b)),
            ]
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
                Segment::new("A", "Segment A (left)", rect(0.0, 0.0, w, length_left + depth)),
                Segment::new(
                    "B",
                    "Segment B (right)",
                    rect(outer - w, 0.0, outer, length_right + depth),
                ),
                Segment::new("C", "Segment C (middle)", rect(w, 0.0, outer - w, w)),
            ]
        }
    }
}

/// Base segments sliced at every divider position.
///
/// Dividers attach to a segment by case-insensitive id and are applied in
/// ascending `position` order. Segments without dividers pass through
/// unchanged, so an empty divider list reproduces `generate_segment_polygons`.
pub fn generate_segment_polygons_with_dividers(
    layout: Layout,
    dimensions: &Dimensions,
    orientation: Orientation,
    dividers: &[DividerElement],
) -> Vec<Segment> {
    let base = generate_segment_polygons(layout, dimensions, orientation);
    if dividers.is_empty() {
        return base;
    }
    let mut out = Vec::with_capacity(base.len() + dividers.len());
    for segment in base {
        let mut positions: Vec<f64> = dividers
            .iter()
            .filter(|d| d.segment_id.eq_ignore_ascii_case(&segment.segment_id))
            .map(|d| d.position)
            .filter(|p| p.is_finite())
            .map(|p| p.clamp(0.0, 1.0))
            .collect();
        if positions.is_empty() {
            out.push(segment);
            continue;
        }
        positions.sort_by(f64::total_cmp);
        out.extend(split::slice_segment(&segment, &positions));
    }
    tracing::trace!(segments = out.len(), dividers = dividers.len(), "segments split");
    out
}

#[cfg(test)]
mod tests;
