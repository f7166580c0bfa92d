//! Dimension lines for drawings and exports.
//!
//! Produces geometry and labels only; drawing is the renderer's job. The
//! label formatter is injected so the same lines serve every display unit.

use serde::{Deserialize, Serialize};

use crate::geom::{BBox, Point};
use crate::model::{Design, Dimensions, Orientation, RefX, RefY};
use crate::placement::calculate_cutout_position;
use crate::polygon::{generate_polygon, inner_gap};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A measured span with its label. `offset` is the drawing offset
/// perpendicular to the span, in screen units (negative = up/left).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub start: Point,
    pub end: Point,
    pub label: String,
    pub offset: f64,
    pub axis: Axis,
}

fn line(start: Point, end: Point, label: String, offset: f64, axis: Axis) -> DimensionLine {
    DimensionLine {
        start,
        end,
        label,
        offset,
        axis,
    }
}

/// Overall dimensions of the top followed by size and offset lines for each cutout.
/// Empty when the design has no outer polygon.
pub fn generate_dimension_lines(design: &Design, fmt: &dyn Fn(f64) -> String) -> Vec<DimensionLine> {
    let polygon = generate_polygon(design.layout, &design.dimensions, design.orientation);
    let Some(b) = BBox::of(&polygon) else {
        return Vec::new();
    };
    let p = Point::new;
    let (h, v) = (Axis::Horizontal, Axis::Vertical);
    let mut lines = Vec::new();

    match design.dimensions {
        Dimensions::Straight { length, depth } => {
            lines.push(line(p(b.min_x, b.min_y), p(b.max_x, b.min_y), fmt(length), -30.0, h));
            lines.push(line(p(b.min_x, b.min_y), p(b.min_x, b.max_y), fmt(depth), -30.0, v));
        }
        Dimensions::LShape {
            length_a,
            length_b,
            depth,
        } => {
            lines.push(line(p(b.min_x, b.min_y), p(length_a, b.min_y), fmt(length_a), -30.0, h));
            match design.orientation {
                Orientation::LeftArm => {
                    lines.push(line(p(b.min_x, depth), p(b.min_x, b.max_y), fmt(length_b), -50.0, v));
                }
                Orientation::RightArm => {
                    lines.push(line(p(length_a, depth), p(length_a, b.max_y), fmt(length_b), 20.0, v));
                }
            }
            lines.push(line(p(b.min_x, b.min_y), p(b.min_x, depth), fmt(depth), -30.0, v));
        }
        Dimensions::UShape {
            length_left,
            length_right,
            gap_width,
            depth,
        } => {
            let gap = inner_gap(depth, gap_width);
            lines.push(line(p(b.min_x, b.min_y), p(b.max_x, b.min_y), fmt(gap_width), -30.0, h));
            lines.push(line(p(b.min_x, b.min_y), p(b.min_x + depth, b.min_y), fmt(depth), -18.0, h));
            lines.push(line(p(b.max_x - depth, b.min_y), p(b.max_x, b.min_y), fmt(depth), -18.0, h));
            lines.push(line(p(b.min_x + depth, b.min_y), p(b.max_x - depth, b.min_y), fmt(gap), -45.0, h));
            let top = b.min_y + depth;
            lines.push(line(p(b.min_x, top), p(b.min_x, top + length_left), fmt(length_left), -30.0, v));
            lines.push(line(p(b.max_x, top), p(b.max_x, top + length_right), fmt(length_right), 20.0, v));
        }
    }

    for cutout in &design.cutouts {
        let at = calculate_cutout_position(cutout, &polygon);
        let (hw, hd) = (cutout.width / 2.0, cutout.depth / 2.0);
        lines.push(line(
            p(at.x - hw, at.y - hd),
            p(at.x + hw, at.y - hd),
            format!("{}×{}", fmt(cutout.width), fmt(cutout.depth)),
            -15.0,
            h,
        ));
        let (xs, xe) = match cutout.reference_x {
            RefX::Left => (p(b.min_x, at.y), at),
            RefX::Right => (at, p(b.max_x, at.y)),
        };
        lines.push(line(xs, xe, fmt(cutout.offset_x), 15.0, h));
        let (ys, ye) = match cutout.reference_y {
            RefY::Front => (p(at.x, b.min_y), at),
            RefY::Back => (at, p(at.x, b.max_y)),
        };
        lines.push(line(ys, ye, fmt(cutout.offset_y), 15.0, v));
    }
    lines
}
