//! Planar primitives shared by every component (points, boxes, rectangles).
//!
//! Purpose
//! - One place for the small predicates the engine is built from: bounding
//!   box, odd-even point-in-polygon, point-to-segment distance, shoelace area,
//!   perimeter, vertex centroid, and axis-aligned rectangle overlap.
//!
//! Conventions
//! - Units are centimeters; origin is the top-left of the design frame, `y`
//!   grows toward the front edge.
//! - Polygons are closed implicitly: the edge `[n-1] → [0]` is part of the loop.
//! - An empty slice is a valid input everywhere and yields a neutral value.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// A point in the design frame (cm).
pub type Point = Vector2<f64>;

/// Axis-aligned extent of a vertex set.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BBox {
    /// Bounding box of `points`; `None` for an empty slice.
    pub fn of(points: &[Point]) -> Option<BBox> {
        let first = points.first()?;
        let init = BBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| BBox {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed containment test.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Rectangle of `width × height` centered on `center`.
    #[inline]
    pub fn centered(center: Point, width: f64, height: f64) -> Rect {
        Rect {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }

    /// Corners in order top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        let (x0, y0) = (self.x, self.y);
        let (x1, y1) = (self.x + self.width, self.y + self.height);
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    /// Strict overlap: rectangles that only share an edge do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        do_rectangles_overlap(self, other)
    }
}

/// Standard AABB overlap with touching edges excluded.
pub fn do_rectangles_overlap(r1: &Rect, r2: &Rect) -> bool {
    !(r1.x + r1.width <= r2.x
        || r2.x + r2.width <= r1.x
        || r1.y + r1.height <= r2.y
        || r2.y + r2.height <= r1.y)
}

/// Odd-even ray casting. Points exactly on an edge may land on either side.
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.y > p.y) != (pj.y > p.y) {
            let x_cross = (pj.x - pi.x) * (p.y - pi.y) / (pj.y - pi.y) + pi.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Euclidean distance from `p` to the closed segment `a–b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len_sq = ab.norm_squared();
    let closest = if len_sq == 0.0 {
        a
    } else {
        let t = (p - a).dot(&ab) / len_sq;
        a + ab * t.clamp(0.0, 1.0)
    };
    (p - closest).norm()
}

/// Minimum distance from `p` to any edge of the closed loop `polygon`.
///
/// `f64::INFINITY` for an empty polygon.
pub fn distance_to_edge(p: Point, polygon: &[Point]) -> f64 {
    edges(polygon)
        .map(|(a, b)| distance_to_segment(p, a, b))
        .fold(f64::INFINITY, f64::min)
}

/// Shoelace sum over the closed loop divided by two (sign = orientation).
pub fn signed_area(polygon: &[Point]) -> f64 {
    edges(polygon)
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum::<f64>()
        / 2.0
}

/// Unsigned shoelace area (cm² for design polygons).
#[inline]
pub fn shoelace_area(polygon: &[Point]) -> f64 {
    signed_area(polygon).abs()
}

/// Sum of edge lengths over the closed loop.
pub fn perimeter(polygon: &[Point]) -> f64 {
    edges(polygon).map(|(a, b)| (b - a).norm()).sum()
}

/// Mean of the vertices. Not the area centroid; auto-fix relies on this exact definition.
pub fn centroid(polygon: &[Point]) -> Option<Point> {
    if polygon.is_empty() {
        return None;
    }
    let sum = polygon.iter().fold(Point::zeros(), |acc, p| acc + p);
    Some(sum / polygon.len() as f64)
}

/// Rounds `value` to the nearest multiple of `grid_size`. Non-positive grids are a no-op.
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    if !(grid_size > 0.0) {
        return value;
    }
    (value / grid_size).round() * grid_size
}

fn edges(polygon: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| (polygon[i], polygon[(i + 1) % n]))
}
