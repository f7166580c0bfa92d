//! Placement rules over a whole design, plus best-effort repairs.
//!
//! Checks (all run; findings accumulate)
//! - U-shape dimension guard: each of depth, C, left, right ≥ `min_u_dimension_cm`.
//! - Per cutout: all four corners inside the *true* outer polygon
//!   (`OutsideBounds`), and the nearest corner at least
//!   `min_edge_distance_cm` from the boundary (`EdgeDistance`).
//! - Per unordered cutout pair: footprint overlap (`Overlap`).
//!
//! An empty outer polygon stops after the dimension guard; no placement check
//! is meaningful without material.

mod autofix;

use crate::cfg::ValidationCfg;
use crate::geom::{distance_to_edge, point_in_polygon};
use crate::model::{Design, Dimensions, ErrorKind, Layout, ValidationError};
use crate::placement::{calculate_cutout_position, cutout_rect};
use crate::polygon::generate_polygon;

pub use autofix::{apply_auto_fix, get_auto_fix_suggestion, get_auto_fix_suggestion_with};

/// Validate with the default rules.
pub fn validate_design(design: &Design) -> Vec<ValidationError> {
    validate_design_with(design, &ValidationCfg::default())
}

pub fn validate_design_with(design: &Design, cfg: &ValidationCfg) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if design.layout == Layout::UShape {
        check_u_dimensions(&design.dimensions, cfg.min_u_dimension_cm, &mut errors);
    }

    let polygon = generate_polygon(design.layout, &design.dimensions, design.orientation);
    if polygon.is_empty() {
        tracing::debug!(errors = errors.len(), "no outer polygon; placement checks skipped");
        return errors;
    }

    let rects: Vec<_> = design.cutouts.iter().map(|c| cutout_rect(c, &polygon)).collect();
    for (cutout, rect) in design.cutouts.iter().zip(&rects) {
        let center = calculate_cutout_position(cutout, &polygon);
        let corners = rect.corners();

        if corners.iter().any(|&c| !point_in_polygon(c, &polygon)) {
            errors.push(ValidationError {
                id: format!("{}-outside", cutout.id),
                kind: ErrorKind::OutsideBounds,
                message: format!("{} extends beyond the countertop", cutout.name),
                position: Some(center),
                cutouts: vec![cutout.id.clone()],
            });
        }

        let nearest = corners
            .iter()
            .map(|&c| distance_to_edge(c, &polygon))
            .fold(f64::INFINITY, f64::min);
        if nearest < cfg.min_edge_distance_cm {
            errors.push(ValidationError {
                id: format!("{}-edge", cutout.id),
                kind: ErrorKind::EdgeDistance,
                message: format!(
                    "{} is too close to the edge (min. {} cm)",
                    cutout.name, cfg.min_edge_distance_cm
                ),
                position: Some(center),
                cutouts: vec![cutout.id.clone()],
            });
        }
    }

    for i in 0..design.cutouts.len() {
        for j in (i + 1)..design.cutouts.len() {
            if !rects[i].overlaps(&rects[j]) {
                continue;
            }
            let (a, b) = (&design.cutouts[i], &design.cutouts[j]);
            let pa = calculate_cutout_position(a, &polygon);
            let pb = calculate_cutout_position(b, &polygon);
            errors.push(ValidationError {
                id: format!("{}-{}-overlap", a.id, b.id),
                kind: ErrorKind::Overlap,
                message: format!("{} overlaps {}", a.name, b.name),
                position: Some((pa + pb) / 2.0),
                cutouts: vec![a.id.clone(), b.id.clone()],
            });
        }
    }

    tracing::debug!(
        cutouts = design.cutouts.len(),
        errors = errors.len(),
        "design validated"
    );
    errors
}

fn check_u_dimensions(dims: &Dimensions, min: f64, errors: &mut Vec<ValidationError>) {
    let (left, right, gap, depth) = match *dims {
        Dimensions::UShape {
            length_left,
            length_right,
            gap_width,
            depth,
        } => (length_left, length_right, gap_width, depth),
        // fields of a U top are absent from other variants
        _ => (0.0, 0.0, 0.0, dims.depth()),
    };
    let fields = [
        ("dim-depth", "Depth", depth),
        ("dim-gap", "Top width (C)", gap),
        ("dim-left", "Left arm length", left),
        ("dim-right", "Right arm length", right),
    ];
    for (id, label, value) in fields {
        if !(value >= min) {
            errors.push(ValidationError {
                id: id.to_string(),
                kind: ErrorKind::DimensionInvalid,
                message: format!("{label} must be >= {min} cm"),
                position: None,
                cutouts: Vec::new(),
            });
        }
    }
}

impl ErrorKind {
    /// Whether `get_auto_fix_suggestion` can propose a repair for this kind.
    #[inline]
    pub fn can_auto_fix(self) -> bool {
        !matches!(self, ErrorKind::DimensionInvalid)
    }
}

/// False only for dimension errors.
#[inline]
pub fn can_auto_fix(error: &ValidationError) -> bool {
    error.kind.can_auto_fix()
}

/// One-line human summary of a validation run.
pub fn validation_summary(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "All checks passed".to_string();
    }
    let count = |k: ErrorKind| errors.iter().filter(|e| e.kind == k).count();
    let parts: Vec<String> = [
        (ErrorKind::EdgeDistance, "too close to an edge"),
        (ErrorKind::Overlap, "overlapping"),
        (ErrorKind::OutsideBounds, "outside the countertop"),
        (ErrorKind::DimensionInvalid, "invalid dimensions"),
    ]
    .into_iter()
    .filter_map(|(k, label)| match count(k) {
        0 => None,
        n => Some(format!("{n} {label}")),
    })
    .collect();
    format!("Found {} problems: {}", errors.len(), parts.join(", "))
}
