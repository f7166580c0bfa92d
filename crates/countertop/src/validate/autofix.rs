//! Best-effort repairs for placement errors.
//!
//! - `EdgeDistance`: nudge the center `edge_fix_step_cm` toward the vertex centroid.
//! - `OutsideBounds`: move the center onto the vertex centroid.
//! - `Overlap`: first offset in the scan window whose footprint clears every
//!   other cutout; the cutout comes back unchanged when none does. Callers
//!   must compare against the original to detect that no-op.
//! - `DimensionInvalid`: no suggestion.
//!
//! Repaired offsets are snapped to `GRID_SIZE_CM` (whole centimeters).
//! Repairs are not re-validated: a suggestion may still trip a different rule.

use crate::cfg::{ScanWindow, ValidationCfg, GRID_SIZE_CM};
use crate::geom::{centroid, snap_to_grid, Point};
use crate::model::{Cutout, Design, ErrorKind, ValidationError};
use crate::placement::{calculate_cutout_position, calculate_offsets_from_position, cutout_rect};
use crate::polygon::generate_polygon;

/// Suggest a replacement cutout with the default rules.
pub fn get_auto_fix_suggestion(error: &ValidationError, design: &Design) -> Option<Cutout> {
    get_auto_fix_suggestion_with(error, design, &ValidationCfg::default())
}

pub fn get_auto_fix_suggestion_with(
    error: &ValidationError,
    design: &Design,
    cfg: &ValidationCfg,
) -> Option<Cutout> {
    if !error.kind.can_auto_fix() {
        return None;
    }
    let polygon = generate_polygon(design.layout, &design.dimensions, design.orientation);
    if polygon.is_empty() {
        return None;
    }
    let cutout = target_cutout(error, design)?;
    let fixed = match error.kind {
        ErrorKind::EdgeDistance => nudge_toward_centroid(cutout, &polygon, cfg.edge_fix_step_cm),
        ErrorKind::OutsideBounds => move_to_centroid(cutout, &polygon),
        ErrorKind::Overlap => scan_free_offset(cutout, design, &polygon, &cfg.overlap_scan),
        ErrorKind::DimensionInvalid => return None,
    };
    tracing::debug!(
        error = %error.id,
        cutout = %cutout.id,
        changed = fixed != *cutout,
        "auto-fix suggestion"
    );
    Some(fixed)
}

/// Design with the suggested cutout swapped in, or `None` when there is no
/// suggestion or the suggestion changes nothing.
pub fn apply_auto_fix(error: &ValidationError, design: &Design) -> Option<Design> {
    let fixed = get_auto_fix_suggestion(error, design)?;
    let slot = design.cutouts.iter().position(|c| c.id == fixed.id)?;
    if design.cutouts[slot] == fixed {
        return None;
    }
    let mut out = design.clone();
    out.cutouts[slot] = fixed;
    Some(out)
}

/// The cutout an error is about: first listed id, else the cutout whose id
/// prefixes the error id (errors built without the id list).
fn target_cutout<'a>(error: &ValidationError, design: &'a Design) -> Option<&'a Cutout> {
    match error.cutouts.first() {
        Some(id) => design.cutout(id),
        None => design
            .cutouts
            .iter()
            .find(|c| error.id.starts_with(&format!("{}-", c.id))),
    }
}

fn with_center(cutout: &Cutout, center: Point, polygon: &[Point]) -> Cutout {
    let o = calculate_offsets_from_position(center, polygon, cutout.reference_x, cutout.reference_y);
    Cutout {
        offset_x: snap_to_grid(o.offset_x, GRID_SIZE_CM),
        offset_y: snap_to_grid(o.offset_y, GRID_SIZE_CM),
        ..cutout.clone()
    }
}

fn nudge_toward_centroid(cutout: &Cutout, polygon: &[Point], step: f64) -> Cutout {
    let Some(target) = centroid(polygon) else {
        return cutout.clone();
    };
    let current = calculate_cutout_position(cutout, polygon);
    let dir = target - current;
    let len = dir.norm();
    // already on the centroid: no direction to move in
    if !(len > f64::EPSILON) {
        return cutout.clone();
    }
    with_center(cutout, current + dir * (step / len), polygon)
}

fn move_to_centroid(cutout: &Cutout, polygon: &[Point]) -> Cutout {
    match centroid(polygon) {
        Some(c) => with_center(cutout, c, polygon),
        None => cutout.clone(),
    }
}

fn scan_free_offset(cutout: &Cutout, design: &Design, polygon: &[Point], window: &ScanWindow) -> Cutout {
    let others: Vec<_> = design
        .cutouts
        .iter()
        .filter(|c| c.id != cutout.id)
        .map(|c| cutout_rect(c, polygon))
        .collect();
    for (offset_x, offset_y) in window.candidates() {
        let candidate = Cutout {
            offset_x,
            offset_y,
            ..cutout.clone()
        };
        let rect = cutout_rect(&candidate, polygon);
        if !others.iter().any(|o| rect.overlaps(o)) {
            return candidate;
        }
    }
    cutout.clone()
}
