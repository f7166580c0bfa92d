//! Tunable constants for validation, auto-fix, and pricing.
//!
//! Policy
//! - Defaults are the shop's standard rules. Callers that need different
//!   numbers pass an explicit config to the `*_with` entry points; nothing
//!   here is read from global state.

use serde::{Deserialize, Serialize};

/// Default grid pitch for `geom::snap_to_grid` callers (cm).
pub const GRID_SIZE_CM: f64 = 1.0;

/// Candidate offsets tried by the overlap auto-fix: `x ∈ [x_start, x_end)`,
/// `y ∈ [y_start, y_end)`, both stepped by `step` (cm).
///
/// Best-effort window, not a solver: when every candidate collides the fix
/// returns the cutout unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanWindow {
    pub x_start: f64,
    pub x_end: f64,
    pub y_start: f64,
    pub y_end: f64,
    pub step: f64,
}

impl Default for ScanWindow {
    fn default() -> Self {
        Self {
            x_start: 10.0,
            x_end: 100.0,
            y_start: 10.0,
            y_end: 50.0,
            step: 10.0,
        }
    }
}

impl ScanWindow {
    /// Candidates in scan order (x outer, y inner). Empty for a non-positive step.
    pub fn candidates(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let xs = steps(self.x_start, self.x_end, self.step);
        xs.flat_map(move |x| steps(self.y_start, self.y_end, self.step).map(move |y| (x, y)))
    }
}

fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = if step > 0.0 && end > start {
        ((end - start) / step).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |k| start + k as f64 * step)
}

/// Placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationCfg {
    /// Minimum clearance between any cutout corner and the outer edge (cm).
    pub min_edge_distance_cm: f64,
    /// Lower bound for every U-shape dimension (cm).
    pub min_u_dimension_cm: f64,
    /// How far the edge-distance fix moves a cutout toward the centroid (cm).
    pub edge_fix_step_cm: f64,
    pub overlap_scan: ScanWindow,
}

impl Default for ValidationCfg {
    fn default() -> Self {
        Self {
            min_edge_distance_cm: 3.0,
            min_u_dimension_cm: 10.0,
            edge_fix_step_cm: 5.0,
            overlap_scan: ScanWindow::default(),
        }
    }
}

/// Rates used by the pricing engine (PLN).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingCfg {
    pub labor_per_sqm: f64,
    pub edge_per_cm: f64,
    pub cutting_per_cutout: f64,
    pub vat_rate: f64,
    /// Material rate when the style matches no catalog entry.
    pub default_material_per_sqm: f64,
}

impl Default for PricingCfg {
    fn default() -> Self {
        Self {
            labor_per_sqm: 50.0,
            edge_per_cm: 2.0,
            cutting_per_cutout: 30.0,
            vat_rate: 0.23,
            default_material_per_sqm: 120.0,
        }
    }
}
