//! Cost breakdown for a design.
//!
//! Area and edge length come from the true outer polygon (shoelace area,
//! closed-loop perimeter) and are zero when the polygon is empty. The cutout
//! cost is summed over the cutout list regardless of the polygon, so a design
//! with cutouts but unusable dimensions still carries a cutout cost.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::cfg::PricingCfg;
use crate::geom::{perimeter, shoelace_area};
use crate::model::Design;
use crate::polygon::generate_polygon;

const CM2_PER_M2: f64 = 10_000.0;

/// Money in PLN, `area` in m², `edge_length` in cm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingBreakdown {
    pub material_cost: f64,
    pub labor_cost: f64,
    pub edge_cost: f64,
    pub cutout_cost: f64,
    pub subtotal: f64,
    pub vat: f64,
    pub total: f64,
    pub area: f64,
    pub edge_length: f64,
}

impl PricingBreakdown {
    /// Labelled line items in display order.
    pub fn line_items(&self) -> [(&'static str, f64); 7] {
        [
            ("material", self.material_cost),
            ("labor", self.labor_cost),
            ("edge", self.edge_cost),
            ("cutouts", self.cutout_cost),
            ("subtotal", self.subtotal),
            ("vat", self.vat),
            ("total", self.total),
        ]
    }
}

/// Price with the built-in catalog and rates.
pub fn calculate_pricing(design: &Design) -> PricingBreakdown {
    calculate_pricing_with(design, &Catalog::default(), &PricingCfg::default())
}

pub fn calculate_pricing_with(design: &Design, catalog: &Catalog, cfg: &PricingCfg) -> PricingBreakdown {
    let polygon = generate_polygon(design.layout, &design.dimensions, design.orientation);
    let area = shoelace_area(&polygon) / CM2_PER_M2;
    let edge_length = perimeter(&polygon);

    let material_rate = catalog
        .material(&design.style)
        .map_or(cfg.default_material_per_sqm, |m| m.price_per_sqm);

    let material_cost = area * material_rate;
    let labor_cost = area * cfg.labor_per_sqm;
    let edge_cost = edge_length * cfg.edge_per_cm;
    let cutout_cost: f64 = design
        .cutouts
        .iter()
        .map(|c| catalog.cutout_price(c.kind) + cfg.cutting_per_cutout)
        .sum();

    let subtotal = material_cost + labor_cost + edge_cost + cutout_cost;
    let vat = subtotal * cfg.vat_rate;
    let total = subtotal + vat;
    tracing::debug!(area, edge_length, subtotal, total, "design priced");

    PricingBreakdown {
        material_cost,
        labor_cost,
        edge_cost,
        cutout_cost,
        subtotal,
        vat,
        total,
        area,
        edge_length,
    }
}

/// `1234.5` → `"1 234,50 zł"`.
pub fn format_price(price: f64) -> String {
    let cents = (price.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    let sign = if price < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped},{frac:02} zł")
}

/// Area in m² with two decimals.
pub fn format_area(area: f64) -> String {
    format!("{area:.2} m²")
}

/// Length in whole centimeters.
pub fn format_length(length: f64) -> String {
    format!("{length:.0} cm")
}
