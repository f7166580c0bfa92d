//! Build a small L-shaped design, validate it, repair what can be repaired and print a quote.
//!
//! Usage:
//!   cargo run -p countertop --example quote
//!   cargo run -p countertop --example quote -- mm

use countertop::api::*;
use countertop::prelude::*;

fn main() {
    let unit = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<Unit>().ok())
        .unwrap_or_default();
    let catalog = Catalog::default();

    let mut design = Design::new(Layout::LShape, catalog.materials[3].to_style());
    design.orientation = Orientation::RightArm;
    design.cutouts.push(Cutout::from_catalog("sink", CutoutKind::Sink, &catalog));
    let mut hob = Cutout::from_catalog("hob", CutoutKind::InductionHob, &catalog);
    hob.offset_x = 60.0;
    design.cutouts.push(hob);
    design
        .dividers
        .push(DividerElement::from_catalog("fridge", DividerKind::BuiltInFridge, "A", 0.7, &catalog));

    let errors = validate_design(&design);
    println!("{}", validation_summary(&errors));
    for e in &errors {
        println!("  [{}] {}", e.id, e.message);
        if let Some(fixed) = apply_auto_fix(e, &design) {
            println!("    auto-fixed");
            design = fixed;
        }
    }

    for s in generate_segment_polygons_with_dividers(design.layout, &design.dimensions, design.orientation, &design.dividers) {
        println!("segment {:>4}  {}", s.segment_id, s.name);
    }
    let fmt = unit.formatter();
    for line in generate_dimension_lines(&design, &fmt) {
        println!("dim {:?} {}", line.axis, line.label);
    }

    let p = calculate_pricing(&design);
    println!("area   {}", format_area(p.area));
    println!("edge   {}", format_length(p.edge_length));
    for (label, value) in p.line_items() {
        println!("{label:<9}{:>14}", format_price(value));
    }
}
