use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use countertop::api::*;
use countertop::catalog::Catalog;
use countertop::cfg::PricingCfg;
use countertop::model::Design;
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod table;

#[derive(Parser)]
#[command(name = "countertop")]
#[command(about = "Countertop geometry, validation and pricing")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Outer polygon vertices
    Polygon {
        #[arg(long)]
        design: PathBuf,
    },
    /// Named segments, split by the design's dividers
    Segments {
        #[arg(long)]
        design: PathBuf,
        /// Ignore dividers and print the base segments
        #[arg(long)]
        no_dividers: bool,
    },
    /// Placement errors as JSON; summary goes to the log
    Validate {
        #[arg(long)]
        design: PathBuf,
    },
    /// Apply the auto-fix for one error and write the updated design
    Fix {
        #[arg(long)]
        design: PathBuf,
        #[arg(long)]
        error_id: String,
        /// Defaults to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Cost breakdown; optionally export line items with a provenance sidecar
    Price {
        #[arg(long)]
        design: PathBuf,
        /// Catalog JSON replacing the built-in price list
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// CSV price sheet replacing the catalog's materials
        #[arg(long)]
        materials: Option<PathBuf>,
        /// .csv or .parquet
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Dimension lines labelled in the given unit
    Dims {
        #[arg(long)]
        design: PathBuf,
        #[arg(long, default_value = "cm")]
        units: Unit,
    },
    /// Print engine version and provenance block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    let stdout = std::io::stdout();
    run(cmd.action, &mut stdout.lock())
}

fn run(action: Action, out: &mut dyn Write) -> Result<()> {
    match action {
        Action::Polygon { design } => {
            let d = load_design(&design)?;
            emit(out, &generate_polygon(d.layout, &d.dimensions, d.orientation))
        }
        Action::Segments {
            design,
            no_dividers,
        } => {
            let d = load_design(&design)?;
            let segments = if no_dividers {
                generate_segment_polygons(d.layout, &d.dimensions, d.orientation)
            } else {
                generate_segment_polygons_with_dividers(d.layout, &d.dimensions, d.orientation, &d.dividers)
            };
            emit(out, &segments)
        }
        Action::Validate { design } => {
            let d = load_design(&design)?;
            let errors = validate_design(&d);
            tracing::info!(design = %design.display(), "{}", validation_summary(&errors));
            emit(out, &errors)
        }
        Action::Fix {
            design,
            error_id,
            out: target,
        } => fix(&design, &error_id, target.as_deref(), out),
        Action::Price {
            design,
            catalog,
            materials,
            out: target,
        } => price(&design, catalog.as_deref(), materials.as_deref(), target.as_deref(), out),
        Action::Dims { design, units } => {
            let d = load_design(&design)?;
            let fmt = units.formatter();
            emit(out, &generate_dimension_lines(&d, &fmt))
        }
        Action::Report => emit(out, &provenance::block(json!({}), &[], &[])),
    }
}

fn load_design(path: &Path) -> Result<Design> {
    let bytes = std::fs::read(path).with_context(|| format!("reading design {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing design {}", path.display()))
}

fn load_catalog(catalog: Option<&Path>, materials: Option<&Path>) -> Result<Catalog> {
    let mut c = match catalog {
        Some(path) => {
            let bytes = std::fs::read(path).with_context(|| format!("reading catalog {}", path.display()))?;
            serde_json::from_slice(&bytes).with_context(|| format!("parsing catalog {}", path.display()))?
        }
        None => Catalog::default(),
    };
    if let Some(path) = materials {
        c.materials = table::read_materials(path)?;
    }
    Ok(c)
}

fn emit<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn fix(design: &Path, error_id: &str, target: Option<&Path>, out: &mut dyn Write) -> Result<()> {
    let d = load_design(design)?;
    let errors = validate_design(&d);
    let Some(error) = errors.iter().find(|e| e.id == error_id) else {
        let known: Vec<_> = errors.iter().map(|e| e.id.as_str()).collect();
        bail!("no error '{error_id}' in {} (found: {known:?})", design.display());
    };
    if !can_auto_fix(error) {
        bail!("could not auto-fix '{error_id}': {:?} errors have no automatic repair", error.kind);
    }
    let Some(fixed) = apply_auto_fix(error, &d) else {
        bail!("could not auto-fix '{error_id}': no free position found");
    };
    let remaining = validate_design(&fixed).len();
    tracing::info!(error = error_id, remaining, "auto-fix applied");
    match target {
        Some(path) => {
            let bytes = serde_json::to_vec_pretty(&fixed)?;
            std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
            Ok(())
        }
        None => emit(out, &fixed),
    }
}

fn price(
    design: &Path,
    catalog: Option<&Path>,
    materials: Option<&Path>,
    target: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let d = load_design(design)?;
    let c = load_catalog(catalog, materials)?;
    let cfg = PricingCfg::default();
    let p = calculate_pricing_with(&d, &c, &cfg);
    tracing::info!(total = %format_price(p.total), area = %format_area(p.area), "priced");
    if let Some(path) = target {
        table::write_quote(&p, path)?;
        let params = json!({
            "catalog": catalog.map(|p| p.display().to_string()),
            "materials": materials.map(|p| p.display().to_string()),
            "rates": {
                "labor_per_sqm": cfg.labor_per_sqm,
                "edge_per_cm": cfg.edge_per_cm,
                "cutting_per_cutout": cfg.cutting_per_cutout,
                "vat_rate": cfg.vat_rate,
                "default_material_per_sqm": cfg.default_material_per_sqm
            },
            "total": p.total
        });
        provenance::write_sidecar(path, provenance::Payload::new(params).with_input(design))?;
    }
    emit(out, &p)
}
