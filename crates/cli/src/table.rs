//! Tabular I/O through polars: material price sheets in, quote line items out.

use anyhow::{bail, Context, Result};
use countertop::catalog::MaterialEntry;
use countertop::model::StyleKind;
use countertop::pricing::PricingBreakdown;
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Read a material price sheet.
///
/// Columns: `name`, `type` (`color`|`texture`), `value`, `price_per_sqm`, and
/// optionally `category`.
pub fn read_materials(path: &Path) -> Result<Vec<MaterialEntry>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "material sheet");

    let names = df.column("name")?.str()?;
    let kinds = df.column("type")?.str()?;
    let values = df.column("value")?.str()?;
    let prices = df.column("price_per_sqm")?.cast(&DataType::Float64)?;
    let prices = prices.f64()?;
    let categories = df.column("category").ok().and_then(|c| c.str().ok());

    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let row = i + 1;
        let kind = match kinds.get(i).map(str::to_ascii_lowercase).as_deref() {
            Some("color") => StyleKind::Color,
            Some("texture") => StyleKind::Texture,
            other => bail!("row {row}: unknown material type {other:?}"),
        };
        out.push(MaterialEntry {
            kind,
            value: values.get(i).with_context(|| format!("row {row}: missing value"))?.to_string(),
            name: names.get(i).with_context(|| format!("row {row}: missing name"))?.to_string(),
            price_per_sqm: prices.get(i).with_context(|| format!("row {row}: missing price_per_sqm"))?,
            category: categories.and_then(|c| c.get(i)).unwrap_or_default().to_string(),
        });
    }
    Ok(out)
}

/// Line items of a quote as a two-column frame (`item`, `amount_pln`),
/// followed by `area_m2` and `edge_length_cm`.
pub fn line_items_frame(p: &PricingBreakdown) -> Result<DataFrame> {
    let mut items: Vec<&str> = Vec::new();
    let mut amounts: Vec<f64> = Vec::new();
    for (label, value) in p.line_items() {
        items.push(label);
        amounts.push(value);
    }
    items.extend(["area_m2", "edge_length_cm"]);
    amounts.extend([p.area, p.edge_length]);
    Ok(df!("item" => items, "amount_pln" => amounts)?)
}

/// Write the quote as CSV or Parquet, chosen by extension.
pub fn write_quote(p: &PricingBreakdown, out: &Path) -> Result<()> {
    let ext = out
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let as_csv = match ext.as_deref() {
        Some("csv") => true,
        Some("parquet") => false,
        _ => bail!("unsupported output {}: expected .csv or .parquet", out.display()),
    };
    let mut df = line_items_frame(p)?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let create = || File::create(out).with_context(|| format!("creating {}", out.display()));
    if as_csv {
        let mut file = create()?;
        CsvWriter::new(&mut file).include_header(true).finish(&mut df)?;
    } else {
        ParquetWriter::new(create()?).finish(&mut df)?;
    }
    tracing::info!(out = %out.display(), rows = df.height(), "quote written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use countertop::api::calculate_pricing;
    use countertop::prelude::*;
    use tempfile::tempdir;

    #[test]
    fn materials_from_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        std::fs::write(
            &path,
            "name,type,value,price_per_sqm,category\nWhite,color,#FFFFFF,95,solid\nOak,Texture,raw-oak,210.5,wood\n",
        )
        .unwrap();
        let m = read_materials(&path).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m[0].kind, StyleKind::Color);
        assert_eq!(m[1].kind, StyleKind::Texture);
        assert_eq!(m[1].value, "raw-oak");
        assert!((m[1].price_per_sqm - 210.5).abs() < 1e-12);
    }

    #[test]
    fn bad_material_type_names_the_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prices.csv");
        std::fs::write(&path, "name,type,value,price_per_sqm\nX,metal,#000,10\n").unwrap();
        let err = read_materials(&path).unwrap_err().to_string();
        assert!(err.contains("row 1"), "{err}");
    }

    #[test]
    fn quote_csv_has_all_items() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("q").join("quote.csv");
        let design = Design::new(Layout::Straight, Catalog::default().materials[0].to_style());
        write_quote(&calculate_pricing(&design), &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.starts_with("item,amount_pln"));
        assert_eq!(text.lines().count(), 1 + 9);
        assert!(text.contains("total,"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("quote.xlsx");
        let design = Design::new(Layout::Straight, Catalog::default().materials[0].to_style());
        assert!(write_quote(&calculate_pricing(&design), &out).is_err());
    }
}
