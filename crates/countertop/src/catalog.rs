//! Price list: materials, cutout types, divider types.
//!
//! `Catalog::default()` is the built-in list. Hosts may replace it wholesale
//! (it is serde-friendly) and pass it to `pricing::calculate_pricing_with`.

use serde::{Deserialize, Serialize};

use crate::model::{CountertopStyle, CutoutKind, DividerKind, StyleKind};

/// One purchasable finish.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialEntry {
    #[serde(rename = "type")]
    pub kind: StyleKind,
    pub value: String,
    pub name: String,
    pub price_per_sqm: f64,
    pub category: String,
}

impl MaterialEntry {
    /// Style value selecting this material.
    pub fn to_style(&self) -> CountertopStyle {
        CountertopStyle {
            kind: self.kind,
            value: self.value.clone(),
            name: self.name.clone(),
            price_per_sqm: Some(self.price_per_sqm),
            category: Some(self.category.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CutoutSpec {
    pub kind: CutoutKind,
    pub name: String,
    pub default_width: f64,
    pub default_depth: f64,
    /// Fixed price of the opening, before the cutting surcharge.
    pub price: f64,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerSpec {
    pub kind: DividerKind,
    pub name: String,
    pub default_width: f64,
    pub price: f64,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub materials: Vec<MaterialEntry>,
    pub cutouts: Vec<CutoutSpec>,
    pub dividers: Vec<DividerSpec>,
}

impl Catalog {
    /// Material whose `value` and `kind` both match the style exactly.
    pub fn material(&self, style: &CountertopStyle) -> Option<&MaterialEntry> {
        self.materials
            .iter()
            .find(|m| m.value == style.value && m.kind == style.kind)
    }

    pub fn cutout(&self, kind: CutoutKind) -> Option<&CutoutSpec> {
        self.cutouts.iter().find(|c| c.kind == kind)
    }

    pub fn divider(&self, kind: DividerKind) -> Option<&DividerSpec> {
        self.dividers.iter().find(|d| d.kind == kind)
    }

    /// Catalog price of one opening of `kind`; 0 when the type is not listed.
    pub fn cutout_price(&self, kind: CutoutKind) -> f64 {
        self.cutout(kind).map_or(0.0, |c| c.price)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            materials: default_materials(),
            cutouts: default_cutouts(),
            dividers: default_dividers(),
        }
    }
}

fn material(kind: StyleKind, value: &str, name: &str, price: f64, category: &str) -> MaterialEntry {
    MaterialEntry {
        kind,
        value: value.into(),
        name: name.into(),
        price_per_sqm: price,
        category: category.into(),
    }
}

fn default_materials() -> Vec<MaterialEntry> {
    use StyleKind::{Color, Texture};
    vec![
        material(Color, "#FFFFFF", "White", 90.0, "colors"),
        material(Color, "#F8F8FF", "Ivory", 95.0, "colors"),
        material(Color, "#F5F5DC", "Beige", 100.0, "colors"),
        material(Color, "#D2B48C", "Light brown", 110.0, "colors"),
        material(Color, "#8B4513", "Brown", 120.0, "colors"),
        material(Color, "#F5F5F5", "Light gray", 105.0, "colors"),
        material(Color, "#D3D3D3", "Mid gray", 115.0, "colors"),
        material(Color, "#696969", "Gray", 130.0, "colors"),
        material(Color, "#2F4F4F", "Dark gray", 140.0, "colors"),
        material(Texture, "texture/pebbled-counter.png", "Stone - pebbled", 220.0, "stone"),
        material(Texture, "texture/grained-wood.png", "Wood - fine grain", 180.0, "wood"),
        material(Texture, "texture/oak-bare.png", "Wood - raw oak", 190.0, "wood"),
        material(Texture, "texture/bamboo-semigloss.png", "Wood - bamboo", 170.0, "wood"),
        material(Texture, "texture/marble-white.svg", "Marble - white", 240.0, "stone"),
        material(Texture, "texture/granite-gray.svg", "Granite - gray", 230.0, "stone"),
        material(Texture, "texture/concrete-light.svg", "Concrete - light", 160.0, "modern"),
        material(Texture, "texture/stainless-brushed.svg", "Steel - brushed", 280.0, "modern"),
        material(Texture, "texture/quartz-speckled.svg", "Quartz - speckled", 260.0, "stone"),
    ]
}

fn default_cutouts() -> Vec<CutoutSpec> {
    use CutoutKind::*;
    let rows: [(CutoutKind, &str, f64, f64, f64, &str); 12] = [
        (Sink, "Sink", 40.0, 40.0, 150.0, "sinks"),
        (CornerSink, "Corner sink", 50.0, 50.0, 200.0, "sinks"),
        (DoubleSink, "Double sink", 80.0, 40.0, 250.0, "sinks"),
        (InductionHob, "Induction hob", 60.0, 52.0, 200.0, "hobs"),
        (InductionHobSmall, "Induction hob (small)", 45.0, 40.0, 180.0, "hobs"),
        (InductionHobLarge, "Induction hob (large)", 75.0, 52.0, 250.0, "hobs"),
        (GasHob, "Gas hob", 60.0, 52.0, 180.0, "hobs"),
        (MixedHob, "Mixed hob", 90.0, 52.0, 300.0, "hobs"),
        (TapHole, "Tap hole", 3.5, 3.5, 50.0, "other"),
        (SoapDispenser, "Soap dispenser", 3.0, 3.0, 40.0, "other"),
        (WaterFilter, "Water filter", 4.0, 4.0, 60.0, "other"),
        (CornerNotch, "Corner notch", 20.0, 20.0, 80.0, "other"),
    ];
    rows.into_iter()
        .map(|(kind, name, w, d, price, cat)| CutoutSpec {
            kind,
            name: name.into(),
            default_width: w,
            default_depth: d,
            price,
            category: cat.into(),
        })
        .collect()
}

fn default_dividers() -> Vec<DividerSpec> {
    use DividerKind::*;
    let rows: [(DividerKind, &str, f64, f64, &str); 5] = [
        (StandingCabinet, "Standing cabinet", 60.0, 500.0, "cabinets"),
        (Gap, "Gap", 10.0, 0.0, "gaps"),
        (Column, "Column", 30.0, 200.0, "structural"),
        (BuiltInFridge, "Built-in fridge", 60.0, 0.0, "appliances"),
        (Dishwasher, "Dishwasher", 60.0, 0.0, "appliances"),
    ];
    rows.into_iter()
        .map(|(kind, name, w, price, cat)| DividerSpec {
            kind,
            name: name.into(),
            default_width: w,
            price,
            category: cat.into(),
        })
        .collect()
}
