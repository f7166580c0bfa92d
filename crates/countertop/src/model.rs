//! Design description: layout family, dimensions, style, cutouts, dividers.
//!
//! Values here are plain data owned by the caller. The engine only reads them
//! and hands back fresh derived values.
//!
//! Persistence
//! - A `Design` round-trips through JSON with camelCase keys. The `dimensions`
//!   object on disk is the superset record
//!   `{length, depth, lengthA, lengthB, lengthLeft, lengthRight, gapWidth}`;
//!   loading picks the variant named by `layout` and fills absent fields
//!   with 0, which downstream generators treat as geometrically empty.
//! - There is no schema version.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::geom::Point;

/// Countertop topology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Straight,
    LShape,
    UShape,
}

/// Side of the vertical arm of an L-shaped top. Ignored by other layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orientation {
    #[default]
    LeftArm,
    RightArm,
}

/// Per-layout dimensions in cm, one variant per layout family.
///
/// `UShape::gap_width` is the total outer width C of the top bar. The inner
/// gap is derived (see `polygon::inner_gap`) and never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimensions {
    Straight {
        length: f64,
        depth: f64,
    },
    LShape {
        length_a: f64,
        length_b: f64,
        depth: f64,
    },
    UShape {
        length_left: f64,
        length_right: f64,
        gap_width: f64,
        depth: f64,
    },
}

impl Dimensions {
    /// Layout family this variant describes.
    pub fn layout(&self) -> Layout {
        match self {
            Dimensions::Straight { .. } => Layout::Straight,
            Dimensions::LShape { .. } => Layout::LShape,
            Dimensions::UShape { .. } => Layout::UShape,
        }
    }

    pub fn depth(&self) -> f64 {
        match *self {
            Dimensions::Straight { depth, .. }
            | Dimensions::LShape { depth, .. }
            | Dimensions::UShape { depth, .. } => depth,
        }
    }

    /// Starting dimensions offered when a layout is picked.
    pub fn defaults_for(layout: Layout) -> Dimensions {
        match layout {
            Layout::Straight => Dimensions::Straight {
                length: 300.0,
                depth: 60.0,
            },
            Layout::LShape => Dimensions::LShape {
                length_a: 200.0,
                length_b: 150.0,
                depth: 60.0,
            },
            Layout::UShape => Dimensions::UShape {
                length_left: 150.0,
                length_right: 150.0,
                gap_width: 100.0,
                depth: 60.0,
            },
        }
    }

    /// Variant for `layout` from a superset record; absent fields become 0.
    pub fn from_record(layout: Layout, r: &DimensionsRecord) -> Dimensions {
        let depth = r.depth.unwrap_or(0.0);
        match layout {
            Layout::Straight => Dimensions::Straight {
                length: r.length.unwrap_or(0.0),
                depth,
            },
            Layout::LShape => Dimensions::LShape {
                length_a: r.length_a.unwrap_or(0.0),
                length_b: r.length_b.unwrap_or(0.0),
                depth,
            },
            Layout::UShape => Dimensions::UShape {
                length_left: r.length_left.unwrap_or(0.0),
                length_right: r.length_right.unwrap_or(0.0),
                gap_width: r.gap_width.unwrap_or(0.0),
                depth,
            },
        }
    }

    /// Superset record carrying only this variant's fields.
    pub fn to_record(self) -> DimensionsRecord {
        let mut r = DimensionsRecord {
            depth: Some(self.depth()),
            ..Default::default()
        };
        match self {
            Dimensions::Straight { length, .. } => r.length = Some(length),
            Dimensions::LShape {
                length_a, length_b, ..
            } => {
                r.length_a = Some(length_a);
                r.length_b = Some(length_b);
            }
            Dimensions::UShape {
                length_left,
                length_right,
                gap_width,
                ..
            } => {
                r.length_left = Some(length_left);
                r.length_right = Some(length_right);
                r.gap_width = Some(gap_width);
            }
        }
        r
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    Texture,
    Color,
}

/// Finish applied to the whole top or to one segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountertopStyle {
    #[serde(rename = "type")]
    pub kind: StyleKind,
    /// Hex color or texture path; together with `kind` it identifies a catalog material.
    pub value: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_per_sqm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStyle {
    pub segment_id: String,
    #[serde(default)]
    pub name: String,
    pub style: CountertopStyle,
}

/// Opening types known to the catalog. Unknown type strings load as `Custom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CutoutKind {
    Sink,
    CornerSink,
    DoubleSink,
    InductionHob,
    InductionHobSmall,
    InductionHobLarge,
    GasHob,
    MixedHob,
    TapHole,
    SoapDispenser,
    WaterFilter,
    CornerNotch,
    #[serde(other)]
    Custom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefX {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefY {
    Front,
    Back,
}

/// Rectangular opening placed by offsets from a bounding-box corner.
///
/// Offsets plus reference corners are canonical; the absolute center is
/// always derived (`placement::calculate_cutout_position`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cutout {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CutoutKind,
    pub width: f64,
    pub depth: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub reference_x: RefX,
    pub reference_y: RefY,
}

impl Cutout {
    /// New cutout of `kind` with catalog default size, 50 cm from the left and 30 cm from the front.
    pub fn from_catalog(id: impl Into<String>, kind: CutoutKind, catalog: &Catalog) -> Cutout {
        let spec = catalog.cutout(kind);
        Cutout {
            id: id.into(),
            name: spec.map(|s| s.name.clone()).unwrap_or_else(|| "Cutout".into()),
            kind,
            width: spec.map_or(10.0, |s| s.default_width),
            depth: spec.map_or(10.0, |s| s.default_depth),
            offset_x: 50.0,
            offset_y: 30.0,
            reference_x: RefX::Left,
            reference_y: RefY::Front,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DividerKind {
    StandingCabinet,
    Gap,
    Column,
    BuiltInFridge,
    Dishwasher,
    #[serde(other)]
    Custom,
}

/// Linear element splitting a segment at a fractional position (0 = start, 1 = end).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DividerKind,
    pub name: String,
    pub width: f64,
    pub segment_id: String,
    pub position: f64,
    #[serde(default)]
    pub price: f64,
}

impl DividerElement {
    pub fn from_catalog(
        id: impl Into<String>,
        kind: DividerKind,
        segment_id: impl Into<String>,
        position: f64,
        catalog: &Catalog,
    ) -> DividerElement {
        let spec = catalog.divider(kind);
        DividerElement {
            id: id.into(),
            kind,
            name: spec.map(|s| s.name.clone()).unwrap_or_else(|| "Divider".into()),
            width: spec.map_or(0.0, |s| s.default_width),
            segment_id: segment_id.into(),
            position: position.clamp(0.0, 1.0),
            price: spec.map_or(0.0, |s| s.price),
        }
    }
}

/// Complete declarative description of one countertop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "DesignRecord", into = "DesignRecord")]
pub struct Design {
    pub layout: Layout,
    pub orientation: Orientation,
    pub dimensions: Dimensions,
    pub style: CountertopStyle,
    pub segment_styles: Vec<SegmentStyle>,
    pub cutouts: Vec<Cutout>,
    pub dividers: Vec<DividerElement>,
}

impl Design {
    /// Design for `layout` with its default dimensions and the given style.
    pub fn new(layout: Layout, style: CountertopStyle) -> Design {
        Design {
            layout,
            orientation: Orientation::default(),
            dimensions: Dimensions::defaults_for(layout),
            style,
            segment_styles: Vec::new(),
            cutouts: Vec::new(),
            dividers: Vec::new(),
        }
    }

    /// Style of a segment: its override if present (ids compare case-insensitively), else the design style.
    pub fn style_for_segment(&self, segment_id: &str) -> &CountertopStyle {
        self.segment_styles
            .iter()
            .find(|s| s.segment_id.eq_ignore_ascii_case(segment_id))
            .map_or(&self.style, |s| &s.style)
    }

    pub fn cutout(&self, id: &str) -> Option<&Cutout> {
        self.cutouts.iter().find(|c| c.id == id)
    }
}

/// Kind of a placement or dimension problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    EdgeDistance,
    Overlap,
    OutsideBounds,
    DimensionInvalid,
}

/// One validation finding. Findings are data, never raised.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Point>,
    /// Ids of the cutouts concerned, in the order they were checked.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cutouts: Vec<String>,
}

/// On-disk dimensions: every field any layout uses, all optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionsRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_b: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap_width: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DesignRecord {
    layout: Layout,
    #[serde(default)]
    orientation: Orientation,
    #[serde(default)]
    dimensions: DimensionsRecord,
    style: CountertopStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    segment_styles: Vec<SegmentStyle>,
    #[serde(default)]
    cutouts: Vec<Cutout>,
    #[serde(default)]
    dividers: Vec<DividerElement>,
}

impl From<DesignRecord> for Design {
    fn from(r: DesignRecord) -> Self {
        Design {
            layout: r.layout,
            orientation: r.orientation,
            dimensions: Dimensions::from_record(r.layout, &r.dimensions),
            style: r.style,
            segment_styles: r.segment_styles,
            cutouts: r.cutouts,
            dividers: r.dividers,
        }
    }
}

impl From<Design> for DesignRecord {
    fn from(d: Design) -> Self {
        DesignRecord {
            layout: d.layout,
            orientation: d.orientation,
            dimensions: d.dimensions.to_record(),
            style: d.style,
            segment_styles: d.segment_styles,
            cutouts: d.cutouts,
            dividers: d.dividers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRAIGHT_JSON: &str = r##"{
        "layout": "straight",
        "dimensions": { "length": 300, "depth": 60, "lengthA": 999 },
        "style": { "type": "color", "value": "#FFFFFF", "name": "White" },
        "cutouts": [{
            "id": "c1", "name": "Sink", "type": "sink",
            "width": 40, "depth": 40, "offsetX": 50, "offsetY": 30,
            "referenceX": "left", "referenceY": "front"
        }]
    }"##;

    #[test]
    fn load_picks_variant_by_layout() {
        let d: Design = serde_json::from_str(STRAIGHT_JSON).unwrap();
        assert_eq!(
            d.dimensions,
            Dimensions::Straight {
                length: 300.0,
                depth: 60.0
            }
        );
        assert_eq!(d.orientation, Orientation::LeftArm);
        assert!(d.dividers.is_empty());
        assert_eq!(d.cutouts[0].kind, CutoutKind::Sink);
    }

    #[test]
    fn missing_fields_load_as_zero() {
        let json = r##"{
            "layout": "u-shape",
            "dimensions": { "depth": 60, "gapWidth": 200 },
            "style": { "type": "color", "value": "#FFFFFF", "name": "White" }
        }"##;
        let d: Design = serde_json::from_str(json).unwrap();
        assert_eq!(
            d.dimensions,
            Dimensions::UShape {
                length_left: 0.0,
                length_right: 0.0,
                gap_width: 200.0,
                depth: 60.0
            }
        );
    }

    #[test]
    fn save_writes_only_variant_fields() {
        let d: Design = serde_json::from_str(STRAIGHT_JSON).unwrap();
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["dimensions"]["length"], 300.0);
        assert!(v["dimensions"].get("lengthA").is_none());
        let back: Design = serde_json::from_value(v).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn unknown_cutout_type_is_custom() {
        let c: Cutout = serde_json::from_str(
            r#"{"id":"x","name":"Hole","type":"laser-etching","width":5,"depth":5,
                "offsetX":1,"offsetY":1,"referenceX":"right","referenceY":"back"}"#,
        )
        .unwrap();
        assert_eq!(c.kind, CutoutKind::Custom);
        assert_eq!((c.reference_x, c.reference_y), (RefX::Right, RefY::Back));
    }

    #[test]
    fn segment_style_override_is_case_insensitive() {
        let base: Design = serde_json::from_str(STRAIGHT_JSON).unwrap();
        let mut d = base.clone();
        let oak = CountertopStyle {
            kind: StyleKind::Texture,
            value: "oak".into(),
            name: "Oak".into(),
            price_per_sqm: None,
            category: None,
        };
        d.segment_styles.push(SegmentStyle {
            segment_id: "A".into(),
            name: "A".into(),
            style: oak.clone(),
        });
        assert_eq!(d.style_for_segment("a"), &oak);
        assert_eq!(d.style_for_segment("main"), &base.style);
    }

    #[test]
    fn catalog_defaults_for_new_elements() {
        let cat = Catalog::default();
        let c = Cutout::from_catalog("c9", CutoutKind::DoubleSink, &cat);
        assert_eq!((c.width, c.depth), (80.0, 40.0));
        let d = DividerElement::from_catalog("d1", DividerKind::Column, "main", 1.4, &cat);
        assert_eq!((d.width, d.price, d.position), (30.0, 200.0, 1.0));
    }
}
