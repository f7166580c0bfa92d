//! Countertop geometry, segmentation, placement validation and pricing.
//!
//! Every entry point is a pure function of its arguments: a `Design` goes in,
//! fresh derived values come out. Renderers and exporters call the same
//! functions so on-screen and exported coordinates agree exactly.
//!
//! Conventions
//! - Lengths are centimeters, areas m², money PLN.
//! - Origin is the top-left of the design frame; y grows toward the front.
//! - Invalid or missing dimensions degrade to an empty polygon, never a panic.
//!
//! API Policy
//! - `api` is the curated surface used by the CLI and the Python bindings.
//!   Modules stay public for tests and experiments; their layout may change.

pub mod api;
pub mod catalog;
pub mod cfg;
pub mod dimensioning;
pub mod geom;
pub mod model;
pub mod placement;
pub mod polygon;
pub mod pricing;
pub mod segments;
pub mod units;
pub mod validate;

#[cfg(test)]
mod tests_props;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::Point;

/// Common types for quick imports in callers.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::cfg::{PricingCfg, ValidationCfg};
    pub use crate::geom::{BBox, Point, Rect};
    pub use crate::model::{
        CountertopStyle, Cutout, CutoutKind, Design, Dimensions, DividerElement, DividerKind, ErrorKind,
        Layout, Orientation, RefX, RefY, StyleKind, ValidationError,
    };
    pub use crate::pricing::PricingBreakdown;
    pub use crate::segments::Segment;
    pub use crate::units::Unit;
}
