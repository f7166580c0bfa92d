//! Curated entry points, one per host-facing operation.
//!
//! The CLI and the Python bindings import from here only. Names follow the
//! host contract; configurable variants carry a `_with` suffix.

// Geometry
pub use crate::polygon::{arm_width, generate_polygon, inner_gap};
pub use crate::segments::{
    generate_segment_polygons, generate_segment_polygons_with_dividers, Segment, MAIN_SEGMENT,
};
// Placement
pub use crate::placement::{
    calculate_cutout_position, calculate_offsets_from_position, cutout_rect, do_rectangles_overlap,
    get_distance_to_edge, is_point_in_cutout, snap_to_grid, Offsets,
};
// Validation and repair
pub use crate::validate::{
    apply_auto_fix, can_auto_fix, get_auto_fix_suggestion, get_auto_fix_suggestion_with, validate_design,
    validate_design_with, validation_summary,
};
// Pricing
pub use crate::pricing::{
    calculate_pricing, calculate_pricing_with, format_area, format_length, format_price, PricingBreakdown,
};
// Presentation
pub use crate::dimensioning::{generate_dimension_lines, Axis, DimensionLine};
pub use crate::units::{convert, format_value, Unit};
