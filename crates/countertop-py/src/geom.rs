//! Polygon, segment and placement bindings.

use crate::common::{dimensions, from_json, layout, orientation, point, polygon, ref_x, ref_y, to_json, tuples};
use countertop::api;
use countertop::model::{Cutout, DividerElement};
use pyo3::prelude::*;

/// Outer polygon as a list of `(x, y)`; empty for unusable dimensions.
#[pyfunction]
pub fn generate_polygon(layout_name: &str, dimensions_json: &str, orientation_name: &str) -> PyResult<Vec<(f64, f64)>> {
    let l = layout(layout_name)?;
    let dims = dimensions(l, dimensions_json)?;
    Ok(tuples(&api::generate_polygon(l, &dims, orientation(orientation_name)?)))
}

/// Segments as a JSON array of `{segmentId, name, polygon}`.
#[pyfunction]
pub fn generate_segment_polygons(layout_name: &str, dimensions_json: &str, orientation_name: &str) -> PyResult<String> {
    let l = layout(layout_name)?;
    let dims = dimensions(l, dimensions_json)?;
    to_json(&api::generate_segment_polygons(l, &dims, orientation(orientation_name)?))
}

#[pyfunction]
pub fn generate_segment_polygons_with_dividers(
    layout_name: &str,
    dimensions_json: &str,
    orientation_name: &str,
    dividers_json: &str,
) -> PyResult<String> {
    let l = layout(layout_name)?;
    let dims = dimensions(l, dimensions_json)?;
    let dividers: Vec<DividerElement> = from_json("dividers", dividers_json)?;
    to_json(&api::generate_segment_polygons_with_dividers(
        l,
        &dims,
        orientation(orientation_name)?,
        &dividers,
    ))
}

#[pyfunction]
pub fn calculate_cutout_position(cutout_json: &str, poly: Vec<(f64, f64)>) -> PyResult<(f64, f64)> {
    let cutout: Cutout = from_json("cutout", cutout_json)?;
    let p = api::calculate_cutout_position(&cutout, &polygon(poly));
    Ok((p.x, p.y))
}

/// `(offsetX, offsetY)` placing a cutout center at `at`.
#[pyfunction]
pub fn calculate_offsets_from_position(
    at: (f64, f64),
    poly: Vec<(f64, f64)>,
    reference_x: &str,
    reference_y: &str,
) -> PyResult<(f64, f64)> {
    let o = api::calculate_offsets_from_position(point(at), &polygon(poly), ref_x(reference_x)?, ref_y(reference_y)?);
    Ok((o.offset_x, o.offset_y))
}

#[pyfunction]
pub fn is_point_in_cutout(at: (f64, f64), cutout_json: &str, poly: Vec<(f64, f64)>) -> PyResult<bool> {
    let cutout: Cutout = from_json("cutout", cutout_json)?;
    Ok(api::is_point_in_cutout(point(at), &cutout, &polygon(poly)))
}

#[pyfunction]
pub fn get_distance_to_edge(at: (f64, f64), poly: Vec<(f64, f64)>) -> f64 {
    api::get_distance_to_edge(point(at), &polygon(poly))
}

#[pyfunction]
pub fn snap_to_grid(value: f64, grid_size: f64) -> f64 {
    api::snap_to_grid(value, grid_size)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_polygon, m)?)?;
    m.add_function(wrap_pyfunction!(generate_segment_polygons, m)?)?;
    m.add_function(wrap_pyfunction!(generate_segment_polygons_with_dividers, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_cutout_position, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_offsets_from_position, m)?)?;
    m.add_function(wrap_pyfunction!(is_point_in_cutout, m)?)?;
    m.add_function(wrap_pyfunction!(get_distance_to_edge, m)?)?;
    m.add_function(wrap_pyfunction!(snap_to_grid, m)?)?;
    Ok(())
}
