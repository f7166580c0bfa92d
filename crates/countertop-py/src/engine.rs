//! Validation, auto-fix and pricing bindings. Designs go in as JSON.

use crate::common::{from_json, to_json};
use countertop::api;
use countertop::model::{Design, ValidationError};
use pyo3::prelude::*;

/// Errors as a JSON array.
#[pyfunction]
pub fn validate_design(design_json: &str) -> PyResult<String> {
    let design: Design = from_json("design", design_json)?;
    to_json(&api::validate_design(&design))
}

/// Suggested cutout as JSON, or `None`. An unchanged cutout means the repair found nothing.
#[pyfunction]
pub fn get_auto_fix_suggestion(error_json: &str, design_json: &str) -> PyResult<Option<String>> {
    let error: ValidationError = from_json("error", error_json)?;
    let design: Design = from_json("design", design_json)?;
    api::get_auto_fix_suggestion(&error, &design)
        .map(|c| to_json(&c))
        .transpose()
}

#[pyfunction]
pub fn can_auto_fix(error_json: &str) -> PyResult<bool> {
    let error: ValidationError = from_json("error", error_json)?;
    Ok(api::can_auto_fix(&error))
}

/// Breakdown as a JSON object with camelCase keys.
#[pyfunction]
pub fn calculate_pricing(design_json: &str) -> PyResult<String> {
    let design: Design = from_json("design", design_json)?;
    to_json(&api::calculate_pricing(&design))
}

#[pyfunction]
pub fn format_price(price: f64) -> String {
    api::format_price(price)
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(validate_design, m)?)?;
    m.add_function(wrap_pyfunction!(get_auto_fix_suggestion, m)?)?;
    m.add_function(wrap_pyfunction!(can_auto_fix, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_pricing, m)?)?;
    m.add_function(wrap_pyfunction!(format_price, m)?)?;
    Ok(())
}
