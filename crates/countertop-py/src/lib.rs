//! PyO3 bindings for the host-facing `countertop` operations.
//!
//! Notes
//! - Structured values (designs, cutouts, dividers, errors, dimension
//!   records) cross the boundary as JSON strings in the same camelCase shape
//!   the persistence layer stores. Points are `(x, y)` tuples.
//! - Parse failures raise `ValueError`; engine calls themselves never fail.

use pyo3::prelude::*;

mod common;
mod engine;
mod geom;

#[pymodule]
fn countertop_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", countertop::VERSION)?;
    geom::register(m)?;
    engine::register(m)?;
    Ok(())
}
