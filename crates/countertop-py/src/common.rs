use countertop::model::{Dimensions, DimensionsRecord, Layout, Orientation, RefX, RefY};
use countertop::Point;
use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub fn from_json<T: DeserializeOwned>(what: &str, text: &str) -> PyResult<T> {
    serde_json::from_str(text).map_err(|err| PyValueError::new_err(format!("invalid {what}: {err}")))
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Enum from its wire name, e.g. `"l-shape"` or `"right"`.
fn from_name<T: DeserializeOwned>(what: &str, name: &str) -> PyResult<T> {
    serde_json::from_value(serde_json::Value::String(name.to_string()))
        .map_err(|_| PyValueError::new_err(format!("unknown {what} '{name}'")))
}

pub fn layout(name: &str) -> PyResult<Layout> {
    from_name("layout", name)
}

pub fn orientation(name: &str) -> PyResult<Orientation> {
    from_name("orientation", name)
}

pub fn ref_x(name: &str) -> PyResult<RefX> {
    from_name("referenceX", name)
}

pub fn ref_y(name: &str) -> PyResult<RefY> {
    from_name("referenceY", name)
}

pub fn dimensions(layout: Layout, record_json: &str) -> PyResult<Dimensions> {
    let record: DimensionsRecord = from_json("dimensions", record_json)?;
    Ok(Dimensions::from_record(layout, &record))
}

#[inline]
pub fn point(p: (f64, f64)) -> Point {
    Vector2::new(p.0, p.1)
}

pub fn polygon(points: Vec<(f64, f64)>) -> Vec<Point> {
    points.into_iter().map(point).collect()
}

pub fn tuples(points: &[Point]) -> Vec<(f64, f64)> {
    points.iter().map(|p| (p.x, p.y)).collect()
}
