//! PyO3 bindings for `polylabel`.
//!
//! Rings cross the boundary as lists of `(x, y)` tuples; results come back as
//! plain tuples so the Python side needs no wrapper classes.

use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use polylabel::geom2::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
use polylabel::search::{solve, NoopObserver, SearchCfg};
use polylabel::{geom2, Polygon};

/// Pole of inaccessibility as `(x, y, d)`.
#[pyfunction]
#[pyo3(signature = (rings, precision = 1.0, max_probes = None))]
fn pole_of_inaccessibility(
    rings: Vec<Vec<(f64, f64)>>,
    precision: f64,
    max_probes: Option<usize>,
) -> PyResult<(f64, f64, f64)> {
    let polygon = Polygon::from_coords(&rings);
    let scfg = SearchCfg {
        max_probes,
        ..SearchCfg::default()
    };
    let report = solve(&polygon, precision, scfg, &mut NoopObserver)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok((report.pole.x, report.pole.y, report.pole.d))
}

/// Signed distance from `point` to the outline (negative outside).
#[pyfunction]
fn signed_distance(point: (f64, f64), rings: Vec<Vec<(f64, f64)>>) -> f64 {
    let polygon = Polygon::from_coords(&rings);
    geom2::point_to_polygon_dist(Vector2::new(point.0, point.1), &polygon)
}

/// Reproducible random star-shaped polygon (single ring).
#[pyfunction]
#[pyo3(signature = (seed, index = 0, vertices = 12))]
fn sample_polygon(seed: u64, index: u64, vertices: usize) -> Vec<Vec<(f64, f64)>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    draw_polygon_radial(cfg, ReplayToken { seed, index })
        .rings
        .iter()
        .map(|ring| ring.iter().map(|p| (p.x, p.y)).collect())
        .collect()
}

#[pymodule]
fn polylabel_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pole_of_inaccessibility, m)?)?;
    m.add_function(wrap_pyfunction!(signed_distance, m)?)?;
    m.add_function(wrap_pyfunction!(sample_polygon, m)?)?;
    Ok(())
}
